use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::view::TablePayload;

const ROW_HEIGHT: f32 = 18.0;

/// Render the details table for the selected rows and columns.
pub fn details_table(ui: &mut Ui, table: &TablePayload) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading("Details Table");
    });

    if table.columns.is_empty() {
        ui.label("No columns selected.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .vscroll(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .columns(Column::auto().at_least(80.0), table.columns.len())
        .header(20.0, |mut header| {
            for col in &table.columns {
                header.col(|ui| {
                    ui.strong(col.name.as_str());
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, table.rows.len(), |mut row| {
                let cells = &table.rows[row.index()];
                for cell in cells {
                    row.col(|ui| {
                        ui.label(cell.to_string());
                    });
                }
            });
        });
}
