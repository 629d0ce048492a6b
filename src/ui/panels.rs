use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::config::WINDOW_TITLE;
use crate::state::{AppState, BulkAction};

// ---------------------------------------------------------------------------
// Left side panel – city checklist and column selector
// ---------------------------------------------------------------------------

/// Render the left selection panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Cities");
    ui.separator();

    // ---- Bulk buttons ----
    let mut bulk = None;
    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Select All").clicked() {
            bulk = Some(BulkAction::SelectAll);
        }
        if ui.button("Deselect All").clicked() {
            bulk = Some(BulkAction::DeselectAll);
        }
    });
    if let Some(action) = bulk {
        state.apply(action);
    }

    // ---- City checklist ----
    let mut toggled_city: Option<String> = None;
    ScrollArea::vertical()
        .id_salt("city_checklist")
        .max_height(ui.available_height() * 0.55)
        .auto_shrink([false, true])
        .show(ui, |ui: &mut Ui| {
            for city in &state.dataset.cities {
                let mut checked = state.is_city_selected(city);
                let text = RichText::new(city).color(Color32::from(state.colors.color_for(city)));
                if ui.checkbox(&mut checked, text).changed() {
                    toggled_city = Some(city.clone());
                }
            }
        });
    if let Some(city) = toggled_city {
        state.toggle_city(&city);
    }

    ui.separator();
    column_selector(ui, state);
}

/// Multi-select dropdown of table columns, plus removable chips for the
/// current picks.
fn column_selector(ui: &mut Ui, state: &mut AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading("Select Columns");
    });

    let mut toggled_column: Option<String> = None;
    let mut clear = false;

    // Stays open while picking several columns.
    egui::ComboBox::from_id_salt("column_selector")
        .close_behavior(egui::PopupCloseBehavior::CloseOnClickOutside)
        .width(ui.available_width())
        .selected_text(format!("{} selected", state.selected_columns.len()))
        .show_ui(ui, |ui: &mut Ui| {
            for col in &state.dataset.column_names {
                if ui
                    .selectable_label(state.is_column_selected(col), col)
                    .clicked()
                {
                    toggled_column = Some(col.clone());
                }
            }
        });

    ui.horizontal_wrapped(|ui: &mut Ui| {
        for col in &state.selected_columns {
            if ui
                .small_button(format!("✕ {col}"))
                .on_hover_text("Remove column")
                .clicked()
            {
                toggled_column = Some(col.clone());
            }
        }
    });

    if !state.selected_columns.is_empty() && ui.small_button("Clear").clicked() {
        clear = true;
    }

    if let Some(col) = toggled_column {
        state.toggle_column(&col);
    }
    if clear {
        state.clear_columns();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title bar with selection status and JSON export.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong(WINDOW_TITLE);
        ui.separator();

        ui.label(format!(
            "{} cities loaded, {} selected",
            state.dataset.cities.len(),
            state.selected_cities.len()
        ));

        ui.separator();

        if ui
            .button("Copy view JSON")
            .on_hover_text("Copy the current charts and table as JSON")
            .clicked()
        {
            match serde_json::to_string_pretty(&state.view) {
                Ok(json) => ui.ctx().copy_text(json),
                Err(e) => log::error!("Failed to serialize view: {e}"),
            }
        }
    });
}
