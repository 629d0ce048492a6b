use eframe::egui::{vec2, Align2, Color32, RichText, Sense, Ui};
use egui_plot::{
    Legend, Line, LineStyle, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Text,
};

use crate::color::{viridis, Rgb};
use crate::config::MAP_NOTE;
use crate::geo::{CONTINENTS, REFERENCE_LINES};
use crate::view::{GeoMapSpec, ScatterSpec};

const PLOT_HEIGHT: f32 = 360.0;
const SCATTER_RADIUS: f32 = 4.0;
const COASTLINE_COLOR: Color32 = Color32::from_rgb(110, 130, 150);
const REFERENCE_COLOR: Color32 = Color32::from_gray(120);

// ---------------------------------------------------------------------------
// Bubble map
// ---------------------------------------------------------------------------

/// Render the life-expectancy bubble map over a coarse world outline.
pub fn geo_map(ui: &mut Ui, map: &GeoMapSpec) {
    ui.heading(map.title.as_str());

    Plot::new("life_expectancy_map")
        .height(PLOT_HEIGHT + 60.0)
        .data_aspect(1.0)
        .include_x(-180.0)
        .include_x(180.0)
        .include_y(-90.0)
        .include_y(90.0)
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .allow_scroll(false)
        .label_formatter(|name: &str, value: &PlotPoint| {
            if name.is_empty() {
                String::new()
            } else {
                format!("{name}\nlat {:.2}, lon {:.2}", value.y, value.x)
            }
        })
        .show(ui, |plot_ui| {
            // Back to front: reference lines, coastlines, markers.
            for line in &REFERENCE_LINES {
                let points: PlotPoints = [line.from, line.to].into_iter().collect();
                plot_ui.line(
                    Line::new(points)
                        .color(REFERENCE_COLOR)
                        .width(0.5)
                        .style(LineStyle::dashed_loose()),
                );
                let anchor = if line.from[1] == line.to[1] {
                    PlotPoint::new(-178.0, line.from[1] + 1.0)
                } else {
                    PlotPoint::new(line.from[0] + 1.0, -85.0)
                };
                plot_ui.text(
                    Text::new(anchor, RichText::new(line.label).small())
                        .color(REFERENCE_COLOR)
                        .anchor(Align2::LEFT_BOTTOM),
                );
            }
            for outline in &CONTINENTS {
                let points: PlotPoints = outline.points.iter().copied().collect();
                plot_ui.line(Line::new(points).color(COASTLINE_COLOR).width(1.0));
            }
            for marker in &map.markers {
                let points: PlotPoints =
                    std::iter::once([marker.longitude, marker.latitude]).collect();
                plot_ui.points(
                    Points::new(points)
                        .name(marker.hover_text())
                        .color(Color32::from(marker.color))
                        .radius(marker.radius)
                        .shape(MarkerShape::Circle)
                        .filled(true),
                );
            }
        });

    ui.label(MAP_NOTE);
    size_legend(ui, map);
    color_bar(ui, map);
}

/// Sample circles drawn at the same radius the map uses.
fn size_legend(ui: &mut Ui, map: &GeoMapSpec) {
    if map.size_samples.is_empty() {
        return;
    }
    ui.horizontal(|ui: &mut Ui| {
        ui.strong(map.size_legend.as_str());
        for sample in &map.size_samples {
            let diameter = sample.radius * 2.0 + 2.0;
            let (rect, _) = ui.allocate_exact_size(vec2(diameter, diameter), Sense::hover());
            ui.painter()
                .circle_filled(rect.center(), sample.radius, Color32::from(Rgb::GRAY));
            ui.label(format!("{:.2}", sample.happiness));
        }
    });
}

/// Horizontal Viridis strip labelled with the life-expectancy range.
fn color_bar(ui: &mut Ui, map: &GeoMapSpec) {
    let Some(scale) = map.color_scale else {
        return;
    };
    ui.horizontal(|ui: &mut Ui| {
        ui.strong(map.color_label.as_str());
        ui.label(format!("{:.1}", scale.min));
        ui.spacing_mut().item_spacing.x = 0.0;
        for step in 0..=20 {
            let c = viridis(f64::from(step) / 20.0);
            ui.label(RichText::new("█").color(Color32::from(c)));
        }
        ui.spacing_mut().item_spacing.x = 4.0;
        ui.label(format!("{:.1}", scale.max));
    });
}

// ---------------------------------------------------------------------------
// Scatter plots
// ---------------------------------------------------------------------------

/// Render one scatter specification, one legend entry per city.
pub fn scatter(ui: &mut Ui, id: &str, spec: &ScatterSpec) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading(spec.title.as_str());
        ui.weak(format!("{} points", spec.point_count()));
    });

    Plot::new(id)
        .height(PLOT_HEIGHT)
        .legend(Legend::default())
        .x_axis_label(spec.x_label.as_str())
        .y_axis_label(spec.y_label.as_str())
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for series in &spec.series {
                let points: PlotPoints = series.points.iter().copied().collect();
                plot_ui.points(
                    Points::new(points)
                        .name(&series.name)
                        .color(Color32::from(series.color))
                        .radius(SCATTER_RADIUS)
                        .shape(MarkerShape::Circle)
                        .filled(true),
                );
            }
        });
}
