use serde::Serialize;

use crate::color::{CityColors, ContinuousScale, Rgb};
use crate::config::{
    COL_HAPPINESS, COL_LIFE_EXPECTANCY, COL_POLLUTION, HAPPINESS_SCATTER_TITLE, MAP_COLOR_LABEL,
    MAP_SIZE_LEGEND, MAP_TITLE, MAX_MARKER_RADIUS, MIN_MARKER_RADIUS, POLLUTION_SCATTER_TITLE,
    WATER_COST_LABEL,
};
use crate::data::filter::{filtered_indices, CitySelection};
use crate::data::model::{CellValue, CityDataset, CityRecord};

// ---------------------------------------------------------------------------
// Derived view specifications
// ---------------------------------------------------------------------------

/// Everything the dashboard draws for one selection state.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub map: GeoMapSpec,
    pub happiness_scatter: ScatterSpec,
    pub pollution_scatter: ScatterSpec,
    pub table: TablePayload,
}

/// Bubble map: one marker per selected city.
#[derive(Debug, Clone, Serialize)]
pub struct GeoMapSpec {
    pub title: String,
    pub color_label: String,
    pub size_legend: String,
    /// Reference circles for the size legend, smallest first.
    pub size_samples: Vec<SizeSample>,
    /// Life-expectancy range the colour bar spans; `None` without data.
    pub color_scale: Option<ContinuousScale>,
    pub markers: Vec<MapMarker>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MapMarker {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius: f32,
    pub color: Rgb,
    pub happiness: Option<f64>,
    pub life_expectancy: Option<f64>,
}

impl MapMarker {
    /// Tooltip shown when hovering the marker.
    pub fn hover_text(&self) -> String {
        let metric = |v: Option<f64>| v.map_or_else(|| "n/a".to_string(), |v| format!("{v}"));
        format!(
            "{}\n{}: {}\nHappiness: {}",
            self.city,
            MAP_COLOR_LABEL,
            metric(self.life_expectancy),
            metric(self.happiness)
        )
    }
}

/// One circle of the size legend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeSample {
    pub happiness: f64,
    pub radius: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScatterSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<ScatterSeries>,
}

impl ScatterSpec {
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

/// Points of one city.
#[derive(Debug, Clone, Serialize)]
pub struct ScatterSeries {
    pub name: String,
    pub color: Rgb,
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnDef {
    pub name: String,
    pub id: String,
}

/// Table rows are aligned with `columns`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TablePayload {
    pub columns: Vec<ColumnDef>,
    pub rows: Vec<Vec<CellValue>>,
}

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// Compute the full view for the given selection.
///
/// Total over every selection: unknown cities select nothing and unknown
/// columns are skipped.
pub fn derive_view(
    dataset: &CityDataset,
    colors: &CityColors,
    cities: &CitySelection,
    columns: &[String],
) -> DashboardView {
    let rows: Vec<&CityRecord> = filtered_indices(dataset, cities)
        .into_iter()
        .map(|i| &dataset.records[i])
        .collect();

    DashboardView {
        map: geo_map(&rows, dataset.max_happiness()),
        happiness_scatter: scatter(
            &rows,
            colors,
            HAPPINESS_SCATTER_TITLE,
            (COL_HAPPINESS, |r: &CityRecord| r.happiness),
            (COL_LIFE_EXPECTANCY, |r: &CityRecord| r.life_expectancy),
        ),
        pollution_scatter: scatter(
            &rows,
            colors,
            POLLUTION_SCATTER_TITLE,
            (WATER_COST_LABEL, |r: &CityRecord| r.water_cost),
            (COL_POLLUTION, |r: &CityRecord| r.pollution),
        ),
        table: table(dataset, &rows, columns),
    }
}

/// Marker radius whose area is proportional to `happiness`, reaching
/// [`MAX_MARKER_RADIUS`] at `max_happiness`.
pub fn marker_radius(happiness: Option<f64>, max_happiness: Option<f64>) -> f32 {
    match (happiness, max_happiness) {
        (Some(h), Some(max)) if max > 0.0 && h > 0.0 => {
            let r = MAX_MARKER_RADIUS * (h / max).sqrt() as f32;
            r.clamp(MIN_MARKER_RADIUS, MAX_MARKER_RADIUS)
        }
        _ => MIN_MARKER_RADIUS,
    }
}

/// Legend circles at a quarter, half, three quarters and all of the
/// dataset's largest happiness score.
pub fn size_samples(max_happiness: Option<f64>) -> Vec<SizeSample> {
    let Some(max) = max_happiness.filter(|m| *m > 0.0) else {
        return Vec::new();
    };
    [0.25, 0.5, 0.75, 1.0]
        .iter()
        .map(|f| {
            let happiness = (max * f * 100.0).round() / 100.0;
            SizeSample {
                happiness,
                radius: marker_radius(Some(happiness), Some(max)),
            }
        })
        .collect()
}

fn geo_map(rows: &[&CityRecord], max_happiness: Option<f64>) -> GeoMapSpec {
    let color_scale = ContinuousScale::spanning(rows.iter().filter_map(|r| r.life_expectancy));

    let markers = rows
        .iter()
        .filter_map(|r| {
            let (latitude, longitude) = (r.latitude?, r.longitude?);
            let color = match (color_scale, r.life_expectancy) {
                (Some(scale), Some(le)) => scale.color_for(le),
                _ => Rgb::GRAY,
            };
            Some(MapMarker {
                city: r.city.clone(),
                latitude,
                longitude,
                radius: marker_radius(r.happiness, max_happiness),
                color,
                happiness: r.happiness,
                life_expectancy: r.life_expectancy,
            })
        })
        .collect();

    GeoMapSpec {
        title: MAP_TITLE.to_string(),
        color_label: MAP_COLOR_LABEL.to_string(),
        size_legend: MAP_SIZE_LEGEND.to_string(),
        size_samples: size_samples(max_happiness),
        color_scale,
        markers,
    }
}

type Metric = fn(&CityRecord) -> Option<f64>;

fn scatter(
    rows: &[&CityRecord],
    colors: &CityColors,
    title: &str,
    (x_label, x): (&str, Metric),
    (y_label, y): (&str, Metric),
) -> ScatterSpec {
    let mut series: Vec<ScatterSeries> = Vec::new();
    for r in rows {
        let (Some(px), Some(py)) = (x(r), y(r)) else {
            continue;
        };
        match series.iter_mut().find(|s| s.name == r.city) {
            Some(s) => s.points.push([px, py]),
            None => series.push(ScatterSeries {
                name: r.city.clone(),
                color: colors.color_for(&r.city),
                points: vec![[px, py]],
            }),
        }
    }

    ScatterSpec {
        title: title.to_string(),
        x_label: x_label.to_string(),
        y_label: y_label.to_string(),
        series,
    }
}

fn table(dataset: &CityDataset, rows: &[&CityRecord], columns: &[String]) -> TablePayload {
    let columns: Vec<&String> = columns.iter().filter(|c| dataset.has_column(c)).collect();
    if columns.is_empty() {
        return TablePayload::default();
    }

    TablePayload {
        columns: columns
            .iter()
            .map(|c| ColumnDef {
                name: (*c).clone(),
                id: (*c).clone(),
            })
            .collect(),
        rows: rows
            .iter()
            .map(|r| columns.iter().map(|c| r.cell(c)).collect())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{COL_CITY, COL_RANK};
    use crate::data::loader::read_csv;

    const TWO_CITIES: &str = "City,Rank,Cost of a bottle of water(City),Life expectancy(years) (Country),\
Pollution(Index score) (City),Happiness levels(Country),Latitude,Longitude
A,1,1.5,80,30,5,10.0,20.0
B,2,0.5,75,70,8,-10.0,-20.0
";

    fn dataset() -> CityDataset {
        read_csv(TWO_CITIES.as_bytes()).unwrap()
    }

    fn derive(ds: &CityDataset, cities: &[&str], columns: &[&str]) -> DashboardView {
        let colors = CityColors::new(&ds.cities);
        let cities: CitySelection = cities.iter().map(|c| c.to_string()).collect();
        let columns: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
        derive_view(ds, &colors, &cities, &columns)
    }

    #[test]
    fn single_city_selection() {
        let ds = dataset();
        let view = derive(&ds, &["A"], &[COL_CITY, COL_HAPPINESS]);

        assert_eq!(view.map.markers.len(), 1);
        let marker = &view.map.markers[0];
        assert_eq!(marker.city, "A");
        assert_eq!((marker.latitude, marker.longitude), (10.0, 20.0));

        assert_eq!(view.happiness_scatter.point_count(), 1);
        assert_eq!(view.happiness_scatter.series[0].points, vec![[5.0, 80.0]]);
        assert_eq!(view.pollution_scatter.point_count(), 1);
        assert_eq!(view.pollution_scatter.series[0].points, vec![[1.5, 30.0]]);

        assert_eq!(view.table.rows.len(), 1);
        assert_eq!(
            view.table.rows[0],
            vec![CellValue::Text("A".into()), CellValue::Integer(5)]
        );
    }

    #[test]
    fn empty_city_selection_is_empty_output() {
        let ds = dataset();
        let view = derive(&ds, &[], &[COL_CITY]);
        assert!(view.map.markers.is_empty());
        assert!(view.map.color_scale.is_none());
        assert!(view.happiness_scatter.series.is_empty());
        assert!(view.pollution_scatter.series.is_empty());
        assert_eq!(view.table.columns.len(), 1);
        assert!(view.table.rows.is_empty());
    }

    #[test]
    fn empty_column_selection_is_empty_table() {
        let ds = dataset();
        let view = derive(&ds, &["A", "B"], &[]);
        assert!(view.table.columns.is_empty());
        assert!(view.table.rows.is_empty());
        assert_eq!(view.map.markers.len(), 2);
    }

    #[test]
    fn table_projects_selected_columns_in_selection_order() {
        let ds = dataset();
        let view = derive(&ds, &["B", "A"], &[COL_RANK, "Unknown", COL_CITY]);

        let names: Vec<&str> = view.table.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec![COL_RANK, COL_CITY]);
        assert!(view.table.columns.iter().all(|c| c.id == c.name));
        assert_eq!(
            view.table.rows,
            vec![
                vec![CellValue::Integer(1), CellValue::Text("A".into())],
                vec![CellValue::Integer(2), CellValue::Text("B".into())],
            ]
        );
    }

    #[test]
    fn marker_size_scales_with_dataset_max() {
        let ds = dataset();
        // Only A is selected but B still defines the maximum.
        let view = derive(&ds, &["A"], &[]);
        let expected = MAX_MARKER_RADIUS * (5.0_f64 / 8.0).sqrt() as f32;
        assert!((view.map.markers[0].radius - expected).abs() < 1e-4);

        let view = derive(&ds, &["B"], &[]);
        assert_eq!(view.map.markers[0].radius, MAX_MARKER_RADIUS);
    }

    #[test]
    fn marker_radius_bounds() {
        assert_eq!(marker_radius(Some(20.0), Some(8.0)), MAX_MARKER_RADIUS);
        assert_eq!(marker_radius(None, Some(8.0)), MIN_MARKER_RADIUS);
        assert_eq!(marker_radius(Some(0.0), Some(8.0)), MIN_MARKER_RADIUS);
        assert_eq!(marker_radius(Some(4.0), None), MIN_MARKER_RADIUS);
    }

    #[test]
    fn size_legend_samples_follow_marker_radius() {
        let ds = dataset();
        // The legend is scaled to the whole dataset even when nothing is selected.
        let view = derive(&ds, &[], &[]);
        let samples = &view.map.size_samples;
        let happiness: Vec<f64> = samples.iter().map(|s| s.happiness).collect();
        assert_eq!(happiness, vec![2.0, 4.0, 6.0, 8.0]);
        assert!(samples.windows(2).all(|w| w[0].radius < w[1].radius));
        assert_eq!(samples.last().map(|s| s.radius), Some(MAX_MARKER_RADIUS));
        for s in samples {
            assert_eq!(s.radius, marker_radius(Some(s.happiness), Some(8.0)));
        }
        assert_eq!(view.map.size_legend, MAP_SIZE_LEGEND);
        assert!(size_samples(None).is_empty());
    }

    #[test]
    fn marker_hover_shows_life_expectancy() {
        let ds = dataset();
        let view = derive(&ds, &["A"], &[]);
        assert_eq!(
            view.map.markers[0].hover_text(),
            "A\nLife Expectancy: 80\nHappiness: 5"
        );

        let mut marker = view.map.markers[0].clone();
        marker.life_expectancy = None;
        assert!(marker.hover_text().contains("Life Expectancy: n/a"));
    }

    #[test]
    fn marker_color_spans_filtered_life_expectancy() {
        let ds = dataset();
        let view = derive(&ds, &["A", "B"], &[]);
        assert_eq!(
            view.map.color_scale,
            Some(ContinuousScale { min: 75.0, max: 80.0 })
        );
        assert_eq!(view.map.markers[0].color, crate::color::viridis(1.0));
        assert_eq!(view.map.markers[1].color, crate::color::viridis(0.0));
    }

    #[test]
    fn scatter_series_follow_city_and_skip_missing_points() {
        let csv = "City,Rank,Cost of a bottle of water(City),Life expectancy(years) (Country),\
Pollution(Index score) (City),Happiness levels(Country),Latitude,Longitude
A,1,1.5,80,30,5,10.0,20.0
B,2,0.5,75,-,8,-10.0,-20.0
";
        let ds = read_csv(csv.as_bytes()).unwrap();
        let view = derive(&ds, &["A", "B"], &[]);

        let names: Vec<&str> = view
            .happiness_scatter
            .series
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_ne!(
            view.happiness_scatter.series[0].color,
            view.happiness_scatter.series[1].color
        );
        assert_eq!(view.pollution_scatter.point_count(), 1);
        assert_eq!(view.pollution_scatter.x_label, WATER_COST_LABEL);
    }

    #[test]
    fn view_serializes_to_json() {
        let ds = dataset();
        let view = derive(&ds, &["A"], &[COL_CITY]);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["table"]["columns"][0]["id"], "City");
        assert_eq!(json["table"]["rows"][0][0], "A");
        assert_eq!(json["map"]["markers"][0]["city"], "A");
    }
}
