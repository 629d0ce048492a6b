use crate::color::CityColors;
use crate::config::DEFAULT_TABLE_COLUMNS;
use crate::data::filter::CitySelection;
use crate::data::model::CityDataset;
use crate::view::{derive_view, DashboardView};

// ---------------------------------------------------------------------------
// Bulk selection buttons
// ---------------------------------------------------------------------------

/// The two bulk controls above the city checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction {
    SelectAll,
    DeselectAll,
}

/// Resolve the city selection after a bulk control fired.
///
/// Without a trigger the current selection is kept unchanged.
pub fn apply_bulk(
    trigger: Option<BulkAction>,
    options: &[String],
    current: &CitySelection,
) -> CitySelection {
    match trigger {
        Some(BulkAction::SelectAll) => options.iter().cloned().collect(),
        Some(BulkAction::DeselectAll) => CitySelection::new(),
        None => current.clone(),
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset; immutable once the app starts.
    pub dataset: CityDataset,

    /// Per-city colours shared by both scatter plots.
    pub colors: CityColors,

    /// Cities ticked in the checklist.
    pub selected_cities: CitySelection,

    /// Table columns, in the order they were picked.
    pub selected_columns: Vec<String>,

    /// Derived charts and table for the current selection (cached).
    pub view: DashboardView,
}

impl AppState {
    /// Start with every city and the default table columns selected.
    pub fn new(dataset: CityDataset) -> Self {
        let colors = CityColors::new(&dataset.cities);
        let selected_cities = apply_bulk(
            Some(BulkAction::SelectAll),
            &dataset.cities,
            &CitySelection::new(),
        );
        let selected_columns: Vec<String> = DEFAULT_TABLE_COLUMNS
            .iter()
            .filter(|c| dataset.has_column(c))
            .map(|c| c.to_string())
            .collect();
        let view = derive_view(&dataset, &colors, &selected_cities, &selected_columns);

        Self {
            dataset,
            colors,
            selected_cities,
            selected_columns,
            view,
        }
    }

    /// Recompute the cached view after a selection change.
    pub fn refresh_view(&mut self) {
        self.view = derive_view(
            &self.dataset,
            &self.colors,
            &self.selected_cities,
            &self.selected_columns,
        );
        log::debug!(
            "view refreshed: {} cities, {} markers, table {}x{}",
            self.selected_cities.len(),
            self.view.map.markers.len(),
            self.view.table.rows.len(),
            self.view.table.columns.len()
        );
    }

    pub fn apply(&mut self, action: BulkAction) {
        self.selected_cities =
            apply_bulk(Some(action), &self.dataset.cities, &self.selected_cities);
        self.refresh_view();
    }

    pub fn select_all(&mut self) {
        self.apply(BulkAction::SelectAll);
    }

    pub fn deselect_all(&mut self) {
        self.apply(BulkAction::DeselectAll);
    }

    /// Tick or untick a single city in the checklist.
    pub fn toggle_city(&mut self, city: &str) {
        if !self.dataset.has_city(city) {
            log::warn!("ignoring unknown city '{city}'");
            return;
        }
        if !self.selected_cities.remove(city) {
            self.selected_cities.insert(city.to_string());
        }
        self.refresh_view();
    }

    /// Add a column to the table, or remove it if already shown.
    pub fn toggle_column(&mut self, column: &str) {
        if !self.dataset.has_column(column) {
            log::warn!("ignoring unknown column '{column}'");
            return;
        }
        match self.selected_columns.iter().position(|c| c == column) {
            Some(idx) => {
                self.selected_columns.remove(idx);
            }
            None => self.selected_columns.push(column.to_string()),
        }
        self.refresh_view();
    }

    pub fn clear_columns(&mut self) {
        self.selected_columns.clear();
        self.refresh_view();
    }

    pub fn is_city_selected(&self, city: &str) -> bool {
        self.selected_cities.contains(city)
    }

    pub fn is_column_selected(&self, column: &str) -> bool {
        self.selected_columns.iter().any(|c| c == column)
    }
}
