use crate::color::SeriesColors;
use crate::data::filter::{Facet, FilterState, filtered_indices, init_filter_state};
use crate::data::loader::LoadError;
use crate::data::model::Dataset;
use crate::theme::ThemeState;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded data set (None until a load succeeds).
    pub dataset: Option<Dataset>,

    /// Per-facet filter selections.
    pub filters: FilterState,

    /// Indices of records passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Stable series colours for the loaded data set.
    pub series_colors: Option<SeriesColors>,

    /// Active display mode plus its observers.
    pub theme: ThemeState,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a load operation is in progress.
    pub loading: bool,

    /// Show the record table instead of the plot.
    pub show_table: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            filters: FilterState::default(),
            visible_indices: Vec::new(),
            series_colors: None,
            theme: ThemeState::new(),
            status_message: None,
            loading: false,
            show_table: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded data set, initialise filters and colours.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.filters = init_filter_state(&dataset);
        self.visible_indices = (0..dataset.len()).collect();
        self.series_colors = Some(SeriesColors::new(&dataset.series_labels()));

        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
    }

    /// Apply a load result. On success the data set is installed; on failure
    /// the dashboard stays empty, one diagnostic is logged, and the reason is
    /// surfaced in the status line.
    pub fn apply_fetch(&mut self, result: Result<Dataset, LoadError>) {
        match result {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} observations across {} categories",
                    dataset.len(),
                    dataset.categories.len()
                );
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load data: {e}");
                self.status_message = Some(format!("Error: {e}"));
                self.loading = false;
            }
        }
    }

    /// Recompute `visible_indices` after a filter change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_indices = filtered_indices(ds, &self.filters);
        }
    }

    /// Toggle a single value in a facet's selection.
    pub fn toggle_filter_value(&mut self, facet: Facet, value: &str) {
        let selected = self.filters.selected_mut(facet);
        if !selected.remove(value) {
            selected.insert(value.to_string());
        }
        self.refilter();
    }

    /// Select all values of a facet.
    pub fn select_all(&mut self, facet: Facet) {
        if let Some(ds) = &self.dataset {
            *self.filters.selected_mut(facet) = match facet {
                Facet::Category => ds.categories.clone(),
                Facet::Variable => ds.variables.clone(),
            };
            self.refilter();
        }
    }

    /// Deselect all values of a facet.
    pub fn select_none(&mut self, facet: Facet) {
        self.filters.selected_mut(facet).clear();
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader;
    use crate::data::model::Record;

    fn dataset() -> Dataset {
        let row = |category: &str, variable: &str, date: &str| Record {
            unit: "USD".to_string(),
            category: category.to_string(),
            variable: variable.to_string(),
            subvariable: String::new(),
            date: date.to_string(),
            value: 1.0,
        };
        Dataset::from_records(vec![
            row("Reservas", "RIN", "2024-01-01"),
            row("Reservas", "Oro", "2024-01-01"),
            row("Depósitos", "Cajas", "2024-01-08"),
        ])
    }

    #[test]
    fn successful_fetch_installs_the_dataset() {
        let mut state = AppState::default();
        state.apply_fetch(Ok(dataset()));

        assert_eq!(state.dataset.as_ref().unwrap().len(), 3);
        assert_eq!(state.visible_indices, vec![0, 1, 2]);
        assert_eq!(state.filters.categories.len(), 2);
        assert!(state.series_colors.is_some());
        assert!(state.status_message.is_none());
    }

    #[test]
    fn failed_fetch_degrades_to_an_empty_dashboard() {
        let mut state = AppState::default();
        let err = loader::parse_records("unidad,categoria\nUSD,Reservas\n").unwrap_err();
        state.apply_fetch(Err(err));

        assert!(state.dataset.is_none());
        assert!(state.visible_indices.is_empty());
        assert!(state.status_message.as_deref().unwrap().starts_with("Error:"));
        assert!(!state.loading);
    }

    #[test]
    fn filter_mutators_update_visible_indices() {
        let mut state = AppState::default();
        state.apply_fetch(Ok(dataset()));

        state.toggle_filter_value(Facet::Category, "Depósitos");
        assert_eq!(state.visible_indices, vec![0, 1]);

        // Toggling the same value back restores it.
        state.toggle_filter_value(Facet::Category, "Depósitos");
        assert_eq!(state.visible_indices, vec![0, 1, 2]);

        state.select_none(Facet::Variable);
        assert!(state.visible_indices.is_empty());

        state.select_all(Facet::Variable);
        assert_eq!(state.visible_indices, vec![0, 1, 2]);
    }
}
