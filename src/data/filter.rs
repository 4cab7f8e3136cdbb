use std::collections::BTreeSet;

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Filter predicate: which values are selected per facet
// ---------------------------------------------------------------------------

/// The two record fields the dashboard can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Category,
    Variable,
}

impl Facet {
    /// Header shown for this facet in the filter panel.
    pub fn label(self) -> &'static str {
        match self {
            Facet::Category => "Categoría",
            Facet::Variable => "Variable",
        }
    }
}

/// Per-facet selection state.
/// A full selection means "no filter"; an empty selection hides everything.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    pub categories: BTreeSet<String>,
    pub variables: BTreeSet<String>,
}

impl FilterState {
    pub fn selected(&self, facet: Facet) -> &BTreeSet<String> {
        match facet {
            Facet::Category => &self.categories,
            Facet::Variable => &self.variables,
        }
    }

    pub fn selected_mut(&mut self, facet: Facet) -> &mut BTreeSet<String> {
        match facet {
            Facet::Category => &mut self.categories,
            Facet::Variable => &mut self.variables,
        }
    }
}

/// Initialise a [`FilterState`] with all values selected (i.e., show everything).
pub fn init_filter_state(dataset: &Dataset) -> FilterState {
    FilterState {
        categories: dataset.categories.clone(),
        variables: dataset.variables.clone(),
    }
}

/// Return indices of records that pass both facet filters.
///
/// A record passes a facet when:
/// * Every unique value of the facet is selected → passes (no constraint)
/// * The selection is empty → nothing selected → fails
/// * The record's value for that facet is in the selected set → passes
pub fn filtered_indices(dataset: &Dataset, filters: &FilterState) -> Vec<usize> {
    let category_unconstrained = filters.categories.len() == dataset.categories.len();
    let variable_unconstrained = filters.variables.len() == dataset.variables.len();

    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            (category_unconstrained || filters.categories.contains(&rec.category))
                && (variable_unconstrained || filters.variables.contains(&rec.variable))
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn dataset() -> Dataset {
        let row = |category: &str, variable: &str| Record {
            unit: "USD".to_string(),
            category: category.to_string(),
            variable: variable.to_string(),
            subvariable: String::new(),
            date: "2024-01-01".to_string(),
            value: 1.0,
        };
        Dataset::from_records(vec![
            row("Reservas", "RIN"),
            row("Reservas", "Oro"),
            row("Depósitos", "Cajas"),
        ])
    }

    #[test]
    fn full_selection_passes_everything() {
        let ds = dataset();
        let filters = init_filter_state(&ds);
        assert_eq!(filtered_indices(&ds, &filters), vec![0, 1, 2]);
    }

    #[test]
    fn empty_selection_hides_everything() {
        let ds = dataset();
        let mut filters = init_filter_state(&ds);
        filters.categories.clear();
        assert!(filtered_indices(&ds, &filters).is_empty());
    }

    #[test]
    fn partial_selection_filters_by_membership() {
        let ds = dataset();
        let mut filters = init_filter_state(&ds);
        filters.selected_mut(Facet::Category).remove("Depósitos");
        assert_eq!(filtered_indices(&ds, &filters), vec![0, 1]);

        filters.selected_mut(Facet::Variable).remove("Oro");
        assert_eq!(filtered_indices(&ds, &filters), vec![0]);
    }
}
