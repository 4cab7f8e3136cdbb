use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer};

// ---------------------------------------------------------------------------
// Record – one observation row of the published data set
// ---------------------------------------------------------------------------

/// A single weekly observation (one row of the source CSV).
///
/// Fields map onto the Spanish header names of the published file; the
/// mapping is by header *name*, so column order in the source is free.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    /// Measurement unit label (`unidad`), e.g. `USD`.
    #[serde(rename = "unidad")]
    pub unit: String,
    /// Grouping label (`categoria`), e.g. `Reservas`.
    #[serde(rename = "categoria")]
    pub category: String,
    /// Name of the measured series (`variable`).
    pub variable: String,
    /// Optional qualifier of `variable` (`subvariable`), empty when absent.
    pub subvariable: String,
    /// Observation date (`fecha`), ISO-8601 text kept as-is.
    /// Parsed into a calendar date only at the plotting edge.
    #[serde(rename = "fecha")]
    pub date: String,
    /// Numeric magnitude (`valor`). The source cell is text; anything that
    /// does not parse as a number becomes `NaN` rather than a row error.
    #[serde(rename = "valor", deserialize_with = "lenient_f64")]
    pub value: f64,
}

/// Coerce a textual `valor` cell into `f64`, yielding `NaN` for invalid or
/// missing input. Rows with a malformed value are kept, not dropped.
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().parse::<f64>().unwrap_or(f64::NAN))
}

impl Record {
    /// Display key for plotting: `variable`, qualified by `subvariable`
    /// when one is present.
    pub fn series_label(&self) -> String {
        if self.subvariable.is_empty() {
            self.variable.clone()
        } else {
            format!("{} · {}", self.variable, self.subvariable)
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete parsed data set
// ---------------------------------------------------------------------------

/// The full parsed data set with pre-computed value indices.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// All observations, in source row order.
    pub records: Vec<Record>,
    /// Sorted unique category labels.
    pub categories: BTreeSet<String>,
    /// Sorted unique variable labels.
    pub variables: BTreeSet<String>,
}

impl Dataset {
    /// Build value indices from the parsed records.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut categories = BTreeSet::new();
        let mut variables = BTreeSet::new();

        for rec in &records {
            categories.insert(rec.category.clone());
            variables.insert(rec.variable.clone());
        }

        Dataset {
            records,
            categories,
            variables,
        }
    }

    /// Sorted unique series labels across all records.
    pub fn series_labels(&self) -> BTreeSet<String> {
        self.records.iter().map(Record::series_label).collect()
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the data set is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: &str, variable: &str, subvariable: &str) -> Record {
        Record {
            unit: "USD".to_string(),
            category: category.to_string(),
            variable: variable.to_string(),
            subvariable: subvariable.to_string(),
            date: "2024-01-01".to_string(),
            value: 1.0,
        }
    }

    #[test]
    fn series_label_without_subvariable_is_the_variable() {
        assert_eq!(record("Reservas", "RIN", "").series_label(), "RIN");
    }

    #[test]
    fn series_label_with_subvariable_is_qualified() {
        assert_eq!(record("Reservas", "RIN", "Oro").series_label(), "RIN · Oro");
    }

    #[test]
    fn from_records_indexes_unique_values() {
        let ds = Dataset::from_records(vec![
            record("Reservas", "RIN", ""),
            record("Reservas", "RIN", "Oro"),
            record("Depósitos", "Cajas", ""),
        ]);

        assert_eq!(ds.len(), 3);
        assert!(!ds.is_empty());
        assert_eq!(
            ds.categories.iter().collect::<Vec<_>>(),
            ["Depósitos", "Reservas"]
        );
        assert_eq!(ds.variables.iter().collect::<Vec<_>>(), ["Cajas", "RIN"]);
        assert_eq!(
            ds.series_labels().iter().collect::<Vec<_>>(),
            ["Cajas", "RIN", "RIN · Oro"]
        );
    }

    #[test]
    fn empty_dataset() {
        let ds = Dataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert!(ds.categories.is_empty());
        assert!(ds.variables.is_empty());
    }
}
