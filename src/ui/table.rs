use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Record table (central panel, alternative to the plot)
// ---------------------------------------------------------------------------

/// Render the visible records as a table, in source row order.
pub fn records_table(ui: &mut Ui, state: &AppState) {
    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("No data loaded  (File → Reload remote data)");
            });
            return;
        }
    };

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(140.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in ["Fecha", "Categoría", "Variable", "Subvariable", "Valor", "Unidad"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, state.visible_indices.len(), |mut row| {
                let rec = &dataset.records[state.visible_indices[row.index()]];
                row.col(|ui| {
                    ui.label(&rec.date);
                });
                row.col(|ui| {
                    ui.label(&rec.category);
                });
                row.col(|ui| {
                    ui.label(&rec.variable);
                });
                row.col(|ui| {
                    ui.label(&rec.subvariable);
                });
                row.col(|ui| {
                    ui.label(format_value(rec.value));
                });
                row.col(|ui| {
                    ui.label(&rec.unit);
                });
            });
        });
}

/// `NaN` cells (malformed source values) render as a dash.
fn format_value(value: f64) -> String {
    if value.is_nan() {
        "–".to_string()
    } else {
        format!("{value:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_renders_as_a_dash() {
        assert_eq!(format_value(f64::NAN), "–");
        assert_eq!(format_value(100.5), "100.50");
    }
}
