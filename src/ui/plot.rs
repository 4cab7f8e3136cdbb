use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Time-series plot (central panel)
// ---------------------------------------------------------------------------

/// Render the visible records as one line per series.
pub fn series_plot(ui: &mut Ui, state: &AppState) {
    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("No data loaded  (File → Reload remote data)");
            });
            return;
        }
    };

    // Group visible records into series points, x = day ordinal of `fecha`.
    // Unparseable dates and non-finite values are skipped here only; the
    // records themselves stay untouched.
    let mut series: BTreeMap<String, Vec<[f64; 2]>> = BTreeMap::new();
    for &idx in &state.visible_indices {
        let rec = &dataset.records[idx];
        let Some(day) = parse_day(&rec.date) else {
            continue;
        };
        if !rec.value.is_finite() {
            continue;
        }
        series.entry(rec.series_label()).or_default().push([day, rec.value]);
    }

    Plot::new("series_plot")
        .legend(Legend::default())
        .x_axis_label("Fecha")
        .y_axis_label("Valor")
        .x_axis_formatter(|mark, _range| format_day(mark.value))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (label, mut points) in series {
                points.sort_by(|a, b| a[0].total_cmp(&b[0]));

                let color = state
                    .series_colors
                    .as_ref()
                    .map(|sc| sc.color_for(&label))
                    .unwrap_or(Color32::LIGHT_BLUE);

                let line = Line::new(PlotPoints::from(points))
                    .name(&label)
                    .color(color)
                    .width(1.5);

                plot_ui.line(line);
            }
        });
}

// ---------------------------------------------------------------------------
// Date axis helpers
// ---------------------------------------------------------------------------

/// `2024-01-01` → day ordinal usable as a plot coordinate.
pub fn parse_day(date: &str) -> Option<f64> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .map(|d| f64::from(d.num_days_from_ce()))
}

/// Day ordinal → axis tick label.
pub fn format_day(day: f64) -> String {
    NaiveDate::from_num_days_from_ce_opt(day as i32)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_ordinal_round_trips_through_the_axis_formatter() {
        let day = parse_day("2024-01-01").unwrap();
        assert_eq!(format_day(day), "2024-01-01");
    }

    #[test]
    fn consecutive_weeks_are_seven_days_apart() {
        let a = parse_day("2024-01-01").unwrap();
        let b = parse_day("2024-01-08").unwrap();
        assert_eq!(b - a, 7.0);
    }

    #[test]
    fn malformed_dates_are_skipped() {
        assert!(parse_day("01/2024").is_none());
        assert!(parse_day("").is_none());
    }
}
