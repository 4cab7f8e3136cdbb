use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.5);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Series colours: label → Color32
// ---------------------------------------------------------------------------

/// Stable mapping from series label to plot colour, built once per loaded
/// dataset so a series keeps its colour while filters change.
#[derive(Debug, Clone)]
pub struct SeriesColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl SeriesColors {
    /// Assign a palette colour to every series label.
    pub fn new(labels: &BTreeSet<String>) -> Self {
        let palette = generate_palette(labels.len());
        let mapping = labels
            .iter()
            .cloned()
            .zip(palette.into_iter())
            .collect();

        SeriesColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a series label.
    pub fn color_for(&self, label: &str) -> Color32 {
        self.mapping
            .get(label)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size_and_distinct_entries() {
        assert!(generate_palette(0).is_empty());

        let colors = generate_palette(8);
        assert_eq!(colors.len(), 8);
        let unique: std::collections::BTreeSet<_> =
            colors.iter().map(|c| c.to_array()).collect();
        assert_eq!(unique.len(), 8);
    }

    #[test]
    fn unknown_label_falls_back_to_default() {
        let labels: BTreeSet<String> = ["RIN".to_string()].into_iter().collect();
        let colors = SeriesColors::new(&labels);
        assert_ne!(colors.color_for("RIN"), Color32::GRAY);
        assert_eq!(colors.color_for("nope"), Color32::GRAY);
    }
}
