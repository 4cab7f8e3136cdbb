use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::filter::Facet;
use crate::data::loader;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.label("No data loaded.");
            return;
        }
    };

    // Clone the value sets so we can mutate state inside the loop.
    let facets = [
        (Facet::Category, dataset.categories.clone()),
        (Facet::Variable, dataset.variables.clone()),
    ];

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (facet, all_values) in &facets {
                let selected = state.filters.selected(*facet);

                // Show count of selected / total in the header
                let header_text =
                    format!("{}  ({}/{})", facet.label(), selected.len(), all_values.len());

                egui::CollapsingHeader::new(RichText::new(header_text).strong())
                    .id_salt(facet.label())
                    .default_open(*facet == Facet::Category)
                    .show(ui, |ui: &mut Ui| {
                        ui.horizontal(|ui: &mut Ui| {
                            if ui.small_button("All").clicked() {
                                state.select_all(*facet);
                            }
                            if ui.small_button("None").clicked() {
                                state.select_none(*facet);
                            }
                        });

                        for value in all_values {
                            let mut checked = state.filters.selected(*facet).contains(value);
                            if ui.checkbox(&mut checked, value.as_str()).changed() {
                                state.toggle_filter_value(*facet, value);
                            }
                        }
                    });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open snapshot…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload remote data").clicked() {
                reload_remote(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} observations, {} visible",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        ui.separator();

        if ui
            .selectable_label(state.show_table, "Table")
            .clicked()
        {
            state.show_table = !state.show_table;
        }

        if ui.button(state.theme.mode().toggle_label()).clicked() {
            state.theme.toggle();
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Load actions
// ---------------------------------------------------------------------------

/// Re-fetch the published CSV. Each reload is an independent retrieval.
pub fn reload_remote(state: &mut AppState) {
    state.loading = true;
    state.apply_fetch(loader::fetch());
}

/// Open a local CSV snapshot through the same parse path as the remote file.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open data snapshot")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.loading = true;
        state.apply_fetch(loader::load_path(&path));
    }
}
