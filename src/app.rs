use eframe::egui;

use crate::data::loader::LoadError;
use crate::data::model::Dataset;
use crate::state::AppState;
use crate::theme;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct BcbDashApp {
    pub state: AppState,
}

impl BcbDashApp {
    /// Build the app from the startup fetch result.
    ///
    /// This is where theme setup completes: the egui visuals applier is
    /// subscribed as an observer, so every later toggle restyles the UI,
    /// and the initial mode is applied once.
    pub fn new(cc: &eframe::CreationContext<'_>, initial: Result<Dataset, LoadError>) -> Self {
        let mut state = AppState::default();

        let ctx = cc.egui_ctx.clone();
        state.theme.subscribe(move |mode| theme::apply_visuals(&ctx, mode));
        theme::apply_visuals(&cc.egui_ctx, state.theme.mode());

        state.apply_fetch(initial);
        Self { state }
    }
}

impl eframe::App for BcbDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: plot or record table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.show_table {
                table::records_table(ui, &self.state);
            } else {
                plot::series_plot(ui, &self.state);
            }
        });
    }
}
