mod app;
mod color;
mod data;
mod state;
mod theme;
mod ui;

use app::BcbDashApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // One retrieval per launch; the window opens with whatever it produced
    // and the dashboard stays empty if the load failed.
    let initial = data::loader::fetch();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "BCB Dash – Weekly Indicators",
        options,
        Box::new(move |cc| Ok(Box::new(BcbDashApp::new(cc, initial)))),
    )
}
