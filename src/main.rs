mod app;
mod color;
mod controls;
mod data;
mod state;
mod ui;
mod views;

use app::PenguinDashApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // The dataset is bundled; failing to parse it is fatal.
    let dataset = match data::loader::load_embedded() {
        Ok(ds) => ds,
        Err(e) => {
            log::error!("Failed to load bundled dataset: {e:#}");
            std::process::exit(1);
        }
    };
    log::info!("Loaded {} penguin observations", dataset.len());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([800.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Penguin Dash – Palmer Penguins",
        options,
        Box::new(move |_cc| Ok(Box::new(PenguinDashApp::new(dataset)))),
    )
}
