use eframe::egui;

use crate::data::model::PenguinDataset;
use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PenguinDashApp {
    pub state: AppState,
}

impl PenguinDashApp {
    pub fn new(dataset: PenguinDataset) -> Self {
        Self {
            state: AppState::new(dataset),
        }
    }
}

impl eframe::App for PenguinDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: counts and reset ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: the five controls ----
        egui::SidePanel::left("control_panel")
            .default_width(230.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // Recompute the views whose parameters changed this frame.
        self.state.refresh_views();

        // ---- Central panel: the five displays ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.columns(2, |cols| {
                        plot::stacked_histogram(&mut cols[0], &self.state);
                        plot::layered_histogram(&mut cols[1], &self.state);
                    });
                    ui.separator();
                    plot::scatter(ui, &self.state);
                    ui.separator();
                    table::data_grid(ui, &self.state);
                    ui.separator();
                    table::data_table(ui, &self.state);
                });
        });
    }
}
