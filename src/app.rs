use std::path::Path;

use eframe::egui;

use crate::state::{AppState, DEFAULT_DATA_PATH};
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ResaleTrendsApp {
    pub state: AppState,
}

impl ResaleTrendsApp {
    /// Create the app, picking up the default dataset when it exists.
    pub fn new() -> Self {
        let mut state = AppState::default();
        let path = Path::new(DEFAULT_DATA_PATH);
        if path.exists() {
            panels::load_data_file(&mut state, path);
        }
        Self { state }
    }
}

impl eframe::App for ResaleTrendsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Bottom panel: aggregate table (hidden while empty) ----
        egui::TopBottomPanel::bottom("trend_table")
            .resizable(true)
            .default_height(150.0)
            .show_animated(ctx, !self.state.points.is_empty(), |ui| {
                panels::trend_table(ui, &self.state);
            });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::trend_plot(ui, &mut self.state);
        });
    }
}
