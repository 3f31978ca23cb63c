use eframe::egui;

use crate::config::BrowserConfig;
use crate::state::AppState;
use crate::ui::{panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct BizSelectApp {
    pub state: AppState,
}

impl BizSelectApp {
    /// Create the app and load the startup dataset if present.
    pub fn new(config: BrowserConfig) -> Self {
        let mut state = AppState::new(config);
        state.load_startup_dataset();
        Self { state }
    }
}

impl Default for BizSelectApp {
    fn default() -> Self {
        Self::new(BrowserConfig::default())
    }
}

impl eframe::App for BizSelectApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(280.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            table::company_table(ui, &mut self.state);
        });
    }
}
