use std::path::PathBuf;

use eframe::egui;

use crate::data::loader::spawn_load;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct HomecViewerApp {
    pub state: AppState,
    /// CSV the dataset is read from.
    pub source: PathBuf,
}

impl HomecViewerApp {
    /// Start the app and kick off the one background load of `source`.
    pub fn new(source: PathBuf) -> Self {
        log::info!("Loading {}", source.display());
        let rx = spawn_load(source.clone());
        Self {
            state: AppState::loading(rx),
            source,
        }
    }
}

impl eframe::App for HomecViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll_load();
        if self.state.is_loading() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        // ---- Top panel: menu + status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state, &self.source);
        });

        // ---- Left side panel: selectors + statistics ----
        egui::SidePanel::left("control_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both()
                .auto_shrink([false, false])
                .show(ui, |ui| plot::chart_panel(ui, &mut self.state));
        });
    }
}
