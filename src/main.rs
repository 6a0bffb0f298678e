mod app;
mod chart;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::HomecViewerApp;
use clap::Parser;
use eframe::egui;

/// Plot household energy and weather series from a HomeC-style CSV.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// CSV file to load at startup
    #[arg(long, default_value = "HomeC.csv")]
    data: PathBuf,
}

fn main() -> eframe::Result {
    env_logger::init();

    let args = Args::parse();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1240.0, 640.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "HomeC Viewer",
        options,
        Box::new(move |_cc| Ok(Box::new(HomecViewerApp::new(args.data)))),
    )
}
