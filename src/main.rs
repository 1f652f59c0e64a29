//! Categraph - CSV Category Counter & Trend Chart Viewer
//!
//! A Rust application for charting category counts and metric trends
//! from user-selected CSV files.

mod charts;
mod data;
mod gui;

use eframe::egui;
use gui::CategraphApp;

fn main() -> eframe::Result<()> {
    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([1000.0, 650.0])
            .with_title("Categraph"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Categraph",
        options,
        Box::new(|cc| Ok(Box::new(CategraphApp::new(cc)))),
    )
}
