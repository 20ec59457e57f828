//! Native egui visualization command.
//!
//! Launches a desktop window with the particle background and the about shape.

use anyhow::Result;
use eframe::{run_native, NativeOptions};
use portfolio_viz::{PortfolioApp, VizSettings};

/// Execute the viz command.
pub fn execute(settings: VizSettings) -> Result<()> {
    println!("🖼️  Launching native visualization...");
    println!("   Drag the shape to rotate it, Tab toggles settings");
    println!();

    let options = NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("Portfolio visuals"),
        ..Default::default()
    };

    run_native(
        "portfolio",
        options,
        Box::new(|cc| Ok(Box::new(PortfolioApp::new(cc, settings)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run visualization: {e}"))
}
