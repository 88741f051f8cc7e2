//! Customer Analytics - regional transaction dashboard

use customer_analytics::config::DashboardConfig;
use customer_analytics::data::DataLoader;
use customer_analytics::gui::DashboardApp;
use customer_analytics::telemetry;
use eframe::egui;
use tracing::error;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init_tracing();

    let config = DashboardConfig::default();

    // A missing file yields an empty dataset; malformed contents abort startup.
    let dataset = DataLoader::load(&config.data_path).map_err(|e| {
        error!(path = %config.data_path.display(), error = %e, "Failed to load data");
        e
    })?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size)
            .with_title(&config.window_title),
        ..Default::default()
    };

    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(cc, config, dataset)))),
    )?;

    Ok(())
}
