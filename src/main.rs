use eframe::egui;
use jobai_dashboard::charts::DashboardData;
use jobai_dashboard::config::AppConfig;
use jobai_dashboard::ui::DashboardApp;

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    // An explicit snapshot path on the command line overrides the configured one
    let data_path = std::env::args()
        .nth(1)
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|| config.data_path.clone());

    let data = match DashboardData::load(&data_path) {
        Ok(data) => data,
        Err(e) => {
            // Charts are optional on this page; the chat assistant still runs
            tracing::info!("No dashboard snapshot at {:?}: {}", data_path, e);
            DashboardData::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_size.0, config.window_size.1])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "JobAI Demand Dashboard",
        options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(cc, config, data)))),
    )
}
