#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

fn main() -> eframe::Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let api_key = std::env::var("WEATHERAPI_KEY").unwrap_or_default();
    if api_key.is_empty() {
        log::warn!("WEATHERAPI_KEY is not set, forecast searches will fail");
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Forecast Flow",
        native_options,
        Box::new(|cc| Box::new(forecast_flow::ForecastApp::new(cc, api_key))),
    )
}
