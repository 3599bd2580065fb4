mod app;
mod config;
mod convert;
mod error;
mod utils;

use app::PhoneExporter;
use config::ExportConfig;
use eframe::CreationContext;
use env_logger::Env;
use log::error;

fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = std::env::current_dir()
        .map(|dir| ExportConfig::load_or_default(&dir))
        .unwrap_or_default();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([520.0, 360.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "JSON to Excel Converter",
        options,
        Box::new(move |cc: &CreationContext| Box::new(PhoneExporter::new(cc, config))),
    ) {
        error!("Window closed with error: {}", e);
    }
}
