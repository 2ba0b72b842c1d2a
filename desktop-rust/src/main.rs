mod app;
mod io;
mod model;

use app::{configure_fonts, DesktopApp};
use menu_genius::config::Config;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    if let Err(err) = menu_genius_common::catalog().validate() {
        tracing::error!("translation table incomplete: {err}");
    }
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("config load failed, using defaults: {err}");
            Config::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("MenuGenius")
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "MenuGenius",
        options,
        Box::new(move |cc| {
            configure_fonts(&cc.egui_ctx);
            Box::new(DesktopApp::new(config))
        }),
    )
}
