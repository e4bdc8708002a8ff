#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use tree_decorator::gui::{theme, DecoratorApp, WINDOW_TITLE};
use tree_decorator::logging;
use tree_decorator::settings::{Settings, SETTINGS_FILE};

use eframe::egui;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load(SETTINGS_FILE)?;
    logging::init(settings.debug_logging, settings.log_file.clone())?;
    tracing::info!(
        decorations = settings.decorations.len(),
        jitter = settings.placement_jitter,
        tolerance = settings.delete_tolerance,
        "starting tree decorator"
    );

    let (width, height) = settings.window_size;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(move |cc| {
            theme::apply_visuals(&cc.egui_ctx);
            Box::new(DecoratorApp::new(&settings))
        }),
    )
    .map_err(|e| anyhow::anyhow!("failed to run the decorator window: {e}"))
}
