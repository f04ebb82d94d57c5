mod app;
mod dialogs;
mod editor;
mod themes;

pub use app::LogViewerApp;

use crate::core::{config::ViewerConfig, session::APP_TITLE};

/// Entry point for the desktop window
pub fn run(config: ViewerConfig) -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| {
            themes::apply_theme(&cc.egui_ctx, config.editor_font_size);
            Ok(Box::new(LogViewerApp::new(cc, config)))
        }),
    )
}
