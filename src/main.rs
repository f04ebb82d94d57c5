mod core;
mod gui;

use crate::core::config::ViewerConfig;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(error) = gui::run(ViewerConfig::default()) {
        log::error!("Log Viewer failed to start: {error}");
        std::process::exit(1);
    }
}
