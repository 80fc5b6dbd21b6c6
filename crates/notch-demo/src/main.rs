//! Notch demo - a single labeled slider in a window
//!
//! ## Command line flags
//!
//! - `--config <path>`: Load the slider configuration from `<path>` instead of
//!   `~/.config/notch-demo/config.yaml`
//! - `--write-config`: Write the effective configuration back to that path

mod app;
mod config;

use iced::{Size, Task};

use app::{DemoApp, Message};
use config::DemoConfig;

fn main() -> iced::Result {
    let args: Vec<String> = std::env::args().collect();
    let write_config = args.iter().any(|arg| arg == "--write-config");

    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("notch-demo starting up");

    let config_path = config::config_path_from_args(&args);
    let config: DemoConfig = notch_core::config::load_config(&config_path);

    if write_config {
        match notch_core::config::save_config(&config, &config_path) {
            Ok(()) => log::info!("Wrote configuration to {:?}", config_path),
            Err(e) => log::warn!("Could not write configuration: {:#}", e),
        }
    }

    // An invalid range or size in the config is a programming error for the host
    let slider_view = match config.slider.build() {
        Ok(view) => view,
        Err(e) => {
            log::error!("Invalid slider configuration in {:?}: {}", config_path, e);
            std::process::exit(1);
        }
    };

    let padding = config.padding;
    iced::application(
        move || (DemoApp::new(slider_view.clone(), padding), Task::none()),
        update,
        view,
    )
    .title("Notch Slider")
    .window_size(Size::new(config.window_width, config.window_height))
    .run()
}

/// Update function for iced
fn update(app: &mut DemoApp, message: Message) -> Task<Message> {
    app.update(message)
}

/// View function for iced
fn view(app: &DemoApp) -> iced::Element<'_, Message> {
    app.view()
}
