//! Alumni Portal - Desktop GUI Application
//!
//! A desktop client for the alumni association portal: directory, jobs,
//! events, donation campaigns and a personal profile dashboard, all served
//! by the portal's REST backend.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message, Update, View).

use alumni_client::{DEFAULT_BASE_URL, PortalClient};
use alumni_gui::app::App;
use alumni_gui::error::{GuiError, log_error};
use alumni_gui::state::Settings;
use iced::Size;
use iced::window;
use tracing_subscriber::EnvFilter;

/// Application entry point.
///
/// Loads settings, builds the backend client and runs the Iced application
/// with the portal theme.
pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    tracing::info!("Starting Alumni Portal");

    let settings = Settings::load();
    let client = match PortalClient::new(settings.backend.api_base_url.as_str()) {
        Ok(client) => client,
        Err(e) => {
            log_error(&GuiError::Backend {
                url: settings.backend.api_base_url.clone(),
                reason: e.to_string(),
            });
            PortalClient::new(DEFAULT_BASE_URL)?
        }
    };
    tracing::info!(backend = client.base_url(), "Using backend");

    let window_size = Size::new(settings.window.width, settings.window.height);

    // Run the Iced application using the builder pattern
    iced::application(
        move || App::new(settings.clone(), client.clone()),
        App::update,
        App::view,
    )
    .title(App::title)
    .theme(App::theme)
    .window(window::Settings {
        size: window_size,
        min_size: Some(Size::new(960.0, 600.0)),
        ..Default::default()
    })
    .run()?;

    Ok(())
}
