//! Start-up path used by the `alumni-portal` binary.

use alumni_client::{DEFAULT_BASE_URL, PortalClient};
use alumni_gui::error::{GuiError, log_error};
use alumni_gui::state::Settings;

#[test]
fn invalid_backend_url_is_logged_and_replaced() {
    let mut settings = Settings::default();
    settings.backend.api_base_url = "not a url".to_string();

    let client = match PortalClient::new(settings.backend.api_base_url.as_str()) {
        Ok(client) => client,
        Err(e) => {
            let err = GuiError::Backend {
                url: settings.backend.api_base_url.clone(),
                reason: e.to_string(),
            };
            assert!(err.suggestion().is_some());
            log_error(&err);
            PortalClient::new(DEFAULT_BASE_URL).unwrap()
        }
    };

    assert_eq!(client.base_url(), DEFAULT_BASE_URL);
}

#[test]
fn default_settings_point_at_a_usable_backend() {
    let settings = Settings::default();
    let client = PortalClient::new(settings.backend.api_base_url.as_str()).unwrap();
    assert!(client.base_url().starts_with("http"));
}
