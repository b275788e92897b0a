//! GUI-specific error types.
//!
//! These cover the local side of the application: settings and the
//! key/value store. Backend failures are [`alumni_client::ApiError`] and are
//! turned into alert text by the handlers. Local failures are logged and
//! never block the UI.

use thiserror::Error;

/// GUI-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GuiError {
    // =========================================================================
    // SETTINGS
    // =========================================================================
    /// Failed to load settings.
    #[error("Failed to load settings: {reason}")]
    SettingsLoad {
        /// Description of what went wrong.
        reason: String,
    },

    /// Failed to save settings.
    #[error("Failed to save settings: {reason}")]
    SettingsSave {
        /// Description of what went wrong.
        reason: String,
    },

    // =========================================================================
    // LOCAL STORAGE
    // =========================================================================
    /// Reading or writing the session store failed.
    #[error("Local storage error: {reason}")]
    Storage {
        /// Description of what went wrong.
        reason: String,
    },

    // =========================================================================
    // BACKEND
    // =========================================================================
    /// The configured backend address could not be used.
    #[error("Invalid backend address {url}: {reason}")]
    Backend {
        /// The configured base URL.
        url: String,
        /// Description of what went wrong.
        reason: String,
    },

    /// Opening a link in another application failed.
    #[error("Failed to open {target}: {reason}")]
    OpenLink {
        /// The link that could not be opened.
        target: String,
        /// Description of what went wrong.
        reason: String,
    },
}

impl GuiError {
    /// Get a user-friendly suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::SettingsLoad { .. } => {
                Some("Settings will be reset to defaults if the file is corrupted.")
            }
            Self::SettingsSave { .. } => {
                Some("Check file permissions for the application config directory.")
            }
            Self::Storage { .. } => {
                Some("Check file permissions for the application data directory.")
            }
            Self::Backend { .. } => {
                Some("Set api_base_url in settings.toml or ALUMNI_API_URL to a full http(s) URL.")
            }
            Self::OpenLink { .. } => Some("Make sure a default mail client is configured."),
        }
    }
}

impl From<alumni_storage::StorageError> for GuiError {
    fn from(err: alumni_storage::StorageError) -> Self {
        Self::Storage {
            reason: err.user_message(),
        }
    }
}

/// Log a local failure together with its suggestion.
pub fn log_error(err: &GuiError) {
    match err.suggestion() {
        Some(hint) => tracing::warn!("{err} ({hint})"),
        None => tracing::warn!("{err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variant_has_a_suggestion() {
        let errors = [
            GuiError::SettingsLoad {
                reason: "bad toml".into(),
            },
            GuiError::SettingsSave {
                reason: "read-only".into(),
            },
            GuiError::Storage {
                reason: "disk full".into(),
            },
            GuiError::Backend {
                url: "nope".into(),
                reason: "relative URL without a base".into(),
            },
            GuiError::OpenLink {
                target: "mailto:a@b.c".into(),
                reason: "no handler".into(),
            },
        ];
        for err in errors {
            assert!(err.suggestion().is_some(), "{err}");
        }
    }

    #[test]
    fn test_display() {
        let err = GuiError::SettingsSave {
            reason: "read-only".into(),
        };
        assert_eq!(err.to_string(), "Failed to save settings: read-only");
    }
}
