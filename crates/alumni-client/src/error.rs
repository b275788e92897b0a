//! Error types for backend calls.

use thiserror::Error;

/// Errors returned by [`PortalClient`](crate::PortalClient).
///
/// The portal only distinguishes two failure families: the server answered
/// with a non-success status (optionally carrying a `message`), or the
/// request never produced a usable answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Connection refused, DNS failure, timeout, or similar.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("server error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Server {
        /// HTTP status code.
        status: u16,
        /// The `message` field of the JSON error body, when there was one.
        message: Option<String>,
    },

    /// A success response whose body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// The configured base URL plus endpoint path is not a valid URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Message reported by the server, if it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Server {
                message: Some(m), ..
            } if !m.is_empty() => Some(m.as_str()),
            _ => None,
        }
    }

    /// Text for a blocking alert: the server's message when available,
    /// otherwise the caller's generic `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }

    /// Whether the server was reached and rejected the request.
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Server { .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Result type alias for backend calls.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::Server {
            status: 401,
            message: Some("Invalid credentials".to_string()),
        };
        assert_eq!(err.user_message("Connection error."), "Invalid credentials");
        assert!(err.is_server_error());
    }

    #[test]
    fn test_user_message_fallbacks() {
        let err = ApiError::Server {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message("Try again"), "Try again");

        let err = ApiError::Server {
            status: 400,
            message: Some(String::new()),
        };
        assert_eq!(err.server_message(), None);

        let err = ApiError::Network("refused".to_string());
        assert_eq!(err.user_message("Try again"), "Try again");
        assert!(!err.is_server_error());
    }

    #[test]
    fn test_display() {
        let err = ApiError::Server {
            status: 404,
            message: None,
        };
        assert_eq!(err.to_string(), "server error (404): no message");
    }
}
