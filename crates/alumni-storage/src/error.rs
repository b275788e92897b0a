//! Storage error types.
//!
//! All storage operations return structured errors that provide
//! user-friendly messages and optional remediation hints.

use std::path::PathBuf;
use thiserror::Error;

/// Local storage operation error.
#[derive(Debug, Error)]
pub enum StorageError {
    /// File I/O error.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store file exists but is not valid TOML.
    #[error("Storage file is corrupted: {path}")]
    Corrupted {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Serialization error.
    #[error("Failed to serialize storage data")]
    Serialization {
        #[source]
        source: toml::ser::Error,
    },

    /// Atomic write failed (temp file couldn't be renamed).
    #[error("Failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No platform data directory could be determined.
    #[error("No data directory available on this platform")]
    NoDataDir,
}

impl StorageError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => {
                format!("Could not {} the file at {}", operation, path.display())
            }
            Self::Corrupted { path, .. } => {
                format!(
                    "Saved preferences at {} could not be read and were reset.",
                    path.display()
                )
            }
            Self::Serialization { .. } => {
                "An error occurred while saving your preferences.".to_string()
            }
            Self::AtomicWriteFailed { target_path, .. } => {
                format!(
                    "Could not save the file to {}. Please check disk space and permissions.",
                    target_path.display()
                )
            }
            Self::NoDataDir => "No location is available to store preferences.".to_string(),
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io { operation, .. } => {
                if *operation == "read" {
                    Some("Check that the file exists and you have permission to read it.".into())
                } else {
                    Some("Check that you have permission to write to this location.".into())
                }
            }
            Self::Corrupted { .. } => Some("Delete the file to start with a clean session.".into()),
            Self::Serialization { .. } | Self::NoDataDir => None,
            Self::AtomicWriteFailed { .. } => {
                Some("Free up disk space or check the data directory permissions.".into())
            }
        }
    }
}

/// Result type alias for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
