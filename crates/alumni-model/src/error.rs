//! Form validation errors.

use thiserror::Error;

/// Reason a form cannot be submitted.
///
/// Validation stops at the first problem, in field order, so the UI can point
/// at a single field the way a browser highlights the first invalid input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormError {
    /// A required field is empty.
    #[error("{field} is required")]
    Missing {
        /// Human-readable field label.
        field: &'static str,
    },

    /// A field has a value that cannot be accepted.
    #[error("{field} {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },

    /// The new password and its confirmation differ.
    #[error("New passwords do not match.")]
    PasswordMismatch,
}

impl FormError {
    /// Label of the offending field, if the error is tied to one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Missing { field } | Self::Invalid { field, .. } => Some(field),
            Self::PasswordMismatch => Some("Confirm New Password"),
        }
    }
}

pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            FormError::Missing { field: "Email" }.to_string(),
            "Email is required"
        );
        assert_eq!(
            FormError::PasswordMismatch.to_string(),
            "New passwords do not match."
        );
    }
}
