//! Backend record identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a backend record.
///
/// The backend is free to send numeric ids (`42`) or document ids
/// (`"65a1f0c2e4b0..."`). Both are kept as received and rendered back
/// verbatim into URL paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl RecordId {
    /// Id used for anonymous donors and attendees when no user is known.
    pub const ANONYMOUS: RecordId = RecordId::Int(1);
}

impl Default for RecordId {
    fn default() -> Self {
        Self::Int(0)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_numbers_and_strings() {
        let n: RecordId = serde_json::from_str("7").unwrap();
        let s: RecordId = serde_json::from_str("\"65a1f0\"").unwrap();
        assert_eq!(n, RecordId::Int(7));
        assert_eq!(s, RecordId::Text("65a1f0".into()));
    }

    #[test]
    fn test_display_is_path_safe_value() {
        assert_eq!(RecordId::Int(12).to_string(), "12");
        assert_eq!(RecordId::from("abc").to_string(), "abc");
    }
}
