//! Record identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Stable, non-empty identifier of a server-side record.
///
/// Deserialization rejects empty strings so a record without a usable id
/// never reaches the table.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordId(String);

impl RecordId {
    /// Creates an identifier, rejecting empty or whitespace-only input and
    /// the relative path segments `.` and `..`.
    pub fn new(id: impl Into<String>) -> Result<Self, ModelError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ModelError::EmptyId);
        }
        if matches!(id.as_str(), "." | "..") {
            return Err(ModelError::DotSegmentId(id));
        }
        Ok(Self(id))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RecordId {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_ids() {
        assert_eq!(RecordId::new(""), Err(ModelError::EmptyId));
        assert_eq!(RecordId::new("   "), Err(ModelError::EmptyId));
        assert_eq!(RecordId::new("abc").unwrap().as_str(), "abc");
    }

    #[test]
    fn rejects_dot_segments() {
        assert_eq!(
            RecordId::new(".."),
            Err(ModelError::DotSegmentId("..".to_string()))
        );
        assert!(RecordId::new(".").is_err());
        assert_eq!(RecordId::new("..x").unwrap().as_str(), "..x");
    }

    #[test]
    fn deserialization_rejects_empty_string() {
        let parsed: Result<RecordId, _> = serde_json::from_str("\"\"");
        assert!(parsed.is_err());
        let parsed: RecordId = serde_json::from_str("\"c-1\"").unwrap();
        assert_eq!(parsed.to_string(), "c-1");
    }
}
