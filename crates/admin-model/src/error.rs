//! Error types for model validation.

use thiserror::Error;

/// Errors raised when constructing model values from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ModelError {
    /// Record identifiers must not be empty.
    #[error("record id must not be empty")]
    EmptyId,

    /// `.` and `..` cannot be addressed as a path segment.
    #[error("record id cannot be '{0}'")]
    DotSegmentId(String),

    /// Pages are 1-based.
    #[error("page must be at least 1 (got {0})")]
    InvalidPage(u32),

    /// A page must hold at least one row.
    #[error("page size must be at least 1 (got {0})")]
    InvalidPageSize(u32),

    /// Sort order token was neither `ASC` nor `DESC`.
    #[error("unknown sort order: {0}")]
    UnknownSortOrder(String),

    /// Resource name did not match a known collection.
    #[error("unknown resource: {0}")]
    UnknownResource(String),
}

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
