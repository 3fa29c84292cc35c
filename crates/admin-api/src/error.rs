//! Error types for the admin API client.

use thiserror::Error;

/// Errors surfaced by [`ResourceClient`](crate::ResourceClient) calls.
///
/// The type is `Clone` so one failed fetch can be handed to every caller that
/// was waiting on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The request never completed (DNS, connect, TLS, reset).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("server error ({status}): {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Reason taken from the response body or the status line.
        message: String,
    },

    /// The response body matched none of the known envelope shapes.
    #[error("unexpected response shape: {0}")]
    ShapeMismatch(String),

    /// A local precondition failed before any request was sent.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// Returns a user-friendly message suitable for a toast or error row.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Network(_) => "Could not reach the server. Please check your connection.",
            Self::Server { status: 401 | 403, .. } => {
                "You are not allowed to perform this action."
            }
            Self::Server { status: 404, .. } => "The record no longer exists.",
            Self::Server { .. } | Self::ShapeMismatch(_) => {
                "The server returned an unexpected response."
            }
            Self::InvalidRequest(_) => "The request was invalid.",
        }
    }

    /// HTTP status that caused the failure, if the server answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the failure is classified as a server-side error.
    ///
    /// Shape mismatches count as server errors: the contract was broken on
    /// the other side.
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Server { .. } | Self::ShapeMismatch(_))
    }

    /// Whether retrying the same call could succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Server { status, .. } => *status >= 500 || *status == 429,
            Self::ShapeMismatch(_) | Self::InvalidRequest(_) => false,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::ShapeMismatch(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Server {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::ShapeMismatch(err.to_string())
    }
}

impl From<admin_model::ModelError> for ApiError {
    fn from(err: admin_model::ModelError) -> Self {
        Self::InvalidRequest(err.to_string())
    }
}

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;
