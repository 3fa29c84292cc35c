//! User-facing notifications produced by mutations.

use std::fmt;

use admin_model::ResourceKind;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// The action succeeded.
    Success,
    /// Informational notice.
    Info,
    /// The action failed.
    Error,
}

/// A transient message for the user (toast in the GUI, a line in the CLI).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Severity.
    pub level: NotificationLevel,
    /// Message text.
    pub message: String,
}

impl Notification {
    /// Success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    /// Informational notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }

    /// Error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    /// "Card deleted successfully!"
    #[must_use]
    pub fn deleted(kind: ResourceKind) -> Self {
        Self::success(format!("{} deleted successfully!", kind.singular_label()))
    }

    /// "Failed to delete card."
    #[must_use]
    pub fn delete_failed(kind: ResourceKind) -> Self {
        Self::error(format!(
            "Failed to delete {}.",
            kind.singular_label().to_lowercase()
        ))
    }

    /// "User activated." / "User blocked."
    #[must_use]
    pub fn status_changed(kind: ResourceKind, active: bool) -> Self {
        let state = if active { "activated" } else { "blocked" };
        Self::success(format!("{} {state}.", kind.singular_label()))
    }

    /// "Failed to update user status."
    #[must_use]
    pub fn status_failed(kind: ResourceKind) -> Self {
        Self::error(format!(
            "Failed to update {} status.",
            kind.singular_label().to_lowercase()
        ))
    }

    /// Notice shown by the edit action until an editor exists.
    #[must_use]
    pub fn edit_unavailable(kind: ResourceKind) -> Self {
        Self::info(format!(
            "Editing {}s is not available yet.",
            kind.singular_label().to_lowercase()
        ))
    }

    /// Whether this reports a failure.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
