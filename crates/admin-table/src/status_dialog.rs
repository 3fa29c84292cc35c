//! Status change confirmation dialog.
//!
//! The dialog is plain screen state: which record it is open for and that
//! record's current flag. Confirming yields a [`StatusChange`] to the opposite
//! flag; the dialog closes once the change succeeds and stays open when it
//! fails.

use admin_model::RecordId;

/// A confirmed change of a record's active flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    id: RecordId,
    active: bool,
}

impl StatusChange {
    /// Record to update.
    #[must_use]
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// New value of the active flag.
    #[must_use]
    pub fn active(&self) -> bool {
        self.active
    }
}

/// Open status dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
struct OpenDialog {
    id: RecordId,
    current: bool,
    pending: bool,
}

/// Status confirmation dialog of one screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusDialog {
    open: Option<OpenDialog>,
}

impl StatusDialog {
    /// Opens the dialog for a record with its current active flag.
    pub fn open(&mut self, id: RecordId, current: bool) {
        if self.is_pending() {
            return;
        }
        self.open = Some(OpenDialog {
            id,
            current,
            pending: false,
        });
    }

    /// Closes the dialog unless a change is running.
    pub fn cancel(&mut self) {
        if !self.is_pending() {
            self.open = None;
        }
    }

    /// Confirms the flip of the record's flag.
    pub fn confirm(&mut self) -> Option<StatusChange> {
        let dialog = self.open.as_mut().filter(|d| !d.pending)?;
        dialog.pending = true;
        Some(StatusChange {
            id: dialog.id.clone(),
            active: !dialog.current,
        })
    }

    /// Applies the outcome of a change: success closes the dialog, failure
    /// keeps it open for another attempt.
    pub fn finish(&mut self, id: &RecordId, succeeded: bool) {
        let Some(dialog) = self.open.as_mut().filter(|d| &d.id == id) else {
            return;
        };
        if succeeded {
            self.open = None;
        } else {
            dialog.pending = false;
        }
    }

    /// Whether the dialog is shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Whether the confirmed change is running.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.open.as_ref().is_some_and(|d| d.pending)
    }

    /// Record the dialog is open for.
    #[must_use]
    pub fn target(&self) -> Option<&RecordId> {
        self.open.as_ref().map(|d| &d.id)
    }

    /// Question shown in the dialog body.
    #[must_use]
    pub fn prompt(&self, singular_label: &str) -> Option<String> {
        self.open.as_ref().map(|d| {
            let verb = if d.current { "block" } else { "activate" };
            format!(
                "Are you sure you want to {verb} this {}?",
                singular_label.to_lowercase()
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> RecordId {
        RecordId::new(s).unwrap()
    }

    #[test]
    fn confirm_flips_current_flag() {
        let mut dialog = StatusDialog::default();
        dialog.open(id("u1"), true);
        let change = dialog.confirm().unwrap();
        assert_eq!(change.id(), &id("u1"));
        assert!(!change.active());
        assert!(dialog.is_pending());
        assert_eq!(dialog.confirm(), None);
    }

    #[test]
    fn success_closes_failure_keeps_open() {
        let mut dialog = StatusDialog::default();
        dialog.open(id("u1"), false);
        dialog.confirm();

        dialog.finish(&id("u1"), false);
        assert!(dialog.is_open());
        assert!(!dialog.is_pending());

        dialog.confirm();
        dialog.finish(&id("u1"), true);
        assert!(!dialog.is_open());
    }

    #[test]
    fn confirm_when_closed_is_noop() {
        let mut dialog = StatusDialog::default();
        assert_eq!(dialog.confirm(), None);
        dialog.open(id("u1"), true);
        dialog.cancel();
        assert_eq!(dialog.confirm(), None);
    }

    #[test]
    fn prompt_names_the_action() {
        let mut dialog = StatusDialog::default();
        dialog.open(id("u1"), true);
        assert_eq!(
            dialog.prompt("User").as_deref(),
            Some("Are you sure you want to block this user?")
        );
    }
}
