//! Two-step delete confirmation.
//!
//! ```text
//! Idle --stage(id)--> Staged(id) --cancel--> Idle
//! Staged(id) --confirm--> InFlight(id) --success--> Idle
//!                                      --failure--> Staged(id)
//! ```
//!
//! The only way to obtain a [`ConfirmedDeletion`], which the coordinator
//! requires before it calls `remove`, is [`DeleteFlow::confirm`] on a staged
//! flow.

use admin_model::RecordId;

/// A deletion the user explicitly confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmedDeletion {
    id: RecordId,
}

impl ConfirmedDeletion {
    /// Record to delete.
    #[must_use]
    pub fn id(&self) -> &RecordId {
        &self.id
    }
}

/// Delete flow state of one screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DeleteFlow {
    /// Nothing staged.
    #[default]
    Idle,
    /// Waiting for the user to confirm or cancel.
    Staged(RecordId),
    /// Confirmed; the request is running.
    InFlight(RecordId),
}

impl DeleteFlow {
    /// Stages a record for deletion, replacing any earlier staged record.
    ///
    /// Ignored while a deletion is in flight.
    pub fn stage(&mut self, id: RecordId) -> bool {
        if self.is_in_flight() {
            return false;
        }
        *self = Self::Staged(id);
        true
    }

    /// Drops the staged record. Ignored while in flight.
    pub fn cancel(&mut self) -> bool {
        match self {
            Self::Staged(_) => {
                *self = Self::Idle;
                true
            }
            Self::Idle | Self::InFlight(_) => false,
        }
    }

    /// Confirms the staged record. Without one this is a no-op.
    pub fn confirm(&mut self) -> Option<ConfirmedDeletion> {
        let Self::Staged(id) = self else {
            return None;
        };
        let id = id.clone();
        *self = Self::InFlight(id.clone());
        Some(ConfirmedDeletion { id })
    }

    /// Applies the outcome of the in-flight request for `id`.
    ///
    /// Success returns to idle; failure re-stages the record so the user can
    /// retry or cancel. Outcomes for other ids are ignored.
    pub fn finish(&mut self, id: &RecordId, succeeded: bool) {
        if !matches!(&*self, Self::InFlight(current) if current == id) {
            return;
        }
        *self = if succeeded {
            Self::Idle
        } else {
            Self::Staged(id.clone())
        };
    }

    /// The staged or in-flight record, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&RecordId> {
        match self {
            Self::Idle => None,
            Self::Staged(id) | Self::InFlight(id) => Some(id),
        }
    }

    /// Whether the confirmation dialog should be shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Whether the delete request is running.
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight(_))
    }
}
