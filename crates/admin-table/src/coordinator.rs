//! Mutation coordination.
//!
//! [`MutationCoordinator`] runs delete and status requests and, on success,
//! invalidates every cached page of the resource before it returns. A list
//! fetch issued after the outcome is observed therefore never reads a page
//! cached before the mutation.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use admin_api::{ApiError, ResourceClient};
use admin_model::{PageResult, RecordId, ResourceKind};
use admin_query::QueryCache;

use crate::columns::TableRecord;
use crate::deletion::ConfirmedDeletion;
use crate::notify::Notification;
use crate::status_dialog::StatusChange;

/// What a mutation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    /// Record deletion.
    Delete,
    /// Active flag change to the given value.
    SetStatus {
        /// Requested flag.
        active: bool,
    },
}

/// Result of one mutation, ready to be applied to screen state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationOutcome {
    /// Collection the record belongs to.
    pub resource: ResourceKind,
    /// Mutated record.
    pub id: RecordId,
    /// Mutation performed.
    pub kind: MutationKind,
    /// Request result.
    pub result: Result<(), ApiError>,
    /// Message for the user.
    pub notification: Notification,
}

impl MutationOutcome {
    /// Whether the request succeeded.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }
}

/// Issues mutations for records of type `R`.
pub struct MutationCoordinator<R, C> {
    client: Arc<C>,
    cache: QueryCache<PageResult<R>>,
    _record: PhantomData<fn() -> R>,
}

impl<R, C> Clone for MutationCoordinator<R, C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            cache: self.cache.clone(),
            _record: PhantomData,
        }
    }
}

impl<R, C> fmt::Debug for MutationCoordinator<R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutationCoordinator")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

impl<R: TableRecord, C: ResourceClient> MutationCoordinator<R, C> {
    /// Creates a coordinator sharing `cache` with the screen's loader.
    pub fn new(client: Arc<C>, cache: QueryCache<PageResult<R>>) -> Self {
        Self {
            client,
            cache,
            _record: PhantomData,
        }
    }

    /// Deletes a record the user confirmed.
    pub async fn delete_record(&self, confirmed: ConfirmedDeletion) -> MutationOutcome {
        let kind = R::KIND;
        let id = confirmed.id().clone();
        let result = self.client.remove::<R>(&id).await;

        let notification = match &result {
            Ok(()) => {
                self.cache.invalidate_resource(kind);
                tracing::info!(resource = %kind, %id, "Record deleted");
                Notification::deleted(kind)
            }
            Err(err) => {
                tracing::error!(resource = %kind, %id, error = %err, "Delete failed");
                Notification::delete_failed(kind)
            }
        };

        MutationOutcome {
            resource: kind,
            id,
            kind: MutationKind::Delete,
            result,
            notification,
        }
    }

    /// Applies a confirmed status change.
    pub async fn set_status(&self, change: StatusChange) -> MutationOutcome {
        let kind = R::KIND;
        let id = change.id().clone();
        let active = change.active();
        let result = self.client.set_active::<R>(&id, active).await;

        let notification = match &result {
            Ok(()) => {
                self.cache.invalidate_resource(kind);
                tracing::info!(resource = %kind, %id, active, "Record status updated");
                Notification::status_changed(kind, active)
            }
            Err(err) => {
                tracing::error!(resource = %kind, %id, error = %err, "Status update failed");
                Notification::status_failed(kind)
            }
        };

        MutationOutcome {
            resource: kind,
            id,
            kind: MutationKind::SetStatus { active },
            result,
            notification,
        }
    }
}
