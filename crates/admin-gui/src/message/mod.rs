//! Application messages.
//!
//! Top-level [`Message`] routes to one of the resource screens or to the
//! toast. Screen messages are generic over the record type so one handler
//! and one view serve both screens.

use admin_api::ApiError;
use admin_model::{Card, PageResult, RecordId, ResourceKind, User};
use admin_query::Ticket;
use admin_table::MutationOutcome;

pub use crate::component::toast::ToastMessage;

/// Root message type.
#[derive(Debug, Clone)]
pub enum Message {
    /// Switch the visible screen.
    Navigate(ResourceKind),
    /// Cards screen.
    Cards(ScreenMessage<Card>),
    /// Users screen.
    Users(ScreenMessage<User>),
    /// Toast notification.
    Toast(ToastMessage),
}

/// Messages of one resource screen showing records of type `R`.
#[derive(Debug, Clone)]
pub enum ScreenMessage<R> {
    // Table state
    SortClicked(&'static str),
    FilterChanged(String),
    FilterCleared,
    PageChanged(u32),
    PageSizeChanged(u32),
    RowToggled(RecordId),
    AllRowsToggled(bool),
    ColumnMenuToggled,
    ColumnVisibilityChanged(&'static str, bool),
    Reload,

    // Delete flow
    DeleteRequested(RecordId),
    DeleteCancelled,
    DeleteConfirmed,

    // Status dialog
    StatusRequested(RecordId),
    StatusCancelled,
    StatusConfirmed,

    /// Row edit action; editing has no form yet.
    EditRequested(RecordId),

    /// A page load resolved.
    Loaded(Ticket, Result<PageResult<R>, ApiError>),
    /// A delete or status mutation resolved.
    MutationFinished(MutationOutcome),
}
