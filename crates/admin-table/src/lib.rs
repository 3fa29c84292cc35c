//! Table controllers for the admin screens.
//!
//! - [`columns`]: declarative column descriptors and cell values
//! - [`state`]: the table state controller and its derived page query
//! - [`deletion`] / [`status_dialog`]: confirmation flows
//! - [`loader`] / [`coordinator`]: cached loading and mutations
//! - [`screen`]: everything one screen owns, composed

pub mod columns;
pub mod coordinator;
pub mod deletion;
pub mod loader;
pub mod notify;
pub mod screen;
pub mod state;
pub mod status_dialog;

pub use columns::{
    CellValue, ColumnDescriptor, ColumnKind, DisplayOptions, RowAction, TableRecord, status_label,
};
pub use coordinator::{MutationCoordinator, MutationKind, MutationOutcome};
pub use deletion::{ConfirmedDeletion, DeleteFlow};
pub use loader::PageLoader;
pub use notify::{Notification, NotificationLevel};
pub use screen::{ResourceScreen, RowView, TableBody};
pub use state::{SortDirection, SortState, TableState};
pub use status_dialog::{StatusChange, StatusDialog};
