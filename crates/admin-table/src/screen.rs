//! One resource screen: table state, displayed page and dialogs.

use admin_api::ApiError;
use admin_model::{PageResult, Record, RecordId, ResourceKind};
use admin_query::{QueryView, Ticket};

use crate::columns::{CellValue, DisplayOptions, TableRecord, cell};
use crate::coordinator::{MutationKind, MutationOutcome};
use crate::deletion::DeleteFlow;
use crate::state::TableState;
use crate::status_dialog::StatusDialog;

/// What the table body shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableBody<'a> {
    /// The current query has not resolved yet.
    Loading,
    /// The current query failed.
    Failed(&'a ApiError),
    /// The current query returned no rows.
    Empty,
    /// Rows are available.
    Rows,
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Record id.
    pub id: RecordId,
    /// Active flag, for the status dialog.
    pub active: bool,
    /// One cell per visible column.
    pub cells: Vec<CellValue>,
}

/// State of one admin screen for records of type `R`.
#[derive(Debug, Clone)]
pub struct ResourceScreen<R> {
    /// Sorting, filters, visibility, selection and pagination.
    pub table: TableState,
    /// Two-step delete confirmation.
    pub delete: DeleteFlow,
    /// Status change confirmation.
    pub status: StatusDialog,
    view: QueryView<PageResult<R>>,
    display: DisplayOptions,
}

impl<R: TableRecord> ResourceScreen<R> {
    /// Creates a screen with an initial page size.
    #[must_use]
    pub fn new(page_size: u32, display: DisplayOptions) -> Self {
        Self {
            table: TableState::new(R::columns(), page_size),
            delete: DeleteFlow::default(),
            status: StatusDialog::default(),
            view: QueryView::new(),
            display,
        }
    }

    /// Collection shown by this screen.
    #[must_use]
    pub fn kind(&self) -> ResourceKind {
        R::KIND
    }

    /// Starts loading the page the table state describes.
    pub fn begin_load(&mut self) -> Ticket {
        self.view.request(self.table.cache_key(R::KIND))
    }

    /// Applies a load result.
    ///
    /// Superseded results are dropped. Returns `true` when the page index had
    /// to be clamped and the caller should load again.
    pub fn finish_load(&mut self, ticket: &Ticket, result: Result<PageResult<R>, ApiError>) -> bool {
        if !self.view.resolve(ticket, result) {
            return false;
        }
        match self.view.data() {
            Some(page) => {
                let ids = page.records.iter().map(|r| r.id().clone()).collect();
                self.table.apply_page(page.total, ids)
            }
            None => {
                self.table.clear_rows();
                false
            }
        }
    }

    /// Applies a mutation outcome to the dialogs.
    ///
    /// Returns `true` when the mutation succeeded and the page should be
    /// reloaded.
    pub fn apply_mutation(&mut self, outcome: &MutationOutcome) -> bool {
        if outcome.resource != R::KIND {
            return false;
        }
        let succeeded = outcome.succeeded();
        match outcome.kind {
            MutationKind::Delete => self.delete.finish(&outcome.id, succeeded),
            MutationKind::SetStatus { .. } => self.status.finish(&outcome.id, succeeded),
        }
        succeeded
    }

    /// What the body of the table shows.
    #[must_use]
    pub fn body(&self) -> TableBody<'_> {
        if self.view.is_loading() {
            TableBody::Loading
        } else if let Some(err) = self.view.error() {
            TableBody::Failed(err)
        } else if self.view.data().is_none_or(PageResult::is_empty) {
            TableBody::Empty
        } else {
            TableBody::Rows
        }
    }

    /// Whether a load for the current query is running.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.view.is_loading()
    }

    /// Records of the displayed page.
    #[must_use]
    pub fn records(&self) -> &[R] {
        self.view.data().map_or(&[][..], |page| page.records.as_slice())
    }

    /// Finds a displayed record.
    #[must_use]
    pub fn record(&self, id: &RecordId) -> Option<&R> {
        self.records().iter().find(|r| r.id() == id)
    }

    /// Rows of the displayed page with cells for the visible columns.
    #[must_use]
    pub fn rows(&self) -> Vec<RowView> {
        self.records()
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let selected = self.table.is_selected(record.id());
                let number = self.table.row_number(index);
                RowView {
                    id: record.id().clone(),
                    active: record.is_active(),
                    cells: self
                        .table
                        .visible_columns()
                        .map(|column| cell(record, column, number, selected, &self.display))
                        .collect(),
                }
            })
            .collect()
    }

    /// Opens the status dialog for a displayed record.
    pub fn open_status_dialog(&mut self, id: &RecordId) -> bool {
        let Some(active) = self.record(id).map(Record::is_active) else {
            return false;
        };
        self.status.open(id.clone(), active);
        true
    }

    /// Display options used for cells.
    #[must_use]
    pub fn display(&self) -> DisplayOptions {
        self.display
    }
}
