//! Table state controller.
//!
//! [`TableState`] owns sorting, column filters, column visibility, row
//! selection and pagination for one screen. Every transition is synchronous
//! and performs no I/O: it only changes the derived [`PageQuery`], which the
//! screen turns into a cache key and fetches.

use std::collections::{BTreeMap, BTreeSet};

use admin_model::{
    DEFAULT_PAGE_SIZE, DEFAULT_SORT_FIELD, PageQuery, RecordId, ResourceKind, SortOrder,
    page_count,
};
use admin_query::CacheKey;

use crate::columns::{ColumnDescriptor, find_column};

/// Columns whose filter value is forwarded to the server, in priority order.
pub const FILTER_COLUMNS: [&str; 2] = ["email", "full_name"];

/// Direction of an active column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

/// The single active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    /// Sorted column id.
    pub column: &'static str,
    /// Direction.
    pub direction: SortDirection,
}

/// Local UI state of one resource table.
#[derive(Debug, Clone)]
pub struct TableState {
    columns: &'static [ColumnDescriptor],
    sorting: Option<SortState>,
    filters: BTreeMap<&'static str, String>,
    hidden: BTreeSet<&'static str>,
    selection: BTreeSet<RecordId>,
    page_index: u32,
    page_size: u32,
    total: Option<u64>,
    visible_rows: Vec<RecordId>,
}

impl TableState {
    /// Creates state for a table with the given columns.
    #[must_use]
    pub fn new(columns: &'static [ColumnDescriptor], page_size: u32) -> Self {
        Self {
            columns,
            sorting: None,
            filters: BTreeMap::new(),
            hidden: BTreeSet::new(),
            selection: BTreeSet::new(),
            page_index: 0,
            page_size: page_size.max(1),
            total: None,
            visible_rows: Vec::new(),
        }
    }

    // =========================================================================
    // DERIVED QUERY
    // =========================================================================

    /// The list request this state describes.
    #[must_use]
    pub fn page_query(&self) -> PageQuery {
        let (sort_field, sort_order) = match self.sorting {
            Some(SortState {
                column,
                direction: SortDirection::Asc,
            }) => (column, SortOrder::Asc),
            Some(SortState {
                column,
                direction: SortDirection::Desc,
            }) => (column, SortOrder::Desc),
            None => (DEFAULT_SORT_FIELD, SortOrder::Desc),
        };

        PageQuery {
            page: self.page_index + 1,
            page_size: self.page_size,
            sort_field: sort_field.to_string(),
            sort_order,
            filter: FILTER_COLUMNS
                .iter()
                .find_map(|column| self.filters.get(column))
                .cloned(),
        }
    }

    /// Cache key of the current query.
    #[must_use]
    pub fn cache_key(&self, resource: ResourceKind) -> CacheKey {
        CacheKey::new(resource, self.page_query())
    }

    // =========================================================================
    // SORTING
    // =========================================================================

    /// Cycles the sort of a column: unsorted, ascending, descending, unsorted.
    ///
    /// Sorting another column starts over at ascending. Returns `false` for
    /// unknown or non-sortable columns.
    pub fn toggle_sort(&mut self, column: &str) -> bool {
        let Some(descriptor) = find_column(self.columns, column).filter(|c| c.sortable) else {
            return false;
        };

        self.sorting = match self.sorting {
            Some(SortState {
                column,
                direction: SortDirection::Asc,
            }) if column == descriptor.id => Some(SortState {
                column,
                direction: SortDirection::Desc,
            }),
            Some(SortState {
                column,
                direction: SortDirection::Desc,
            }) if column == descriptor.id => None,
            _ => Some(SortState {
                column: descriptor.id,
                direction: SortDirection::Asc,
            }),
        };
        true
    }

    /// The active sort, if any.
    #[must_use]
    pub fn sorting(&self) -> Option<SortState> {
        self.sorting
    }

    /// Sort direction of a column, if it is the sorted one.
    #[must_use]
    pub fn sort_direction(&self, column: &str) -> Option<SortDirection> {
        self.sorting
            .filter(|s| s.column == column)
            .map(|s| s.direction)
    }

    // =========================================================================
    // FILTERING
    // =========================================================================

    /// Replaces the filter of a column; an empty value clears it.
    ///
    /// A changed filter returns to the first page. Unknown columns are ignored.
    pub fn set_filter(&mut self, column: &str, value: &str) -> bool {
        let Some(descriptor) = find_column(self.columns, column) else {
            return false;
        };

        let changed = if value.is_empty() {
            self.filters.remove(descriptor.id).is_some()
        } else if self.filters.get(descriptor.id).map(String::as_str) == Some(value) {
            false
        } else {
            self.filters.insert(descriptor.id, value.to_string());
            true
        };

        if changed {
            self.page_index = 0;
        }
        changed
    }

    /// Current filter text of a column.
    #[must_use]
    pub fn filter(&self, column: &str) -> &str {
        self.filters.get(column).map_or("", String::as_str)
    }

    // =========================================================================
    // PAGINATION
    // =========================================================================

    /// 0-based page index.
    #[must_use]
    pub fn page_index(&self) -> u32 {
        self.page_index
    }

    /// Rows per page.
    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Total matching records from the last result, if any arrived.
    #[must_use]
    pub fn total(&self) -> Option<u64> {
        self.total
    }

    /// `ceil(total / page_size)` once a result has arrived.
    #[must_use]
    pub fn page_count(&self) -> Option<u32> {
        self.total.map(|total| page_count(total, self.page_size))
    }

    /// Moves to a page, clamped to `[0, page_count - 1]`.
    ///
    /// Before the first result arrives there is nothing to clamp against and
    /// the index is taken as-is. Returns whether the index changed.
    pub fn set_page_index(&mut self, index: u32) -> bool {
        let clamped = self.clamp_index(index);
        let changed = clamped != self.page_index;
        self.page_index = clamped;
        changed
    }

    /// Changes the page size, keeping the first visible row on screen.
    pub fn set_page_size(&mut self, size: u32) -> bool {
        let size = size.max(1);
        if size == self.page_size {
            return false;
        }
        let first_row = u64::from(self.page_index) * u64::from(self.page_size);
        self.page_size = size;
        let index = u32::try_from(first_row / u64::from(size)).unwrap_or(u32::MAX);
        self.page_index = self.clamp_index(index);
        true
    }

    /// Whether a previous page exists.
    #[must_use]
    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    /// Whether a next page exists.
    #[must_use]
    pub fn can_next(&self) -> bool {
        self.page_count()
            .is_some_and(|count| self.page_index + 1 < count)
    }

    /// 1-based row number of a row on the current page.
    #[must_use]
    pub fn row_number(&self, row: usize) -> u64 {
        u64::from(self.page_index) * u64::from(self.page_size) + row as u64 + 1
    }

    /// "Page X of Y" footer text.
    #[must_use]
    pub fn page_label(&self) -> String {
        let count = self.page_count().unwrap_or(0).max(1);
        format!("Page {} of {}", self.page_index + 1, count)
    }

    fn clamp_index(&self, index: u32) -> u32 {
        match self.page_count() {
            Some(0) => 0,
            Some(count) => index.min(count - 1),
            None => index,
        }
    }

    // =========================================================================
    // LOADED PAGE
    // =========================================================================

    /// Records the outcome of a fetch for the current query.
    ///
    /// Stores the total, replaces the visible row ids and drops selections of
    /// rows no longer on screen. If the page index now lies past the last
    /// page (e.g. the last row of the last page was deleted) it is clamped;
    /// the return value says whether the caller must fetch again.
    pub fn apply_page(&mut self, total: u64, rows: Vec<RecordId>) -> bool {
        self.total = Some(total);
        self.visible_rows = rows;
        let visible: BTreeSet<&RecordId> = self.visible_rows.iter().collect();
        self.selection.retain(|id| visible.contains(id));

        let clamped = self.clamp_index(self.page_index);
        let refetch = clamped != self.page_index;
        self.page_index = clamped;
        refetch
    }

    /// Clears the visible rows after a failed fetch.
    pub fn clear_rows(&mut self) {
        self.visible_rows.clear();
        self.selection.clear();
    }

    /// Ids of the rows currently on screen.
    #[must_use]
    pub fn visible_rows(&self) -> &[RecordId] {
        &self.visible_rows
    }

    // =========================================================================
    // SELECTION
    // =========================================================================

    /// Toggles the selection of a row on the current page.
    ///
    /// Rows that are not on screen cannot be selected.
    pub fn toggle_row_selection(&mut self, id: &RecordId) -> bool {
        if !self.visible_rows.contains(id) {
            return false;
        }
        if !self.selection.remove(id) {
            self.selection.insert(id.clone());
        }
        true
    }

    /// Selects or clears every row of the current page (not the remote set).
    pub fn toggle_all_on_page(&mut self, selected: bool) {
        if selected {
            self.selection.extend(self.visible_rows.iter().cloned());
        } else {
            for id in &self.visible_rows {
                self.selection.remove(id);
            }
        }
    }

    /// Whether a row is selected.
    #[must_use]
    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.selection.contains(id)
    }

    /// Whether the page has rows and all of them are selected.
    #[must_use]
    pub fn all_on_page_selected(&self) -> bool {
        !self.visible_rows.is_empty() && self.visible_rows.iter().all(|id| self.is_selected(id))
    }

    /// Number of selected rows.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// "N of TOTAL row(s) selected." footer text.
    #[must_use]
    pub fn selection_summary(&self) -> String {
        format!(
            "{} of {} row(s) selected.",
            self.selection.len(),
            self.total.unwrap_or(0)
        )
    }

    // =========================================================================
    // COLUMN VISIBILITY
    // =========================================================================

    /// Shows or hides a hideable column. Other columns are ignored.
    pub fn set_column_visibility(&mut self, column: &str, visible: bool) -> bool {
        let Some(descriptor) = find_column(self.columns, column).filter(|c| c.hideable) else {
            return false;
        };
        if visible {
            self.hidden.remove(descriptor.id)
        } else {
            self.hidden.insert(descriptor.id)
        }
    }

    /// Whether a column is shown.
    #[must_use]
    pub fn is_visible(&self, column: &str) -> bool {
        !self.hidden.contains(column)
    }

    /// All columns, in display order.
    #[must_use]
    pub fn columns(&self) -> &'static [ColumnDescriptor] {
        self.columns
    }

    /// Columns currently shown, in display order.
    pub fn visible_columns(&self) -> impl Iterator<Item = &'static ColumnDescriptor> + '_ {
        self.columns.iter().filter(|c| self.is_visible(c.id))
    }

    /// Columns listed in the visibility menu.
    pub fn hideable_columns(&self) -> impl Iterator<Item = &'static ColumnDescriptor> {
        self.columns.iter().filter(|c| c.hideable)
    }
}

#[cfg(test)]
mod tests {
    use admin_model::User;

    use super::*;
    use crate::columns::TableRecord;

    fn state() -> TableState {
        TableState::new(User::columns(), DEFAULT_PAGE_SIZE)
    }

    fn ids(names: &[&str]) -> Vec<RecordId> {
        names.iter().map(|n| RecordId::new(*n).unwrap()).collect()
    }

    #[test]
    fn default_query_is_newest_first() {
        let query = state().page_query();
        assert_eq!(query, PageQuery::first_page());
    }

    #[test]
    fn sort_cycles_through_three_states() {
        let mut state = state();
        assert!(state.toggle_sort("email"));
        assert_eq!(state.sort_direction("email"), Some(SortDirection::Asc));
        assert_eq!(state.page_query().sort_order, SortOrder::Asc);

        state.toggle_sort("email");
        assert_eq!(state.sort_direction("email"), Some(SortDirection::Desc));
        assert_eq!(state.page_query().sort_field, "email");

        state.toggle_sort("email");
        assert_eq!(state.sorting(), None);
        assert_eq!(state.page_query().sort_field, DEFAULT_SORT_FIELD);
        assert_eq!(state.page_query().sort_order, SortOrder::Desc);
    }

    #[test]
    fn sorting_another_column_starts_ascending() {
        let mut state = state();
        state.toggle_sort("email");
        state.toggle_sort("email");
        state.toggle_sort("full_name");
        assert_eq!(
            state.sorting(),
            Some(SortState {
                column: "full_name",
                direction: SortDirection::Asc
            })
        );
    }

    #[test]
    fn non_sortable_columns_are_ignored() {
        let mut state = state();
        assert!(!state.toggle_sort("select"));
        assert!(!state.toggle_sort("created_at"));
        assert!(!state.toggle_sort("nope"));
        assert_eq!(state.sorting(), None);
    }

    #[test]
    fn filter_resets_page_and_feeds_query() {
        let mut state = state();
        state.apply_page(100, Vec::new());
        state.set_page_index(4);

        assert!(state.set_filter("email", "ann"));
        assert_eq!(state.page_index(), 0);
        assert_eq!(state.page_query().filter.as_deref(), Some("ann"));
        assert_eq!(state.filter("email"), "ann");

        assert!(state.set_filter("email", ""));
        assert_eq!(state.page_query().filter, None);
        assert!(!state.set_filter("email", ""));
    }

    #[test]
    fn page_index_clamps_to_last_page() {
        let mut state = state();
        state.apply_page(42, Vec::new());
        assert_eq!(state.page_count(), Some(5));

        state.set_page_index(9);
        assert_eq!(state.page_index(), 4);
        assert_eq!(state.page_query().page, 5);
        assert!(!state.can_next());
        assert!(state.can_previous());
    }

    #[test]
    fn empty_result_clamps_to_first_page() {
        let mut state = state();
        state.apply_page(0, Vec::new());
        state.set_page_index(3);
        assert_eq!(state.page_index(), 0);
        assert_eq!(state.page_label(), "Page 1 of 1");
    }

    #[test]
    fn unknown_page_count_does_not_clamp() {
        let mut state = state();
        state.set_page_index(3);
        assert_eq!(state.page_index(), 3);
    }

    #[test]
    fn shrinking_total_requests_refetch() {
        let mut state = state();
        state.apply_page(21, Vec::new());
        state.set_page_index(2);

        assert!(state.apply_page(20, Vec::new()));
        assert_eq!(state.page_index(), 1);
    }

    #[test]
    fn page_size_change_keeps_first_row_visible() {
        let mut state = state();
        state.apply_page(100, Vec::new());
        state.set_page_index(3);

        state.set_page_size(20);
        assert_eq!(state.page_index(), 1);
        assert_eq!(state.row_number(0), 21);

        state.set_page_size(0);
        assert_eq!(state.page_size(), 1);
    }

    #[test]
    fn selection_is_scoped_to_visible_page() {
        let mut state = state();
        state.apply_page(30, ids(&["a", "b", "c"]));

        state.toggle_all_on_page(true);
        assert_eq!(state.selected_count(), 3);
        assert!(state.all_on_page_selected());
        assert_eq!(state.selection_summary(), "3 of 30 row(s) selected.");

        // Known limitation: selection never spans pages.
        assert!(!state.toggle_row_selection(&RecordId::new("z").unwrap()));
        state.set_page_index(1);
        state.apply_page(30, ids(&["d", "e"]));
        assert_eq!(state.selected_count(), 0);
    }

    #[test]
    fn toggling_a_row_twice_clears_it() {
        let mut state = state();
        state.apply_page(2, ids(&["a", "b"]));
        let a = RecordId::new("a").unwrap();

        assert!(state.toggle_row_selection(&a));
        assert!(state.is_selected(&a));
        assert!(!state.all_on_page_selected());
        state.toggle_row_selection(&a);
        assert!(!state.is_selected(&a));
    }

    #[test]
    fn only_hideable_columns_can_be_hidden() {
        let mut state = state();
        assert!(!state.set_column_visibility("select", false));
        assert!(state.set_column_visibility("avatar", false));
        assert!(!state.is_visible("avatar"));
        assert_eq!(state.visible_columns().count(), User::columns().len() - 1);

        assert!(state.set_column_visibility("avatar", true));
        assert!(state.is_visible("avatar"));
        assert!(state.hideable_columns().all(|c| c.id != "select"));
    }
}
