//! Pagination and sorting values.
//!
//! [`PageQuery`] fully determines what a list request returns, so it doubles as
//! the cache key payload: two equal queries may share one cached page.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Column the server sorts by when the table has no explicit sort.
pub const DEFAULT_SORT_FIELD: &str = "created_at";

/// Rows per page before the user picks another size.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Page sizes offered by the rows-per-page selector.
pub const PAGE_SIZE_OPTIONS: [u32; 5] = [10, 20, 30, 40, 50];

// =============================================================================
// SORT ORDER
// =============================================================================

/// Server-side sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending (the default, newest first).
    #[default]
    Desc,
}

impl SortOrder {
    /// Token sent in the `sortOrder` query parameter.
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

impl FromStr for SortOrder {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ASC" => Ok(Self::Asc),
            "DESC" => Ok(Self::Desc),
            other => Err(ModelError::UnknownSortOrder(other.to_string())),
        }
    }
}

// =============================================================================
// PAGE QUERY
// =============================================================================

/// Parameters of one list request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageQuery {
    /// 1-based page number.
    pub page: u32,
    /// Rows per page (`limit` on the wire).
    pub page_size: u32,
    /// Column to sort by (`sortBy` on the wire).
    pub sort_field: String,
    /// Sort direction.
    pub sort_order: SortOrder,
    /// Free-text filter forwarded to the resource's filter column.
    pub filter: Option<String>,
}

impl PageQuery {
    /// Creates a validated query.
    pub fn new(
        page: u32,
        page_size: u32,
        sort_field: impl Into<String>,
        sort_order: SortOrder,
        filter: Option<String>,
    ) -> Result<Self> {
        let query = Self {
            page,
            page_size,
            sort_field: sort_field.into(),
            sort_order,
            filter: filter.filter(|f| !f.is_empty()),
        };
        query.validate()?;
        Ok(query)
    }

    /// First page, default size, newest first, no filter.
    #[must_use]
    pub fn first_page() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            sort_field: DEFAULT_SORT_FIELD.to_string(),
            sort_order: SortOrder::Desc,
            filter: None,
        }
    }

    /// Checks the 1-based page and non-zero page size invariants.
    pub fn validate(&self) -> Result<()> {
        if self.page < 1 {
            return Err(ModelError::InvalidPage(self.page));
        }
        if self.page_size < 1 {
            return Err(ModelError::InvalidPageSize(self.page_size));
        }
        Ok(())
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::first_page()
    }
}

// =============================================================================
// PAGE RESULT
// =============================================================================

/// Pagination metadata as reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Total matching records across all pages.
    pub total: u64,
    /// Page this response covers (1-based).
    pub page: u32,
    /// Page size the server applied.
    pub limit: u32,
}

/// One page of records plus its metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<R> {
    /// Records in server order.
    pub records: Vec<R>,
    /// Total matching records across all pages.
    pub total: u64,
    /// Page this result covers (1-based).
    pub page: u32,
    /// Page size the server applied.
    pub limit: u32,
}

impl<R> PageResult<R> {
    /// Builds a result from records and server metadata.
    #[must_use]
    pub fn from_parts(records: Vec<R>, meta: PageMeta) -> Self {
        Self {
            records,
            total: meta.total,
            page: meta.page.max(1),
            limit: meta.limit.max(1),
        }
    }

    /// Number of pages, `ceil(total / limit)`.
    #[must_use]
    pub fn page_count(&self) -> u32 {
        page_count(self.total, self.limit)
    }

    /// Whether the page holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// `ceil(total / limit)`, saturating at `u32::MAX`; a zero limit counts as one.
#[must_use]
pub fn page_count(total: u64, limit: u32) -> u32 {
    let pages = total.div_ceil(u64::from(limit.max(1)));
    u32::try_from(pages).unwrap_or(u32::MAX)
}
