//! Composite cache keys.

use std::fmt;

use admin_model::{PageQuery, ResourceKind};

/// Cache key: resource collection plus the query that selects the page.
///
/// Two equal keys always describe the same server request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Collection the page belongs to; the invalidation prefix.
    pub resource: ResourceKind,
    /// Page, size, sort and filter.
    pub query: PageQuery,
}

impl CacheKey {
    /// Creates a key.
    #[must_use]
    pub fn new(resource: ResourceKind, query: PageQuery) -> Self {
        Self { resource, query }
    }

    /// Whether this key falls under the given resource prefix.
    #[must_use]
    pub fn belongs_to(&self, resource: ResourceKind) -> bool {
        self.resource == resource
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let q = &self.query;
        write!(
            f,
            "{}[page={} size={} sort={} {}",
            self.resource, q.page, q.page_size, q.sort_field, q.sort_order
        )?;
        if let Some(filter) = &q.filter {
            write!(f, " filter={filter:?}")?;
        }
        f.write_str("]")
    }
}
