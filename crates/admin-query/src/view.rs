//! Latest-wins view over a screen's current cache key.
//!
//! A screen may fire several fetches as the user pages or types, and they can
//! resolve in any order. Every fetch is started with a [`Ticket`]; only the
//! ticket issued last is allowed to update what the screen shows, so a slow
//! response for an abandoned key never overwrites fresher state.

use admin_api::ApiError;

use crate::key::CacheKey;

/// Receipt for one fetch started by a [`QueryView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    seq: u64,
    key: CacheKey,
}

impl Ticket {
    /// Key the fetch was started for.
    #[must_use]
    pub fn key(&self) -> &CacheKey {
        &self.key
    }
}

/// Data a screen currently displays, guarded against out-of-order results.
#[derive(Debug, Clone)]
pub struct QueryView<V> {
    current: Option<CacheKey>,
    issued: u64,
    applied: u64,
    data: Option<V>,
    error: Option<ApiError>,
}

impl<V> Default for QueryView<V> {
    fn default() -> Self {
        Self {
            current: None,
            issued: 0,
            applied: 0,
            data: None,
            error: None,
        }
    }
}

impl<V> QueryView<V> {
    /// Creates an empty view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that a fetch for `key` is starting and returns its ticket.
    ///
    /// Any ticket issued before this one is superseded.
    pub fn request(&mut self, key: CacheKey) -> Ticket {
        self.issued += 1;
        self.current = Some(key.clone());
        self.error = None;
        Ticket {
            seq: self.issued,
            key,
        }
    }

    /// Applies a fetch result if its ticket is the latest one issued.
    ///
    /// Returns whether the result was applied. On failure the previous data
    /// is dropped so the error state replaces stale rows.
    pub fn resolve(&mut self, ticket: &Ticket, result: Result<V, ApiError>) -> bool {
        if ticket.seq != self.issued || self.current.as_ref() != Some(&ticket.key) {
            tracing::debug!(
                key = %ticket.key,
                seq = ticket.seq,
                latest = self.issued,
                "Ignoring superseded fetch result"
            );
            return false;
        }

        self.applied = ticket.seq;
        match result {
            Ok(value) => {
                self.data = Some(value);
                self.error = None;
            }
            Err(err) => {
                self.data = None;
                self.error = Some(err);
            }
        }
        true
    }

    /// Key of the most recent request.
    #[must_use]
    pub fn current_key(&self) -> Option<&CacheKey> {
        self.current.as_ref()
    }

    /// Data from the latest applied result.
    #[must_use]
    pub fn data(&self) -> Option<&V> {
        self.data.as_ref()
    }

    /// Error from the latest applied result.
    #[must_use]
    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    /// Whether the latest request has not resolved yet.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.issued > self.applied
    }
}
