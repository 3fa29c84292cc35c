//! Cached page loading.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use admin_api::{ApiError, ResourceClient};
use admin_model::PageResult;
use admin_query::{CacheKey, QueryCache};

use crate::columns::TableRecord;

/// Loads pages of `R` through the shared cache.
pub struct PageLoader<R, C> {
    client: Arc<C>,
    cache: QueryCache<PageResult<R>>,
    _record: PhantomData<fn() -> R>,
}

impl<R, C> Clone for PageLoader<R, C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            cache: self.cache.clone(),
            _record: PhantomData,
        }
    }
}

impl<R, C> fmt::Debug for PageLoader<R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageLoader")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

impl<R: TableRecord, C: ResourceClient> PageLoader<R, C> {
    /// Creates a loader over a client and a cache.
    pub fn new(client: Arc<C>, cache: QueryCache<PageResult<R>>) -> Self {
        Self {
            client,
            cache,
            _record: PhantomData,
        }
    }

    /// Returns the page for `key`, from cache or from one shared fetch.
    pub async fn load(&self, key: CacheKey) -> Result<PageResult<R>, ApiError> {
        let client = Arc::clone(&self.client);
        let query = key.query.clone();
        self.cache
            .get_or_fetch(key, move || async move { client.list::<R>(&query).await })
            .await
    }

    /// The cache this loader reads through.
    #[must_use]
    pub fn cache(&self) -> &QueryCache<PageResult<R>> {
        &self.cache
    }
}
