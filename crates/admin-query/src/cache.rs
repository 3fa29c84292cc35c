//! Keyed page cache with shared in-flight fetches.
//!
//! Each key owns one [`Slot`]. A slot carries a generation counter that
//! [`QueryCache::invalidate`] bumps; a fetch remembers the generation it was
//! started under and only writes its result back while that generation is
//! still current. This is what makes a mutation's invalidation happen-before
//! the next fetch: after `invalidate` returns, no fetch started earlier can
//! mark the entry fresh again.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use admin_api::ApiError;
use admin_model::ResourceKind;
use futures_util::FutureExt;
use futures_util::future::{BoxFuture, Shared};

use crate::key::CacheKey;

type SharedFetch<V> = Shared<BoxFuture<'static, Result<V, ApiError>>>;

/// Fetch status of a cache entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchStatus {
    /// Never fetched.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last fetch succeeded.
    Success,
    /// The last fetch failed.
    Error,
}

struct Slot<V> {
    value: Option<V>,
    stale: bool,
    generation: u64,
    in_flight: Option<SharedFetch<V>>,
    status: FetchStatus,
    last_error: Option<ApiError>,
}

impl<V> Default for Slot<V> {
    fn default() -> Self {
        Self {
            value: None,
            stale: false,
            generation: 0,
            in_flight: None,
            status: FetchStatus::Idle,
            last_error: None,
        }
    }
}

/// Cache of fetched values keyed by [`CacheKey`].
///
/// Cloning is cheap and clones share the same entries.
pub struct QueryCache<V> {
    slots: Arc<Mutex<HashMap<CacheKey, Slot<V>>>>,
}

impl<V> Clone for QueryCache<V> {
    fn clone(&self) -> Self {
        Self {
            slots: Arc::clone(&self.slots),
        }
    }
}

impl<V> Default for QueryCache<V> {
    fn default() -> Self {
        Self {
            slots: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl<V> fmt::Debug for QueryCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryCache")
            .field("entries", &self.lock().len())
            .finish()
    }
}

impl<V> QueryCache<V> {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<CacheKey, Slot<V>>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Marks every entry matching `predicate` stale and detaches its in-flight
    /// fetch. Returns the number of entries touched.
    pub fn invalidate(&self, predicate: impl Fn(&CacheKey) -> bool) -> usize {
        let mut slots = self.lock();
        let mut touched = 0;
        for (key, slot) in slots.iter_mut().filter(|(key, _)| predicate(*key)) {
            slot.generation += 1;
            slot.stale = true;
            slot.in_flight = None;
            if slot.status == FetchStatus::Loading {
                slot.status = FetchStatus::Idle;
            }
            touched += 1;
            tracing::trace!(%key, "Invalidated cache entry");
        }
        touched
    }

    /// Invalidates every entry of one resource collection.
    pub fn invalidate_resource(&self, resource: ResourceKind) -> usize {
        let touched = self.invalidate(|key| key.belongs_to(resource));
        tracing::debug!(%resource, touched, "Invalidated resource");
        touched
    }

    /// Fetch status of an entry; unknown keys are [`FetchStatus::Idle`].
    #[must_use]
    pub fn status(&self, key: &CacheKey) -> FetchStatus {
        self.lock().get(key).map_or(FetchStatus::Idle, |slot| slot.status)
    }

    /// Whether an entry holds data that was invalidated since it was fetched.
    #[must_use]
    pub fn is_stale(&self, key: &CacheKey) -> bool {
        self.lock().get(key).is_some_and(|slot| slot.stale)
    }

    /// Error of the last failed fetch for a key, if the last fetch failed.
    #[must_use]
    pub fn last_error(&self, key: &CacheKey) -> Option<ApiError> {
        self.lock().get(key).and_then(|slot| slot.last_error.clone())
    }

    /// Number of keys the cache has seen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the cache has seen no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl<V> QueryCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    /// Cached value for a key, fresh or stale, without fetching.
    #[must_use]
    pub fn peek(&self, key: &CacheKey) -> Option<V> {
        self.lock().get(key).and_then(|slot| slot.value.clone())
    }

    /// Returns the fresh cached value for `key`, or fetches it.
    ///
    /// Callers that arrive while a fetch for the same key is in flight await
    /// that fetch instead of starting another. `fetch` is only called when a
    /// new fetch is started, while the cache lock is held; it must not touch
    /// this cache.
    ///
    /// Failures are returned to every waiting caller and recorded on the entry
    /// but never stored as data, so the next call fetches again.
    pub async fn get_or_fetch<F, Fut>(&self, key: CacheKey, fetch: F) -> Result<V, ApiError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, ApiError>> + Send + 'static,
    {
        let shared = {
            let mut slots = self.lock();
            let slot = slots.entry(key.clone()).or_default();

            if let Some(value) = slot.value.as_ref().filter(|_| !slot.stale) {
                tracing::debug!(%key, "Cache hit");
                return Ok(value.clone());
            }

            if let Some(in_flight) = &slot.in_flight {
                tracing::debug!(%key, "Joining in-flight fetch");
                in_flight.clone()
            } else {
                tracing::debug!(%key, generation = slot.generation, "Starting fetch");
                let shared = self.start_fetch(key, slot.generation, fetch());
                slot.in_flight = Some(shared.clone());
                slot.status = FetchStatus::Loading;
                shared
            }
        };

        shared.await
    }

    fn start_fetch<Fut>(&self, key: CacheKey, generation: u64, fut: Fut) -> SharedFetch<V>
    where
        Fut: Future<Output = Result<V, ApiError>> + Send + 'static,
    {
        let cache = self.clone();
        async move {
            let result = fut.await;
            cache.complete(&key, generation, &result);
            result
        }
        .boxed()
        .shared()
    }

    /// Writes a fetch result back if its generation is still current.
    fn complete(&self, key: &CacheKey, generation: u64, result: &Result<V, ApiError>) {
        let mut slots = self.lock();
        let Some(slot) = slots.get_mut(key) else {
            return;
        };
        if slot.generation != generation {
            tracing::debug!(%key, generation, "Discarding fetch superseded by invalidation");
            return;
        }

        slot.in_flight = None;
        match result {
            Ok(value) => {
                slot.value = Some(value.clone());
                slot.stale = false;
                slot.status = FetchStatus::Success;
                slot.last_error = None;
            }
            Err(err) => {
                tracing::error!(%key, error = %err, "Fetch failed");
                slot.status = FetchStatus::Error;
                slot.last_error = Some(err.clone());
            }
        }
    }
}
