//! Concurrency behavior of the query cache.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use admin_api::ApiError;
use admin_model::{PageQuery, ResourceKind, SortOrder};
use admin_query::{CacheKey, FetchStatus, QueryCache};
use tokio::sync::watch;

fn cards_key() -> CacheKey {
    CacheKey::new(
        ResourceKind::Cards,
        PageQuery::new(1, 10, "created_at", SortOrder::Desc, None).unwrap(),
    )
}

/// Counts fetches and holds each one until the gate opens.
#[derive(Clone)]
struct GatedFetcher {
    calls: Arc<AtomicUsize>,
    gate: watch::Receiver<bool>,
}

impl GatedFetcher {
    fn new() -> (Self, watch::Sender<bool>) {
        let (open, gate) = watch::channel(false);
        let fetcher = Self {
            calls: Arc::new(AtomicUsize::new(0)),
            gate,
        };
        (fetcher, open)
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Returns a fetch that resolves to its own call number.
    fn fetch(&self) -> impl Future<Output = Result<usize, ApiError>> + Send + 'static {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        let mut gate = self.gate.clone();
        async move {
            gate.wait_for(|open| *open)
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(call)
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_callers_share_one_fetch() {
    let cache = QueryCache::<usize>::new();
    let (fetcher, open) = GatedFetcher::new();

    let callers: Vec<_> = (0..8)
        .map(|_| {
            let cache = cache.clone();
            let fetcher = fetcher.clone();
            tokio::spawn(async move { cache.get_or_fetch(cards_key(), || fetcher.fetch()).await })
        })
        .collect();

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(cache.status(&cards_key()), FetchStatus::Loading);
    open.send(true).unwrap();

    for caller in callers {
        assert_eq!(caller.await.unwrap(), Ok(1));
    }
    assert_eq!(fetcher.calls(), 1);
    assert_eq!(cache.status(&cards_key()), FetchStatus::Success);
}

#[tokio::test]
async fn two_concurrent_calls_for_first_cards_page_fetch_once() {
    let cache = QueryCache::<usize>::new();
    let (fetcher, open) = GatedFetcher::new();
    open.send(true).unwrap();

    let (a, b) = tokio::join!(
        cache.get_or_fetch(cards_key(), || fetcher.fetch()),
        cache.get_or_fetch(cards_key(), || fetcher.fetch()),
    );

    assert_eq!(a, Ok(1));
    assert_eq!(b, Ok(1));
    assert_eq!(fetcher.calls(), 1);
}

#[tokio::test]
async fn cached_value_is_served_until_invalidated() {
    let cache = QueryCache::<usize>::new();
    let (fetcher, open) = GatedFetcher::new();
    open.send(true).unwrap();

    assert_eq!(cache.get_or_fetch(cards_key(), || fetcher.fetch()).await, Ok(1));
    assert_eq!(cache.get_or_fetch(cards_key(), || fetcher.fetch()).await, Ok(1));
    assert_eq!(fetcher.calls(), 1);

    assert_eq!(cache.invalidate_resource(ResourceKind::Cards), 1);
    assert!(cache.is_stale(&cards_key()));
    assert_eq!(cache.peek(&cards_key()), Some(1));

    assert_eq!(cache.get_or_fetch(cards_key(), || fetcher.fetch()).await, Ok(2));
    assert_eq!(fetcher.calls(), 2);
    assert!(!cache.is_stale(&cards_key()));
}

#[tokio::test]
async fn invalidating_other_resource_keeps_entry() {
    let cache = QueryCache::<usize>::new();
    let (fetcher, open) = GatedFetcher::new();
    open.send(true).unwrap();

    cache.get_or_fetch(cards_key(), || fetcher.fetch()).await.unwrap();
    assert_eq!(cache.invalidate_resource(ResourceKind::Users), 0);
    cache.get_or_fetch(cards_key(), || fetcher.fetch()).await.unwrap();

    assert_eq!(fetcher.calls(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn fetch_started_before_invalidation_never_marks_entry_fresh() {
    let cache = QueryCache::<usize>::new();
    let (fetcher, open) = GatedFetcher::new();

    let early = {
        let cache = cache.clone();
        let fetcher = fetcher.clone();
        tokio::spawn(async move { cache.get_or_fetch(cards_key(), || fetcher.fetch()).await })
    };
    tokio::time::sleep(Duration::from_millis(20)).await;

    cache.invalidate_resource(ResourceKind::Cards);

    let late = {
        let cache = cache.clone();
        let fetcher = fetcher.clone();
        tokio::spawn(async move { cache.get_or_fetch(cards_key(), || fetcher.fetch()).await })
    };
    tokio::time::sleep(Duration::from_millis(20)).await;
    open.send(true).unwrap();

    assert_eq!(early.await.unwrap(), Ok(1));
    assert_eq!(late.await.unwrap(), Ok(2));
    assert_eq!(fetcher.calls(), 2);
    assert_eq!(cache.peek(&cards_key()), Some(2));
}

#[tokio::test]
async fn failures_are_not_cached() {
    let cache = QueryCache::<usize>::new();
    let calls = AtomicUsize::new(0);

    let failed = cache
        .get_or_fetch(cards_key(), || {
            calls.fetch_add(1, Ordering::SeqCst);
            async {
                Err(ApiError::Server {
                    status: 500,
                    message: "boom".to_string(),
                })
            }
        })
        .await;
    assert!(failed.is_err());
    assert_eq!(cache.status(&cards_key()), FetchStatus::Error);
    assert_eq!(cache.last_error(&cards_key()).and_then(|e| e.status()), Some(500));
    assert_eq!(cache.peek(&cards_key()), None);

    let recovered = cache
        .get_or_fetch(cards_key(), || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok(7) }
        })
        .await;
    assert_eq!(recovered, Ok(7));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(cache.last_error(&cards_key()), None);
}
