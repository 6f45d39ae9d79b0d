use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;
use tokio::time::Instant;

use super::{QueryKey, QueryState};
use crate::api::client::RequestError;

pub const DEFAULT_STALE_TIME: Duration = Duration::from_secs(30);
pub const DEFAULT_RETRY: u32 = 1;
/// How long a settled entry outlives its last fetch before it is dropped
pub const DEFAULT_GC_TIME: Duration = Duration::from_secs(5 * 60);

type Erased = Arc<dyn Any + Send + Sync>;
type InFlight = Shared<BoxFuture<'static, Result<Erased, RequestError>>>;

/// What a read does when it finds stale data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refetch {
    /// Wait for the refetch and return its result
    Blocking,
    /// Return the stale data now and refetch in the background
    Background,
}

#[derive(Debug, Clone, Copy)]
pub struct QueryOptions {
    pub stale_time: Duration,
    pub retry: u32,
    /// A disabled read never touches the network
    pub enabled: bool,
    pub refetch: Refetch,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            stale_time: DEFAULT_STALE_TIME,
            retry: DEFAULT_RETRY,
            enabled: true,
            refetch: Refetch::Blocking,
        }
    }
}

impl QueryOptions {
    pub fn with_stale_time(mut self, stale_time: Duration) -> Self {
        self.stale_time = stale_time;
        self
    }

    pub fn with_retry(mut self, retry: u32) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_refetch(mut self, refetch: Refetch) -> Self {
        self.refetch = refetch;
        self
    }
}

/// Change notifications delivered to subscribers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryEvent {
    Fetching(QueryKey),
    Updated(QueryKey),
    Failed(QueryKey),
    Invalidated(QueryKey),
}

#[derive(Default)]
struct Entry {
    data: Option<Erased>,
    fetched_at: Option<Instant>,
    /// When the last fetch finished, successfully or not
    settled_at: Option<Instant>,
    error: Option<RequestError>,
    invalidated: bool,
    /// Bumped on invalidation. Fetches started under an older epoch are
    /// detached and their results are not stored.
    epoch: u64,
    in_flight: Option<InFlight>,
}

impl Entry {
    fn is_fresh(&self, stale_time: Duration) -> bool {
        if self.invalidated || self.error.is_some() || self.data.is_none() {
            return false;
        }
        self.fetched_at
            .is_some_and(|fetched_at| fetched_at.elapsed() < stale_time)
    }

    /// Nothing in flight, and nothing settled within `gc_time`
    fn is_collectable(&self, gc_time: Duration) -> bool {
        self.in_flight.is_none()
            && self
                .settled_at
                .map_or(true, |settled_at| settled_at.elapsed() >= gc_time)
    }

    fn state<T: Send + Sync + 'static>(&self) -> QueryState<T> {
        if let Some(error) = &self.error {
            return QueryState::Failure(error.clone());
        }
        if let Some(data) = &self.data {
            return downcast(Arc::clone(data));
        }
        if self.in_flight.is_some() {
            return QueryState::Loading;
        }
        QueryState::Idle
    }
}

fn downcast<T: Send + Sync + 'static>(data: Erased) -> QueryState<T> {
    match data.downcast::<T>() {
        Ok(data) => QueryState::Success(data),
        Err(_) => QueryState::Failure(RequestError::new("cached value has an unexpected type")),
    }
}

struct Store {
    entries: Mutex<HashMap<QueryKey, Entry>>,
    subscribers: Mutex<Vec<flume::Sender<QueryEvent>>>,
    gc_time: Duration,
}

impl Store {
    fn new(gc_time: Duration) -> Self {
        Self {
            entries: Mutex::default(),
            subscribers: Mutex::default(),
            gc_time,
        }
    }

    fn emit(&self, event: QueryEvent) {
        self.subscribers
            .lock()
            .retain(|tx| tx.send(event.clone()).is_ok());
    }

    fn settle(&self, key: &QueryKey, epoch: u64, result: &Result<Erased, RequestError>) {
        let event = {
            let mut entries = self.entries.lock();
            let Some(entry) = entries.get_mut(key) else {
                return;
            };
            if entry.epoch != epoch {
                tracing::debug!(%key, "dropping result of detached fetch");
                return;
            }
            entry.in_flight = None;
            entry.settled_at = Some(Instant::now());
            match result {
                Ok(data) => {
                    entry.data = Some(Arc::clone(data));
                    entry.fetched_at = Some(Instant::now());
                    entry.error = None;
                    entry.invalidated = false;
                    QueryEvent::Updated(key.clone())
                }
                Err(error) => {
                    entry.error = Some(error.clone());
                    QueryEvent::Failed(key.clone())
                }
            }
        };
        self.emit(event);
    }
}

enum Begin<T> {
    Ready(QueryState<T>),
    Wait(InFlight),
}

/// Process-wide store of query results.
///
/// Cheap to clone; clones share the same entries. Pass it explicitly to
/// whatever needs cached reads. Entries idle for longer than the gc window
/// are swept on the next fetch.
#[derive(Clone)]
pub struct QueryClient {
    store: Arc<Store>,
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::with_gc_time(DEFAULT_GC_TIME)
    }
}

impl QueryClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gc_time(gc_time: Duration) -> Self {
        Self {
            store: Arc::new(Store::new(gc_time)),
        }
    }

    /// Current state for `key` without fetching
    pub fn peek<T: Send + Sync + 'static>(&self, key: &QueryKey) -> QueryState<T> {
        self.store
            .entries
            .lock()
            .get(key)
            .map(|entry| entry.state())
            .unwrap_or(QueryState::Idle)
    }

    /// Read `key`, fetching with `fetcher` unless a fresh result is cached.
    ///
    /// Concurrent reads of the same key share one request. A failed fetch is
    /// retried `options.retry` times before the failure is stored.
    pub async fn fetch<T, F, Fut>(&self, key: QueryKey, options: QueryOptions, fetcher: F) -> QueryState<T>
    where
        T: Send + Sync + 'static,
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, RequestError>> + Send + 'static,
    {
        if !options.enabled {
            return self.peek(&key);
        }

        match self.begin(&key, options, fetcher) {
            Begin::Ready(state) => state,
            Begin::Wait(in_flight) => match in_flight.await {
                Ok(data) => downcast(data),
                Err(error) => QueryState::Failure(error),
            },
        }
    }

    fn begin<T, F, Fut>(&self, key: &QueryKey, options: QueryOptions, fetcher: F) -> Begin<T>
    where
        T: Send + Sync + 'static,
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, RequestError>> + Send + 'static,
    {
        let (begin, started) = {
            let mut entries = self.store.entries.lock();
            let gc_time = self.store.gc_time;
            let before = entries.len();
            entries.retain(|k, entry| k == key || !entry.is_collectable(gc_time));
            if entries.len() < before {
                tracing::trace!(count = before - entries.len(), "collected idle queries");
            }
            let entry = entries.entry(key.clone()).or_default();

            if entry.is_fresh(options.stale_time) {
                tracing::trace!(%key, "query cache hit");
                return Begin::Ready(entry.state());
            }

            let (in_flight, started) = match entry.in_flight.clone() {
                Some(in_flight) => (in_flight, false),
                None => (self.spawn_fetch(key, entry, options.retry, fetcher), true),
            };

            let serve_stale = options.refetch == Refetch::Background
                && entry.data.is_some()
                && entry.error.is_none();
            if serve_stale {
                (Begin::Ready(entry.state()), started)
            } else {
                (Begin::Wait(in_flight), started)
            }
        };

        if started {
            tracing::debug!(%key, "fetching query");
            self.store.emit(QueryEvent::Fetching(key.clone()));
        }
        begin
    }

    fn spawn_fetch<T, F, Fut>(&self, key: &QueryKey, entry: &mut Entry, retry: u32, fetcher: F) -> InFlight
    where
        T: Send + Sync + 'static,
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, RequestError>> + Send + 'static,
    {
        let epoch = entry.epoch;
        let store = Arc::clone(&self.store);
        let task_key = key.clone();

        // spawned so the request completes and lands in the cache even if
        // every caller stops waiting for it
        let task = tokio::spawn(async move {
            let mut attempt = 0;
            let result = loop {
                match fetcher().await {
                    Ok(data) => break Ok(Arc::new(data) as Erased),
                    Err(error) if attempt < retry => {
                        attempt += 1;
                        tracing::warn!(key = %task_key, attempt, %error, "query failed, retrying");
                    }
                    Err(error) => break Err(error),
                }
            };
            store.settle(&task_key, epoch, &result);
            result
        });

        let store = Arc::clone(&self.store);
        let join_key = key.clone();
        let in_flight = async move {
            match task.await {
                Ok(result) => result,
                Err(e) => {
                    let result = Err(RequestError::new(format!("query task failed: {}", e)));
                    store.settle(&join_key, epoch, &result);
                    result
                }
            }
        }
        .boxed()
        .shared();

        entry.in_flight = Some(in_flight.clone());
        in_flight
    }

    /// Mark every entry in the `resource` family stale.
    ///
    /// Requests already in flight for those keys are detached: callers waiting
    /// on them still get the result, but it is not cached, so the next read
    /// refetches. Entries left with neither data nor an error are dropped.
    /// Returns the number of entries touched.
    pub fn invalidate(&self, resource: &str) -> usize {
        let keys: Vec<QueryKey> = {
            let mut entries = self.store.entries.lock();
            let keys: Vec<QueryKey> = entries
                .iter_mut()
                .filter(|(key, _)| key.is_in(resource))
                .map(|(key, entry)| {
                    entry.invalidated = true;
                    entry.epoch += 1;
                    entry.in_flight = None;
                    key.clone()
                })
                .collect();
            entries.retain(|key, entry| {
                !key.is_in(resource) || entry.data.is_some() || entry.error.is_some()
            });
            keys
        };

        tracing::debug!(resource, count = keys.len(), "invalidated queries");
        let count = keys.len();
        for key in keys {
            self.store.emit(QueryEvent::Invalidated(key));
        }
        count
    }

    /// Run a mutation and, if it succeeds, invalidate `invalidates`.
    ///
    /// A failed mutation leaves the cache untouched and returns the error to
    /// the caller only.
    pub async fn mutate<T, Fut>(&self, name: &str, invalidates: &[&str], mutation: Fut) -> Result<T, RequestError>
    where
        Fut: Future<Output = Result<T, RequestError>>,
    {
        match mutation.await {
            Ok(output) => {
                for resource in invalidates {
                    self.invalidate(resource);
                }
                Ok(output)
            }
            Err(error) => {
                tracing::error!("{} failed: {}", name, error);
                Err(error)
            }
        }
    }

    /// True unless `key` holds data fetched within `stale_time` and not
    /// invalidated since
    pub fn is_stale(&self, key: &QueryKey, stale_time: Duration) -> bool {
        self.store
            .entries
            .lock()
            .get(key)
            .map_or(true, |entry| !entry.is_fresh(stale_time))
    }

    pub fn subscribe(&self) -> flume::Receiver<QueryEvent> {
        let (tx, rx) = flume::unbounded();
        self.store.subscribers.lock().push(tx);
        rx
    }

    /// Drop every entry
    pub fn clear(&self) {
        self.store.entries.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.store.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for QueryClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryClient")
            .field("entries", &self.len())
            .finish()
    }
}
