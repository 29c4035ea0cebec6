//! Query cache: fresh results and in-flight request sharing.
//!
//! Settled outcomes that are not errors (data or not-found) are kept per
//! [`CacheKey`] and served without a request while younger than the
//! freshness window. Requests for a key that is already being fetched join
//! the existing future instead of starting another one. Errors are never
//! stored, so the next lookup after a failure always hits the network.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use futures_util::future::{BoxFuture, FutureExt, Shared};
use srl_model::{CacheKey, FetchError, Payload, StudentId};
use tokio::time::Instant;

/// A finished fetch: the final outcome and how many requests it took.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome {
    pub outcome: Result<Payload, FetchError>,
    /// Zero when served from the cache.
    pub attempts: u32,
}

/// A fetch that any number of callers can await.
pub type SharedFetch = Shared<BoxFuture<'static, FetchOutcome>>;

struct Entry {
    payload: Payload,
    fetched_at: Instant,
}

struct InFlight {
    id: u64,
    future: SharedFetch,
}

#[derive(Default)]
struct CacheState {
    settled: HashMap<CacheKey, Entry>,
    in_flight: HashMap<CacheKey, InFlight>,
    next_id: u64,
}

impl CacheState {
    /// Drop settled entries older than `freshness`, returning how many went.
    fn prune(&mut self, freshness: Duration) -> usize {
        let before = self.settled.len();
        self.settled
            .retain(|_, entry| entry.fetched_at.elapsed() < freshness);
        before - self.settled.len()
    }
}

/// Cache of settled results keyed by endpoint scope and student.
///
/// Cloning is cheap and clones share the same storage.
#[derive(Clone)]
pub struct QueryCache {
    state: Arc<Mutex<CacheState>>,
    freshness: Duration,
}

impl fmt::Debug for QueryCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("QueryCache")
            .field("freshness", &self.freshness)
            .field("settled", &state.settled.len())
            .field("in_flight", &state.in_flight.len())
            .finish()
    }
}

impl QueryCache {
    #[must_use]
    pub fn new(freshness: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(CacheState::default())),
            freshness,
        }
    }

    #[must_use]
    pub fn freshness(&self) -> Duration {
        self.freshness
    }

    fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The cached payload for `key`, if it is still fresh.
    ///
    /// Stale entries are dropped on the way.
    pub fn lookup_fresh(&self, key: &CacheKey) -> Option<Payload> {
        let mut state = self.lock();
        let entry = state.settled.get(key)?;
        if entry.fetched_at.elapsed() < self.freshness {
            return Some(entry.payload.clone());
        }
        state.settled.remove(key);
        None
    }

    /// Drop every settled entry that is no longer fresh.
    ///
    /// Returns the number of entries removed.
    pub fn prune_stale(&self) -> usize {
        self.lock().prune(self.freshness)
    }

    /// Join the in-flight fetch for `key`, or start one with `start`.
    ///
    /// The returned future settles the cache when it completes: the
    /// in-flight slot is released and a successful outcome is stored, unless
    /// the key was invalidated in the meantime. Starting a fetch also evicts
    /// stale entries, so the cache holds at most what is still fresh plus
    /// what is in flight.
    pub fn join_or_start<F>(&self, key: CacheKey, start: F) -> SharedFetch
    where
        F: FnOnce() -> BoxFuture<'static, FetchOutcome>,
    {
        let mut state = self.lock();
        if let Some(in_flight) = state.in_flight.get(&key) {
            tracing::debug!(%key, "joining in-flight request");
            return in_flight.future.clone();
        }

        let evicted = state.prune(self.freshness);
        if evicted > 0 {
            tracing::debug!(evicted, "evicted stale cache entries");
        }

        let id = state.next_id;
        state.next_id += 1;

        let work = start();
        let shared_state = Arc::clone(&self.state);
        let future = async move {
            let outcome = work.await;
            let mut state = shared_state.lock().unwrap_or_else(PoisonError::into_inner);
            let still_current = state
                .in_flight
                .get(&key)
                .is_some_and(|in_flight| in_flight.id == id);
            if still_current {
                state.in_flight.remove(&key);
                if let Ok(payload) = &outcome.outcome {
                    state.settled.insert(
                        key,
                        Entry {
                            payload: payload.clone(),
                            fetched_at: Instant::now(),
                        },
                    );
                }
            }
            outcome
        }
        .boxed()
        .shared();

        state.in_flight.insert(
            key,
            InFlight {
                id,
                future: future.clone(),
            },
        );
        future
    }

    /// Forget everything cached or in flight for `student`.
    ///
    /// Fetches already running complete for their callers but no longer
    /// populate the cache.
    pub fn invalidate_student(&self, student: StudentId) {
        let mut state = self.lock();
        state.settled.retain(|key, _| key.student != student);
        state.in_flight.retain(|key, _| key.student != student);
        tracing::debug!(%student, "cache invalidated");
    }

    /// Forget everything.
    pub fn clear(&self) {
        let mut state = self.lock();
        state.settled.clear();
        state.in_flight.clear();
    }

    /// Number of settled entries, fresh or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().settled.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of fetches currently in flight.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.lock().in_flight.len()
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_FRESHNESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use srl_model::Category;

    fn key(id: u64) -> CacheKey {
        Category::Payment
            .descriptor()
            .cache_key(StudentId::new(id).unwrap())
    }

    fn ready(outcome: Result<Payload, FetchError>) -> BoxFuture<'static, FetchOutcome> {
        async move {
            FetchOutcome {
                outcome,
                attempts: 1,
            }
        }
        .boxed()
    }

    #[tokio::test]
    async fn test_success_is_stored() {
        let cache = QueryCache::default();
        let payload = Payload::Found(json!({"amount": 500}));
        let expected = payload.clone();

        let outcome = cache.join_or_start(key(1), || ready(Ok(payload))).await;

        assert_eq!(outcome.outcome, Ok(expected.clone()));
        assert_eq!(cache.lookup_fresh(&key(1)), Some(expected));
        assert_eq!(cache.in_flight(), 0);
    }

    #[tokio::test]
    async fn test_not_found_is_stored() {
        let cache = QueryCache::default();
        cache
            .join_or_start(key(1), || ready(Ok(Payload::NotFound)))
            .await;
        assert_eq!(cache.lookup_fresh(&key(1)), Some(Payload::NotFound));
    }

    #[tokio::test]
    async fn test_error_is_not_stored() {
        let cache = QueryCache::default();
        let outcome = cache
            .join_or_start(key(1), || {
                ready(Err(FetchError::Transport("refused".to_string())))
            })
            .await;
        assert!(outcome.outcome.is_err());
        assert!(cache.is_empty());
        assert_eq!(cache.in_flight(), 0);
    }

    #[tokio::test]
    async fn test_invalidate_only_touches_student() {
        let cache = QueryCache::default();
        cache
            .join_or_start(key(1), || ready(Ok(Payload::NotFound)))
            .await;
        cache
            .join_or_start(key(2), || ready(Ok(Payload::NotFound)))
            .await;

        cache.invalidate_student(StudentId::new(1).unwrap());

        assert_eq!(cache.lookup_fresh(&key(1)), None);
        assert_eq!(cache.lookup_fresh(&key(2)), Some(Payload::NotFound));

        cache.clear();
        assert!(cache.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_prune_stale_drops_expired_entries() {
        let cache = QueryCache::new(Duration::from_secs(60));
        cache
            .join_or_start(key(1), || ready(Ok(Payload::NotFound)))
            .await;
        tokio::time::advance(Duration::from_secs(30)).await;
        cache
            .join_or_start(key(2), || ready(Ok(Payload::NotFound)))
            .await;
        assert_eq!(cache.prune_stale(), 0);

        tokio::time::advance(Duration::from_secs(31)).await;
        assert_eq!(cache.prune_stale(), 1);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.lookup_fresh(&key(2)), Some(Payload::NotFound));
    }

    #[tokio::test]
    async fn test_invalidated_in_flight_does_not_populate() {
        let cache = QueryCache::default();
        let pending = cache.join_or_start(key(1), || ready(Ok(Payload::NotFound)));
        cache.invalidate_student(StudentId::new(1).unwrap());

        let outcome = pending.await;

        assert_eq!(outcome.outcome, Ok(Payload::NotFound));
        assert!(cache.is_empty());
    }
}
