use std::collections::hash_map::Entry as MapEntry;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tokio::task::JoinError;
use tracing::debug;

/// Sessions untouched for this long start over on the next visit.
pub const DEFAULT_TTL: Duration = Duration::from_secs(12 * 60 * 60);

/// Most entries one store keeps; the least recently touched is dropped first.
pub const DEFAULT_CAPACITY: usize = 10_000;

/// Page state that lives in a [`SessionStore`].
pub trait SessionState: Send + Sync + 'static {
    /// True when the state is what a fresh visit starts with. Blank entries
    /// are dropped instead of stored.
    fn is_blank(&self) -> bool {
        false
    }
}

struct Entry<S> {
    state: S,
    touched: Instant,
}

/// Per-user page state (selections, drafts), keyed by a caller-chosen string.
///
/// Closures run under the write lock, so they must stay synchronous; remote
/// calls go through [`SessionStore::settle`].
pub struct SessionStore<S> {
    sessions: Arc<RwLock<HashMap<String, Entry<S>>>>,
    ttl: Duration,
    capacity: usize,
}

impl<S> Clone for SessionStore<S> {
    fn clone(&self) -> Self {
        Self {
            sessions: Arc::clone(&self.sessions),
            ttl: self.ttl,
            capacity: self.capacity,
        }
    }
}

impl<S> Default for SessionStore<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> SessionStore<S> {
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_TTL, DEFAULT_CAPACITY)
    }

    pub fn with_limits(ttl: Duration, capacity: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
            capacity: capacity.max(1),
        }
    }

    fn is_expired(&self, entry: &Entry<S>, now: Instant) -> bool {
        now.duration_since(entry.touched) >= self.ttl
    }

    /// Makes room for one more key: expired entries go, then the oldest if still full.
    fn make_room(&self, sessions: &mut HashMap<String, Entry<S>>, now: Instant) {
        sessions.retain(|_, entry| !self.is_expired(entry, now));
        if sessions.len() < self.capacity {
            return;
        }
        let oldest = sessions
            .iter()
            .min_by_key(|(_, entry)| entry.touched)
            .map(|(key, _)| key.clone());
        if let Some(key) = oldest {
            debug!("Session store full, dropping state for {}", key);
            sessions.remove(&key);
        }
    }
}

impl<S: SessionState + Clone> SessionStore<S> {
    /// Current state for `key`, or `init()` if the user has none yet (not stored).
    pub async fn snapshot(&self, key: &str, init: impl FnOnce() -> S) -> S {
        let sessions = self.sessions.read().await;
        match sessions.get(key) {
            Some(entry) if !self.is_expired(entry, Instant::now()) => entry.state.clone(),
            _ => init(),
        }
    }
}

impl<S: SessionState> SessionStore<S> {
    /// Mutates the state for `key`, creating it with `init()` first if needed.
    pub async fn update<R>(
        &self,
        key: &str,
        init: impl FnOnce() -> S,
        f: impl FnOnce(&mut S) -> R,
    ) -> R {
        let mut sessions = self.sessions.write().await;
        let now = Instant::now();

        if !sessions.contains_key(key) {
            self.make_room(&mut sessions, now);
        }

        let ttl = self.ttl;
        let entry = match sessions.entry(key.to_string()) {
            MapEntry::Occupied(occupied) => {
                let entry = occupied.into_mut();
                if now.duration_since(entry.touched) >= ttl {
                    debug!("Session state for {} expired, starting over", key);
                    entry.state = init();
                }
                entry
            }
            MapEntry::Vacant(vacant) => vacant.insert(Entry {
                state: init(),
                touched: now,
            }),
        };
        entry.touched = now;

        let result = f(&mut entry.state);
        if entry.state.is_blank() {
            sessions.remove(key);
        }
        result
    }

    /// Runs `call` on its own task, then applies `finish` to the state for
    /// `key`. Both steps complete even if the caller stops waiting, so a
    /// dropped request never leaves a submission marked as in flight.
    pub async fn settle<T, E, Fut, I, F>(
        &self,
        key: &str,
        init: I,
        call: Fut,
        finish: F,
    ) -> Result<Result<T, E>, JoinError>
    where
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        T: Send + Sync + 'static,
        E: Send + Sync + 'static,
        I: FnOnce() -> S + Send + 'static,
        F: FnOnce(&mut S, &Result<T, E>) + Send + 'static,
    {
        let store = self.clone();
        let key = key.to_string();
        tokio::spawn(async move {
            let result = call.await;
            store.update(&key, init, |state| finish(state, &result)).await;
            result
        })
        .await
    }
}
