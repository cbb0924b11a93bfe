//! Session storage keyed by an opaque identifier.
//!
//! The selector never touches a store; callers look up a [`SketchState`]
//! snapshot, run a selection on it and, when thresholds change, `put` the new
//! snapshot back under the same key.
use super::state::SketchState;
use log::debug;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Storage capability for per-session snapshots.
pub trait SessionStore: Send + Sync {
    fn get(&self, id: &str) -> Option<Arc<SketchState>>;
    fn put(&self, id: &str, state: SketchState) -> Arc<SketchState>;
    /// Remove `id`; returns whether an entry was present.
    fn evict(&self, id: &str) -> bool;
}

/// Eviction policy of [`InMemorySessionStore`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvictionPolicy {
    /// Entries not accessed for this long are dropped.
    pub ttl: Option<Duration>,
    /// Maximum number of live entries; the least recently used one goes first.
    pub capacity: Option<usize>,
}

impl Default for EvictionPolicy {
    fn default() -> Self {
        Self {
            ttl: Some(Duration::from_secs(30 * 60)),
            capacity: Some(64),
        }
    }
}

struct Entry {
    state: Arc<SketchState>,
    last_access: Instant,
    tick: u64,
}

#[derive(Default)]
struct Inner {
    entries: HashMap<String, Entry>,
    tick: u64,
}

impl Inner {
    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    fn purge_expired(&mut self, ttl: Duration, now: Instant) {
        let before = self.entries.len();
        self.entries
            .retain(|_, e| now.saturating_duration_since(e.last_access) < ttl);
        let dropped = before - self.entries.len();
        if dropped > 0 {
            debug!("session store: expired {dropped} entries");
        }
    }

    fn evict_lru(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, e)| e.tick)
            .map(|(id, _)| id.clone());
        if let Some(id) = oldest {
            debug!("session store: evicting least recently used {id}");
            self.entries.remove(&id);
        }
    }
}

/// Process-local store with TTL and LRU capacity eviction.
pub struct InMemorySessionStore {
    policy: EvictionPolicy,
    inner: Mutex<Inner>,
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new(EvictionPolicy::default())
    }
}

impl InMemorySessionStore {
    pub fn new(policy: EvictionPolicy) -> Self {
        Self {
            policy,
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Number of stored entries, expired ones included until the next purge.
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, id: &str) -> Option<Arc<SketchState>> {
        let now = Instant::now();
        let mut inner = self.inner.lock();
        let tick = inner.next_tick();
        let expired = match inner.entries.get_mut(id) {
            None => return None,
            Some(entry) => match self.policy.ttl {
                Some(ttl) if now.saturating_duration_since(entry.last_access) >= ttl => true,
                _ => {
                    entry.last_access = now;
                    entry.tick = tick;
                    return Some(Arc::clone(&entry.state));
                }
            },
        };
        if expired {
            debug!("session store: {id} expired");
            inner.entries.remove(id);
        }
        None
    }

    fn put(&self, id: &str, state: SketchState) -> Arc<SketchState> {
        let now = Instant::now();
        let state = Arc::new(state);
        let mut inner = self.inner.lock();
        if let Some(ttl) = self.policy.ttl {
            inner.purge_expired(ttl, now);
        }
        let tick = inner.next_tick();
        inner.entries.insert(
            id.to_string(),
            Entry {
                state: Arc::clone(&state),
                last_access: now,
                tick,
            },
        );
        if let Some(capacity) = self.policy.capacity {
            while inner.entries.len() > capacity.max(1) {
                inner.evict_lru();
            }
        }
        state
    }

    fn evict(&self, id: &str) -> bool {
        self.inner.lock().entries.remove(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edges::CannyThresholds;
    use crate::image::io::GrayImageU8;

    fn state(seed: u8) -> SketchState {
        let data = (0..64u8).map(|i| i.wrapping_mul(seed)).collect();
        SketchState::new(GrayImageU8::new(8, 8, data), CannyThresholds::default())
    }

    fn unbounded() -> EvictionPolicy {
        EvictionPolicy {
            ttl: None,
            capacity: None,
        }
    }

    #[test]
    fn put_get_evict() {
        let store = InMemorySessionStore::new(unbounded());
        assert!(store.get("a").is_none());
        store.put("a", state(3));
        let got = store.get("a").expect("stored state");
        assert_eq!(got.dims(), (8, 8));
        assert!(store.evict("a"));
        assert!(!store.evict("a"));
        assert!(store.is_empty());
    }

    #[test]
    fn put_replaces_previous_revision() {
        let store = InMemorySessionStore::new(unbounded());
        let first = store.put("s", state(5));
        store.put("s", first.with_thresholds(CannyThresholds::new(1.0, 2.0)));
        assert_eq!(store.get("s").map(|s| s.revision()), Some(1));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn zero_ttl_expires_immediately() {
        let store = InMemorySessionStore::new(EvictionPolicy {
            ttl: Some(Duration::ZERO),
            capacity: None,
        });
        store.put("a", state(7));
        assert!(store.get("a").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn capacity_evicts_least_recently_used() {
        let store = InMemorySessionStore::new(EvictionPolicy {
            ttl: None,
            capacity: Some(2),
        });
        store.put("a", state(1));
        store.put("b", state(2));
        assert!(store.get("a").is_some());
        store.put("c", state(3));
        assert!(store.get("a").is_some());
        assert!(store.get("b").is_none());
        assert!(store.get("c").is_some());
    }

    #[test]
    fn store_is_shareable_across_threads() {
        let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new(unbounded()));
        let handles: Vec<_> = (0..4u8)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    let id = format!("session-{i}");
                    store.put(&id, state(i + 1));
                    store.get(&id).is_some()
                })
            })
            .collect();
        for h in handles {
            assert!(h.join().expect("thread"));
        }
    }
}
