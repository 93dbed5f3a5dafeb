//! Memoizing TTL cache decorator.
//!
//! [`cached`] wraps a node so its fully rendered bytes are stored under a
//! key for a bounded duration. A hit replays the stored bytes and never
//! renders the wrapped subtree - including never invoking a stream
//! bridge's source factory - which is the whole point: an expensive or
//! slow subtree evaluates at most once per ttl window.
//!
//! The storage collaborator is a narrow trait so callers can back it with
//! anything keyed by string; [`MemoryCache`] is the bundled in-process
//! implementation. One store is typically shared across many concurrent
//! renders, so implementations must be safe for concurrent get/set.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::node::Node;
use crate::sink::Sink;

/// Storage contract for [`cached`].
///
/// `get` returns only fresh entries - absent and expired keys both come
/// back `None`. `set` stores the rendered bytes with their time-to-live.
pub trait CacheStorage: Send + Sync {
    /// Look up a fresh entry.
    fn get(&self, key: &str) -> Option<Arc<[u8]>>;

    /// Store rendered bytes under `key` for `ttl`.
    fn set(&self, key: &str, bytes: &[u8], ttl: Duration);
}

struct Entry {
    bytes: Arc<[u8]>,
    expires_at: Instant,
}

/// In-process cache storage: a mutex-guarded map from key to rendered
/// bytes with an expiry instant.
///
/// Known limitations, accepted by design of the decorator contract:
/// concurrent misses on one key render the subtree redundantly (no
/// single-flight), and the map only sheds entries when an expired key is
/// read again (no eviction bound).
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryCache {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently held, fresh or not.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Check whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl CacheStorage for MemoryCache {
    fn get(&self, key: &str) -> Option<Arc<[u8]>> {
        let mut entries = self.entries.lock();
        match entries.get(key) {
            Some(entry) if Instant::now() <= entry.expires_at => Some(entry.bytes.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    fn set(&self, key: &str, bytes: &[u8], ttl: Duration) {
        let entry = Entry {
            bytes: Arc::from(bytes),
            expires_at: Instant::now() + ttl,
        };
        self.entries.lock().insert(key.to_owned(), entry);
    }
}

/// Decorate `node` so its rendered bytes are memoized in `store` under
/// `key` for `ttl`.
///
/// On a hit the stored bytes are replayed (after flushing the call site's
/// pending delimiter) and `node` is dropped unevaluated. On a miss `node`
/// renders into an isolated buffer from pending `0`, any trailing pending
/// byte is flushed into the buffer before capture - cached content is
/// always a complete, self-terminating byte sequence, independent of
/// call-site state - then the bytes are stored and replayed.
pub fn cached(
    store: Arc<dyn CacheStorage>,
    key: impl Into<String>,
    ttl: Duration,
    node: Node,
) -> Node {
    let key = key.into();
    Node::from_fn(move |pending, sink| {
        if let Some(bytes) = store.get(&key) {
            log::debug!("cache hit for {:?}", key);
            sink.flush_pending(pending);
            sink.write(&bytes);
            return 0;
        }
        log::debug!("cache miss for {:?}; rendering subtree", key);
        let mut buf = Vec::new();
        {
            let mut isolated = Sink::new(&mut buf);
            let leftover = node.render(0, &mut isolated);
            isolated.flush_pending(leftover);
        }
        store.set(&key, &buf, ttl);
        sink.flush_pending(pending);
        sink.write(&buf);
        0
    })
}
