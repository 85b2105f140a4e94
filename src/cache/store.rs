//! Cache Store Module
//!
//! Main cache engine combining a key index with an arena recency list and
//! lazy TTL expiration.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tracing::debug;

use crate::cache::lru::{Handle, RecencyList};
use crate::cache::CacheEntry;
use crate::error::{CacheError, Result};

// == LRU Store ==
/// Unsynchronized LRU store with per-entry TTL.
///
/// Every key in `index` points at exactly one entry in `order` and the two
/// always have the same length. Time is passed in explicitly; [`Cache`] wraps
/// this type in a lock and supplies `Instant::now()`.
#[derive(Debug)]
pub struct LruStore<K, V> {
    /// Key -> position in the recency list
    index: HashMap<K, Handle>,
    /// Entries ordered from most to least recently used
    order: RecencyList<CacheEntry<K, V>>,
    /// Maximum number of entries allowed
    capacity: NonZeroUsize,
}

impl<K, V> LruStore<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    // == Constructor ==
    /// Creates a new store holding at most `capacity` entries.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            index: HashMap::with_capacity(capacity.get()),
            order: RecencyList::with_capacity(capacity.get()),
            capacity,
        }
    }

    // == Get ==
    /// Looks up `key` as of `now`.
    ///
    /// A live entry is moved to the front and its value cloned out. An expired
    /// entry is removed and reported as a miss.
    pub fn get_at<Q>(&mut self, key: &Q, now: Instant) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let handle = *self.index.get(key)?;
        let expired = self.order.get(handle)?.is_expired_at(now);

        if expired {
            self.index.remove(key);
            self.order.remove(handle);
            debug!("Removed expired entry on lookup");
            return None;
        }

        self.order.move_to_front(handle);
        self.order.get(handle).map(|entry| entry.value.clone())
    }

    // == Put ==
    /// Inserts or overwrites `key` as of `now`.
    ///
    /// Overwriting refreshes the value and TTL without consuming a slot.
    /// Inserting into a full store first evicts the tail, whether or not the
    /// tail has expired.
    pub fn put_at(&mut self, key: K, value: V, ttl: Option<Duration>, now: Instant) {
        if let Some(&handle) = self.index.get(&key) {
            if let Some(entry) = self.order.get_mut(handle) {
                entry.refresh(value, ttl, now);
            }
            self.order.move_to_front(handle);
            return;
        }

        if self.order.len() >= self.capacity.get() {
            if let Some(evicted) = self.order.pop_back() {
                self.index.remove(&evicted.key);
                debug!("Evicted least recently used entry");
            }
        }

        let handle = self
            .order
            .push_front(CacheEntry::new(key.clone(), value, ttl, now));
        self.index.insert(key, handle);
    }

    // == Length ==
    /// Returns the number of entries held, expired or not.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Iterates keys from most to least recently used.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.order.iter().map(|entry| &entry.key)
    }
}

// == Cache ==
/// Thread-safe fixed-capacity cache with LRU eviction and lazy TTL expiration.
///
/// A single mutex guards the index and the recency list together. `get`
/// mutates (recency, lazy removal), so there is no shared read path.
#[derive(Debug)]
pub struct Cache<K, V> {
    inner: Mutex<LruStore<K, V>>,
}

impl<K, V> Cache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    // == Constructor ==
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns [`CacheError::ZeroCapacity`] if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        let capacity = NonZeroUsize::new(capacity).ok_or(CacheError::ZeroCapacity)?;
        Ok(Self {
            inner: Mutex::new(LruStore::new(capacity)),
        })
    }

    // == Get ==
    /// Returns a clone of the value for `key` if present and not expired.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let now = Instant::now();
        self.inner.lock().get_at(key, now)
    }

    // == Put ==
    /// Stores `value` under `key`. A `ttl` of `None` never expires.
    pub fn put(&self, key: K, value: V, ttl: Option<Duration>) {
        let now = Instant::now();
        self.inner.lock().put_at(key, value, ttl, now);
    }

    // == Length ==
    /// Returns the number of entries held, including expired ones not yet
    /// looked up.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }
}
