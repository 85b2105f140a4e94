//! Cache Module
//!
//! Provides a fixed-capacity in-memory cache with lazy TTL expiration and LRU
//! eviction.

mod entry;
mod lru;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use store::{Cache, LruStore};
