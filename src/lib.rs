//! LRU TTL Cache - A fixed-capacity in-memory cache server
//!
//! Provides a thread-safe cache with least-recently-used eviction and lazy
//! per-entry expiration, served over a small JSON HTTP API.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::{create_router, AppState};
pub use cache::Cache;
pub use config::Config;
pub use error::CacheError;
