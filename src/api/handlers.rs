//! API Handlers
//!
//! HTTP request handlers translating requests into cache `get`/`put` calls.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use serde_json::{Map, Value};
use tracing::debug;

use crate::cache::Cache;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{GetQuery, HealthResponse, SetRequest, SetResponse};

/// Application state shared across all handlers.
///
/// The cache locks internally, so handlers share it through a plain `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache of JSON values
    pub cache: Arc<Cache<String, Value>>,
    /// TTL applied to SET requests that carry no expiration
    pub default_ttl: Option<Duration>,
}

impl AppState {
    /// Creates a new AppState around an existing cache.
    pub fn new(cache: Cache<String, Value>, default_ttl: Option<Duration>) -> Self {
        Self {
            cache: Arc::new(cache),
            default_ttl,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// # Errors
    /// Fails if the configured capacity is zero.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = Cache::new(config.max_entries)?;
        Ok(Self::new(cache, config.default_ttl()))
    }
}

/// Handler for POST /set
///
/// Stores a JSON value under a key with an optional expiration in seconds.
pub async fn set_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<SetResponse>> {
    let Json(body) = payload.map_err(|rejection| {
        debug!("Rejected SET body: {}", rejection);
        CacheError::InvalidRequest("invalid request body".to_string())
    })?;

    let req = SetRequest::from_body(body).inspect_err(|err| {
        debug!("Rejected SET request: {}", err);
    })?;

    let ttl = req.ttl(state.default_ttl);
    state.cache.put(req.key.clone(), req.value, ttl);

    Ok(Json(SetResponse::new(req.key)))
}

/// Handler for GET /get?key=...
///
/// Returns the stored value itself as the response body. When `key` is
/// repeated the first value is used.
pub async fn get_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Value>> {
    let Query(pairs) = query.map_err(|rejection| {
        debug!("Rejected GET query: {}", rejection);
        CacheError::InvalidRequest("missing key parameter".to_string())
    })?;
    let key = GetQuery::from_pairs(pairs).into_key()?;

    state
        .cache
        .get(key.as_str())
        .map(Json)
        .ok_or(CacheError::NotFound(key))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
