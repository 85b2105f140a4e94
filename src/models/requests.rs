//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming HTTP requests and how raw JSON bodies
//! are validated into them.

use std::time::Duration;

use serde_json::{Map, Value};

use crate::error::{CacheError, Result};

/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Query string for the GET operation (GET /get?key=...)
#[derive(Debug, Clone, Default)]
pub struct GetQuery {
    pub key: Option<String>,
}

impl GetQuery {
    /// Builds the query from decoded pairs. A repeated `key` keeps its first
    /// value and other parameters are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let key = pairs
            .into_iter()
            .find_map(|(name, value)| (name == "key").then_some(value));
        Self { key }
    }

    /// Returns the requested key, rejecting a missing or empty one.
    pub fn into_key(self) -> Result<String> {
        match self.key {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(CacheError::InvalidRequest(
                "missing key parameter".to_string(),
            )),
        }
    }
}

/// Validated body of the SET operation (POST /set)
///
/// # Fields
/// - `key`: The cache key to store the value under
/// - `value`: Any JSON value, `null` included
/// - `expiration`: Optional TTL, `None` if the body carried none
#[derive(Debug, Clone, PartialEq)]
pub struct SetRequest {
    /// The cache key
    pub key: String,
    /// The value to store
    pub value: Value,
    /// TTL taken from the `expiration` field
    pub expiration: Option<Duration>,
}

impl SetRequest {
    /// Validates a decoded JSON object into a request.
    ///
    /// `expiration` must be a number of seconds; the fractional part is
    /// dropped and negative values clamp to zero.
    pub fn from_body(mut body: Map<String, Value>) -> Result<Self> {
        let key = match body.remove("key") {
            Some(Value::String(key)) => key,
            Some(_) => return Err(invalid("key must be a string")),
            None => return Err(invalid("missing key in request body")),
        };
        if key.is_empty() {
            return Err(invalid("key cannot be empty"));
        }
        if key.len() > MAX_KEY_LENGTH {
            return Err(CacheError::InvalidRequest(format!(
                "key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            )));
        }

        let value = body
            .remove("value")
            .ok_or_else(|| invalid("missing value in request body"))?;

        let expiration = match body.remove("expiration") {
            None => None,
            Some(Value::Number(secs)) => {
                let secs = secs
                    .as_f64()
                    .ok_or_else(|| invalid("invalid expiration format"))?;
                Some(Duration::from_secs(secs.max(0.0).trunc() as u64))
            }
            Some(_) => return Err(invalid("invalid expiration format")),
        };

        Ok(Self {
            key,
            value,
            expiration,
        })
    }

    /// Returns the TTL to store with, falling back to `default_ttl` when the
    /// request carried no expiration.
    pub fn ttl(&self, default_ttl: Option<Duration>) -> Option<Duration> {
        self.expiration.or(default_ttl)
    }
}

fn invalid(msg: &str) -> CacheError {
    CacheError::InvalidRequest(msg.to_string())
}
