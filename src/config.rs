//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::time::Duration;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub max_entries: usize,
    /// TTL in seconds for SET requests without `expiration`, None = never expire
    pub default_ttl: Option<u64>,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_ENTRIES` - Maximum cache entries (default: 10)
    /// - `DEFAULT_TTL` - TTL in seconds for entries without one (default: unset)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable lookup.
    ///
    /// Missing or unparseable values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            max_entries: lookup("MAX_ENTRIES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_entries),
            default_ttl: lookup("DEFAULT_TTL")
                .and_then(|v| v.parse().ok())
                .or(defaults.default_ttl),
            server_port: lookup("SERVER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
        }
    }

    /// Returns the default TTL as a Duration.
    pub fn default_ttl(&self) -> Option<Duration> {
        self.default_ttl.map(Duration::from_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_entries: 10,
            default_ttl: None,
            server_port: 8080,
        }
    }
}
