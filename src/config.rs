//! Configuration Module
//!
//! Handles loading server settings and the static cache region list from
//! environment variables.

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::catalog::{BRAND_FILTER_CACHE, PRICE_FILTER_CACHE};
use crate::error::ConfigurationError;

// == Region Config ==
/// Static configuration for one cache region.
///
/// Serialized as `{"name": ..., "maxEntries": ..., "ttlSeconds": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionConfig {
    /// Unique region name
    pub name: String,
    /// Maximum number of entries held at once
    pub max_entries: usize,
    /// Entry lifetime after write, 0 disables expiry
    pub ttl_seconds: u64,
}

impl RegionConfig {
    pub fn new(name: impl Into<String>, max_entries: usize, ttl_seconds: u64) -> Self {
        Self {
            name: name.into(),
            max_entries,
            ttl_seconds,
        }
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }
}

/// Regions used by the car catalog when `CACHE_REGIONS` is not set.
pub fn default_regions() -> Vec<RegionConfig> {
    vec![
        RegionConfig::new(BRAND_FILTER_CACHE, 1, 10),
        RegionConfig::new(PRICE_FILTER_CACHE, 3, 2),
    ]
}

/// Parses a JSON array of region configurations.
pub fn parse_regions(json: &str) -> Result<Vec<RegionConfig>, ConfigurationError> {
    serde_json::from_str(json).map_err(|e| ConfigurationError::Malformed(e.to_string()))
}

// == Config ==
/// Server configuration parameters.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// Cache regions to register at startup
    pub regions: Vec<RegionConfig>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 1)
    /// - `CACHE_REGIONS` - JSON array of `{name, maxEntries, ttlSeconds}`
    ///   (default: `brandFilterCache` 1 entry / 10s, `priceFilterCache` 3 entries / 2s)
    ///
    /// Unparseable numbers fall back to their defaults; a malformed region
    /// list is an error.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        let regions = match env::var("CACHE_REGIONS") {
            Ok(json) => parse_regions(&json)?,
            Err(_) => default_regions(),
        };

        Ok(Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1),
            regions,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            cleanup_interval: 1,
            regions: default_regions(),
        }
    }
}
