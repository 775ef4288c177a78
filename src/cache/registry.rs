//! Cache Registry Module
//!
//! Owns every configured region and resolves them by name.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::cache::CacheRegion;
use crate::config::RegionConfig;
use crate::error::ConfigurationError;

// == Cache Registry ==
/// Name → region mapping.
///
/// Regions are registered once during setup and their configuration never
/// changes afterwards. Lookups hand out shared `Arc` handles, so consumers can
/// resolve a region once and keep it.
#[derive(Debug)]
pub struct CacheRegistry<K, V> {
    regions: HashMap<String, Arc<CacheRegion<K, V>>>,
}

impl<K, V> CacheRegistry<K, V>
where
    K: Eq + Hash + Clone + Debug,
    V: Clone,
{
    // == Constructor ==
    pub fn new() -> Self {
        Self {
            regions: HashMap::new(),
        }
    }

    /// Builds a registry from static configuration, stopping at the first error.
    pub fn from_configs(configs: &[RegionConfig]) -> Result<Self, ConfigurationError> {
        let mut registry = Self::new();
        for config in configs {
            registry.register(config.name.clone(), config.max_entries, config.ttl())?;
        }
        Ok(registry)
    }

    // == Register ==
    /// Creates a region under `name`.
    ///
    /// Fails if the name is taken or `max_entries` is zero. An existing region
    /// is never replaced.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        max_entries: usize,
        ttl: Duration,
    ) -> Result<(), ConfigurationError> {
        let name = name.into();
        if self.regions.contains_key(&name) {
            return Err(ConfigurationError::DuplicateRegion(name));
        }

        let region = CacheRegion::new(name.clone(), max_entries, ttl)?;
        info!(
            "Registered cache region '{}': max_entries={}, ttl={:?}",
            name,
            max_entries,
            region.ttl()
        );
        self.regions.insert(name, Arc::new(region));
        Ok(())
    }

    // == Region ==
    /// Returns the region registered under `name`.
    pub fn region(&self, name: &str) -> Result<Arc<CacheRegion<K, V>>, ConfigurationError> {
        self.regions
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigurationError::UnknownRegion(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.regions.contains_key(name)
    }

    /// Registered region names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    pub fn regions(&self) -> impl Iterator<Item = &Arc<CacheRegion<K, V>>> {
        self.regions.values()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    // == Purge Expired ==
    /// Purges expired entries in every region, returning the total removed.
    pub fn purge_expired(&self) -> usize {
        self.regions.values().map(|region| region.purge_expired()).sum()
    }
}

impl<K, V> Default for CacheRegistry<K, V>
where
    K: Eq + Hash + Clone + Debug,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
