//! Region Cache - named, bounded TTL cache regions
//!
//! Each region holds at most a fixed number of entries, expires entries a
//! fixed time after they are written, and evicts the oldest write on overflow.
//! A registry resolves regions by name, and a small car catalog served over
//! HTTP consumes them through read-through lookups and explicit invalidation.

pub mod api;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{CacheKey, CacheRegion, CacheRegistry};
pub use config::Config;
pub use error::{CacheError, ConfigurationError};
pub use tasks::spawn_cleanup_task;
