//! Cache Module
//!
//! Named cache regions bounded by entry count and TTL, addressed through a
//! registry, with structural keys and read-through lookups.

mod entry;
mod key;
mod order;
mod region;
mod registry;
mod stats;


// Re-export public types
pub use entry::CacheEntry;
pub use key::{CacheKey, KeyPart};
pub use order::InsertionOrder;
pub use region::CacheRegion;
pub use registry::CacheRegistry;
pub use stats::CacheStats;
