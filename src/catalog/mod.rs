//! Catalog Module
//!
//! The car catalog: the consumer of the cache regions.

mod service;

pub use service::{seed_cars, CarRegistry, CarService, BRAND_FILTER_CACHE, PRICE_FILTER_CACHE};
