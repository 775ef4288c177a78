//! API Module
//!
//! HTTP handlers and routing for the car catalog REST API.
//!
//! # Endpoints
//! - `GET /cars` - Brand or price range lookup
//! - `POST /cars` - Add a car
//! - `GET /cars/evictAllBrandFilterCache` - Clear cached brand lookups
//! - `GET /cars/evictBrandFilterCache` - Evict cached lookups for some brands
//! - `PUT /cars/updateBrandFilterCache` - Refresh cached lookups for some brands
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
