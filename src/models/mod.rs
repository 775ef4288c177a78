//! Request and Response models for the catalog API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod car;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use car::Car;
pub use requests::{CarFilter, CarQuery, EvictBrandsQuery, NewCar};
pub use responses::{ErrorResponse, HealthResponse};
