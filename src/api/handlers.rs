//! API Handlers
//!
//! HTTP request handlers for the car catalog endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::catalog::{CarRegistry, CarService};
use crate::config::Config;
use crate::error::{CacheError, ConfigurationError, Result};
use crate::models::{Car, CarFilter, CarQuery, EvictBrandsQuery, HealthResponse, NewCar};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Every configured cache region
    pub registry: Arc<CarRegistry>,
    /// Catalog service bound to its regions
    pub catalog: Arc<CarService>,
}

impl AppState {
    /// Creates a new AppState over an already populated registry.
    ///
    /// Fails if the registry lacks a region the catalog needs.
    pub fn new(registry: CarRegistry) -> std::result::Result<Self, ConfigurationError> {
        let catalog = CarService::new(&registry)?;
        Ok(Self {
            registry: Arc::new(registry),
            catalog: Arc::new(catalog),
        })
    }

    /// Creates a new AppState from configuration.
    ///
    /// Registers every configured region, then binds the catalog to them.
    pub fn from_config(config: &Config) -> std::result::Result<Self, ConfigurationError> {
        Self::new(CarRegistry::from_configs(&config.regions)?)
    }
}

/// Handler for GET /cars?brand=.. or GET /cars?minPrice=..&maxPrice=..
pub async fn list_cars_handler(
    State(state): State<AppState>,
    Query(query): Query<CarQuery>,
) -> Result<Json<Vec<Car>>> {
    let cars = match query.filter().map_err(CacheError::InvalidRequest)? {
        CarFilter::Brand(brand) => state.catalog.cars_by_brand(&brand),
        CarFilter::Price { min, max } => state.catalog.cars_by_price(min, max),
    };

    Ok(Json(cars))
}

/// Handler for GET /cars/evictAllBrandFilterCache
pub async fn evict_all_brands_handler(State(state): State<AppState>) -> StatusCode {
    state.catalog.evict_all_brands();
    StatusCode::NO_CONTENT
}

/// Handler for GET /cars/evictBrandFilterCache?brands=..
pub async fn evict_brands_handler(
    State(state): State<AppState>,
    Query(query): Query<EvictBrandsQuery>,
) -> StatusCode {
    for brand in query.brand_list() {
        state.catalog.evict_brand(&brand);
    }
    StatusCode::NO_CONTENT
}

/// Handler for PUT /cars/updateBrandFilterCache
pub async fn refresh_brands_handler(
    State(state): State<AppState>,
    Json(brands): Json<Vec<String>>,
) -> StatusCode {
    for brand in &brands {
        state.catalog.refresh_brand(brand);
    }
    StatusCode::NO_CONTENT
}

/// Handler for POST /cars
pub async fn create_car_handler(
    State(state): State<AppState>,
    Json(req): Json<NewCar>,
) -> Result<Json<Car>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    Ok(Json(state.catalog.create(req.into_car())))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
