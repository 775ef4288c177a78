//! API Routes
//!
//! Configures the Axum router with all catalog endpoints.

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_car_handler, evict_all_brands_handler, evict_brands_handler, health_handler,
    list_cars_handler, refresh_brands_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /cars?brand=..` / `GET /cars?minPrice=..&maxPrice=..` - Cached lookups
/// - `POST /cars` - Add a car
/// - `GET /cars/evictAllBrandFilterCache` - Clear the brand region
/// - `GET /cars/evictBrandFilterCache?brands=a,b` - Evict specific brands
/// - `PUT /cars/updateBrandFilterCache` - Recompute and store brands
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/cars", get(list_cars_handler).post(create_car_handler))
        .route("/cars/evictAllBrandFilterCache", get(evict_all_brands_handler))
        .route("/cars/evictBrandFilterCache", get(evict_brands_handler))
        .route("/cars/updateBrandFilterCache", put(refresh_brands_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
