//! Request DTOs for the catalog API
//!
//! Defines query strings and bodies accepted by the car endpoints.

use serde::Deserialize;

use crate::models::Car;

// == Car Query ==
/// Query string for `GET /cars`.
///
/// Either `brand` or both `minPrice` and `maxPrice` must be given.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarQuery {
    pub brand: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

/// Validated form of [`CarQuery`].
#[derive(Debug, Clone, PartialEq)]
pub enum CarFilter {
    Brand(String),
    Price { min: f64, max: f64 },
}

impl CarQuery {
    /// Resolves the query into a single filter.
    ///
    /// Returns an error message if no filter, both filters, or only one price
    /// bound is given, or if the price range is inverted.
    pub fn filter(&self) -> Result<CarFilter, String> {
        match (&self.brand, self.min_price, self.max_price) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => {
                Err("Filter by either brand or price range, not both".to_string())
            }
            (Some(brand), None, None) => {
                if brand.trim().is_empty() {
                    Err("Brand cannot be empty".to_string())
                } else {
                    Ok(CarFilter::Brand(brand.clone()))
                }
            }
            (None, Some(min), Some(max)) => {
                if !min.is_finite() || !max.is_finite() {
                    Err("Price bounds must be finite numbers".to_string())
                } else if min > max {
                    Err(format!("minPrice {} exceeds maxPrice {}", min, max))
                } else {
                    Ok(CarFilter::Price { min, max })
                }
            }
            (None, Some(_), None) | (None, None, Some(_)) => {
                Err("Both minPrice and maxPrice are required".to_string())
            }
            (None, None, None) => Err("Specify brand or minPrice and maxPrice".to_string()),
        }
    }
}

// == Evict Brands Query ==
/// Query string for `GET /cars/evictBrandFilterCache`, e.g. `brands=Opel,VW`.
#[derive(Debug, Clone, Deserialize)]
pub struct EvictBrandsQuery {
    pub brands: String,
}

impl EvictBrandsQuery {
    /// Comma-separated brands, trimmed, with empty items dropped.
    pub fn brand_list(&self) -> Vec<String> {
        self.brands
            .split(',')
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .map(str::to_string)
            .collect()
    }
}

// == New Car ==
/// Request body for `POST /cars`. Any supplied `id` is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCar {
    #[serde(default)]
    pub id: Option<i64>,
    pub model: String,
    pub brand: String,
    pub horses: i32,
    pub price: f64,
}

impl NewCar {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.model.trim().is_empty() {
            return Some("Model cannot be empty".to_string());
        }
        if self.brand.trim().is_empty() {
            return Some("Brand cannot be empty".to_string());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Some("Price must be a non-negative number".to_string());
        }
        None
    }

    /// Converts into a record; the id is assigned by the catalog.
    pub fn into_car(self) -> Car {
        Car::new(0, self.model, self.brand, self.horses, self.price)
    }
}
