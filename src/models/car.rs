//! Car record served by the catalog API.

use serde::{Deserialize, Serialize};

/// A catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: i64,
    pub model: String,
    pub brand: String,
    pub horses: i32,
    pub price: f64,
}

impl Car {
    pub fn new(
        id: i64,
        model: impl Into<String>,
        brand: impl Into<String>,
        horses: i32,
        price: f64,
    ) -> Self {
        Self {
            id,
            model: model.into(),
            brand: brand.into(),
            horses,
            price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_serializes_camel_case() {
        let car = Car::new(1, "Astra", "Opel", 100, 18000.0);
        let json = serde_json::to_value(&car).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["brand"], "Opel");
        assert_eq!(json["horses"], 100);
        assert_eq!(json["price"], 18000.0);
    }
}
