//! Car Catalog Service
//!
//! Filters an in-memory car list, caching filter results in two regions.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use crate::cache::{CacheKey, CacheRegion, CacheRegistry};
use crate::cache_key;
use crate::error::ConfigurationError;
use crate::models::Car;

/// Region caching brand lookups.
pub const BRAND_FILTER_CACHE: &str = "brandFilterCache";
/// Region caching price range lookups.
pub const PRICE_FILTER_CACHE: &str = "priceFilterCache";

/// Registry type shared by the catalog and the server.
pub type CarRegistry = CacheRegistry<CacheKey, Vec<Car>>;

/// Cars loaded at startup.
pub fn seed_cars() -> Vec<Car> {
    vec![
        Car::new(1, "Astra", "Opel", 100, 18_000.0),
        Car::new(2, "Insignia", "Opel", 120, 22_000.0),
        Car::new(3, "Golf", "VW", 90, 17_000.0),
        Car::new(4, "Golf", "VW", 120, 19_000.0),
        Car::new(5, "Gallardo", "Lamborghini", 400, 100_000.0),
    ]
}

// == Car Service ==
/// Car lookups backed by the brand and price regions.
///
/// Both regions are resolved once at construction; a missing region is a
/// configuration error and the service is not created.
#[derive(Debug)]
pub struct CarService {
    cars: RwLock<Vec<Car>>,
    brand_cache: Arc<CacheRegion<CacheKey, Vec<Car>>>,
    price_cache: Arc<CacheRegion<CacheKey, Vec<Car>>>,
}

impl CarService {
    /// Creates the service over the seed cars.
    pub fn new(registry: &CarRegistry) -> Result<Self, ConfigurationError> {
        Self::with_cars(registry, seed_cars())
    }

    pub fn with_cars(registry: &CarRegistry, cars: Vec<Car>) -> Result<Self, ConfigurationError> {
        Ok(Self {
            cars: RwLock::new(cars),
            brand_cache: registry.region(BRAND_FILTER_CACHE)?,
            price_cache: registry.region(PRICE_FILTER_CACHE)?,
        })
    }

    // == Cached Lookups ==
    /// Cars priced within `[min, max]`, cached per `(min, max)` pair.
    pub fn cars_by_price(&self, min: f64, max: f64) -> Vec<Car> {
        self.price_cache
            .get_or_insert_with(cache_key!(min, max), || self.filter_by_price(min, max))
    }

    /// Cars of exactly `brand`, cached per brand.
    pub fn cars_by_brand(&self, brand: &str) -> Vec<Car> {
        self.brand_cache
            .get_or_insert_with(cache_key!(brand), || self.filter_by_brand(brand))
    }

    // == Invalidation ==
    /// Drops every cached brand lookup.
    pub fn evict_all_brands(&self) {
        info!("Evicting all entries of {}", BRAND_FILTER_CACHE);
        self.brand_cache.clear();
    }

    /// Drops the cached lookup for one brand.
    pub fn evict_brand(&self, brand: &str) {
        info!("Evicting {} entry for brand '{}'", BRAND_FILTER_CACHE, brand);
        self.brand_cache.evict(&cache_key!(brand));
    }

    /// Recomputes the lookup for `brand` and stores it unconditionally.
    pub fn refresh_brand(&self, brand: &str) -> Vec<Car> {
        let cars = self.filter_by_brand(brand);
        self.brand_cache.put(cache_key!(brand), cars.clone());
        cars
    }

    // == Create ==
    /// Appends a car with the next free id and returns it.
    ///
    /// Cached lookups are left untouched, so they may omit the new car until
    /// they expire or are evicted.
    pub fn create(&self, mut car: Car) -> Car {
        let mut cars = self.cars.write();
        car.id = cars.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        cars.push(car.clone());
        info!("Created car {} ({} {})", car.id, car.brand, car.model);
        car
    }

    pub fn len(&self) -> usize {
        self.cars.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.read().is_empty()
    }

    fn filter_by_price(&self, min: f64, max: f64) -> Vec<Car> {
        self.cars
            .read()
            .iter()
            .filter(|car| car.price >= min && car.price <= max)
            .cloned()
            .collect()
    }

    fn filter_by_brand(&self, brand: &str) -> Vec<Car> {
        self.cars
            .read()
            .iter()
            .filter(|car| car.brand == brand)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{default_regions, RegionConfig};
    use std::thread::sleep;
    use std::time::Duration;

    fn registry(brand_max: usize, price_max: usize) -> CarRegistry {
        CarRegistry::from_configs(&[
            RegionConfig::new(BRAND_FILTER_CACHE, brand_max, 0),
            RegionConfig::new(PRICE_FILTER_CACHE, price_max, 0),
        ])
        .unwrap()
    }

    fn ids(cars: &[Car]) -> Vec<i64> {
        cars.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_missing_region_is_configuration_error() {
        let registry = CarRegistry::from_configs(&[RegionConfig::new(BRAND_FILTER_CACHE, 1, 0)])
            .unwrap();

        assert_eq!(
            CarService::new(&registry).unwrap_err(),
            ConfigurationError::UnknownRegion(PRICE_FILTER_CACHE.to_string())
        );
    }

    #[test]
    fn test_filters() {
        let service = CarService::new(&registry(10, 10)).unwrap();

        assert_eq!(ids(&service.cars_by_brand("Opel")), vec![1, 2]);
        assert_eq!(ids(&service.cars_by_brand("Tesla")), Vec::<i64>::new());
        assert_eq!(ids(&service.cars_by_price(18_000.0, 20_000.0)), vec![1, 4]);
        assert_eq!(ids(&service.cars_by_price(17_000.0, 17_000.0)), vec![3]);
    }

    #[test]
    fn test_brand_lookup_served_from_cache() {
        let registry = registry(10, 10);
        let service = CarService::new(&registry).unwrap();

        assert_eq!(ids(&service.cars_by_brand("VW")), vec![3, 4]);
        service.create(Car::new(0, "Polo", "VW", 80, 15_000.0));

        // Stale until evicted
        assert_eq!(ids(&service.cars_by_brand("VW")), vec![3, 4]);
        service.evict_brand("VW");
        assert_eq!(ids(&service.cars_by_brand("VW")), vec![3, 4, 6]);

        let stats = registry.region(BRAND_FILTER_CACHE).unwrap().stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 2);
    }

    #[test]
    fn test_evict_all_brands() {
        let registry = registry(10, 10);
        let service = CarService::new(&registry).unwrap();

        service.cars_by_brand("VW");
        service.cars_by_brand("Opel");
        service.evict_all_brands();

        assert!(registry.region(BRAND_FILTER_CACHE).unwrap().is_empty());
    }

    #[test]
    fn test_refresh_brand_overwrites_cache() {
        let registry = registry(10, 10);
        let service = CarService::new(&registry).unwrap();

        service.cars_by_brand("Opel");
        service.create(Car::new(0, "Corsa", "Opel", 75, 14_000.0));

        assert_eq!(ids(&service.refresh_brand("Opel")), vec![1, 2, 6]);
        assert_eq!(ids(&service.cars_by_brand("Opel")), vec![1, 2, 6]);
    }

    #[test]
    fn test_default_brand_region_holds_one_entry() {
        let registry = CarRegistry::from_configs(&default_regions()).unwrap();
        let service = CarService::new(&registry).unwrap();

        service.cars_by_brand("Opel");
        service.cars_by_brand("VW");

        let brands = registry.region(BRAND_FILTER_CACHE).unwrap();
        assert_eq!(brands.len(), 1);
        assert!(brands.get(&cache_key!("Opel")).is_none());
        assert!(brands.get(&cache_key!("VW")).is_some());
    }

    #[test]
    fn test_price_region_expires() {
        let registry = CarRegistry::from_configs(&[
            RegionConfig::new(BRAND_FILTER_CACHE, 1, 0),
            RegionConfig::new(PRICE_FILTER_CACHE, 3, 1),
        ])
        .unwrap();
        let service = CarService::new(&registry).unwrap();
        let prices = registry.region(PRICE_FILTER_CACHE).unwrap();

        service.cars_by_price(18_000.0, 21_000.0);
        assert!(prices.get(&cache_key!(18_000.0, 21_000.0)).is_some());

        sleep(Duration::from_millis(1500));

        assert!(prices.get(&cache_key!(18_000.0, 21_000.0)).is_none());
    }

    #[test]
    fn test_create_assigns_next_id() {
        let service = CarService::with_cars(&registry(1, 1), Vec::new()).unwrap();
        assert!(service.is_empty());

        let first = service.create(Car::new(42, "Model S", "Tesla", 670, 90_000.0));
        let second = service.create(Car::new(0, "Model 3", "Tesla", 283, 40_000.0));

        assert_eq!((first.id, second.id), (1, 2));
        assert_eq!(service.len(), 2);
    }
}
