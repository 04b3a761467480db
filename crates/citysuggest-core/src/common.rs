// crates/citysuggest-core/src/common.rs
use crate::model::City;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Simple aggregate statistics for a store snapshot.
///
/// Returned by [`CityRepository::stats`](crate::traits::CityRepository::stats).
/// `regions` counts distinct `(country, admin1)` pairs, ignoring cities
/// without a first-level region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub cities: usize,
    pub countries: usize,
    pub regions: usize,
}

impl DbStats {
    pub fn from_cities(cities: &[City]) -> Self {
        let countries: HashSet<&str> = cities.iter().map(|c| c.country.as_str()).collect();
        let regions: HashSet<(&str, &str)> = cities
            .iter()
            .filter(|c| !c.admin1.is_empty())
            .map(|c| (c.country.as_str(), c.admin1.as_str()))
            .collect();

        DbStats {
            cities: cities.len(),
            countries: countries.len(),
            regions: regions.len(),
        }
    }
}
