// crates/citysuggest-core/src/scoring.rs

//! # Scoring Model
//!
//! Pure relevance scoring for a `(city, query, location)` tuple:
//!
//! ```text
//! final = 0.6 * name + 0.3 * location + 0.1 * population   (clamped to [0, 1])
//! ```
//!
//! Nothing in here fails or allocates shared state; every numeric edge case
//! (zero population, unknown location, empty strings) maps to an in-range
//! score.

use crate::model::{City, Coordinates, Location};
use crate::text::fold_key;

pub const NAME_WEIGHT: f64 = 0.6;
pub const LOCATION_WEIGHT: f64 = 0.3;
pub const POPULATION_WEIGHT: f64 = 0.1;

/// Mean Earth radius used by the haversine distance.
pub const EARTH_RADIUS_KM: f64 = 6371.0;
/// Beyond this distance a city gets no proximity credit.
pub const MAX_DISTANCE_KM: f64 = 1000.0;

/// A population of `10^POPULATION_SATURATION_LOG10` or more scores 1.0.
const POPULATION_SATURATION_LOG10: f64 = 6.0;

/// Stateless composite scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringModel;

impl ScoringModel {
    pub fn new() -> Self {
        ScoringModel
    }

    /// Weighted composite score in `[0.0, 1.0]`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use citysuggest_core::{City, Location, ScoringModel};
    ///
    /// let toronto = City {
    ///     id: "6167865".into(),
    ///     name: "Toronto".into(),
    ///     ascii_name: "Toronto".into(),
    ///     alt_names: String::new(),
    ///     latitude: 43.7,
    ///     longitude: -79.4,
    ///     country: "CA".into(),
    ///     admin1: "Ontario".into(),
    ///     population: 2_731_571,
    ///     timezone: "America/Toronto".into(),
    /// };
    ///
    /// let score = ScoringModel::new().score(&toronto, "toronto", Location::Unknown);
    /// assert!((score - 1.0).abs() < 1e-12);
    /// ```
    pub fn score(&self, city: &City, query: &str, location: Location) -> f64 {
        let name = name_score(city, query);
        let proximity = location_score(city, location);
        let population = population_score(city.population);

        let total =
            NAME_WEIGHT * name + LOCATION_WEIGHT * proximity + POPULATION_WEIGHT * population;
        total.clamp(0.0, 1.0)
    }
}

/// How well `query` matches the city's names. First matching rule wins:
///
/// | rule | score |
/// |---|---|
/// | equals name or ASCII name | 1.0 |
/// | name or ASCII name starts with query | 0.9 |
/// | name or ASCII name contains query | 0.7 |
/// | alternate names contain query | 0.5 |
/// | otherwise | 0.0 |
///
/// Comparison is on the trimmed, lower-cased query. A query that is empty
/// after trimming never matches, even a city whose name is empty.
pub fn name_score(city: &City, query: &str) -> f64 {
    let q = fold_key(query);
    if q.is_empty() {
        return 0.0;
    }

    let name = city.name.to_lowercase();
    let ascii = city.ascii_name.to_lowercase();

    if name == q || ascii == q {
        1.0
    } else if name.starts_with(&q) || ascii.starts_with(&q) {
        0.9
    } else if name.contains(&q) || ascii.contains(&q) {
        0.7
    } else if city.alt_names.to_lowercase().contains(&q) {
        0.5
    } else {
        0.0
    }
}

/// Proximity score: linear falloff from 1.0 at the query point to 0.0 at
/// [`MAX_DISTANCE_KM`]. An unknown location is neutral (1.0).
pub fn location_score(city: &City, location: Location) -> f64 {
    match location {
        Location::Unknown => 1.0,
        Location::At(origin) => {
            let distance = haversine_km(origin, city.coordinates());
            if distance.is_nan() || distance > MAX_DISTANCE_KM {
                0.0
            } else {
                1.0 - distance / MAX_DISTANCE_KM
            }
        }
    }
}

/// Logarithmic population score; 0 for an unknown (zero) population.
pub fn population_score(population: u64) -> f64 {
    if population == 0 {
        return 0.0;
    }
    ((population as f64).log10() / POPULATION_SATURATION_LOG10).min(1.0)
}

/// Great-circle distance in kilometres between two points (haversine).
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
