// crates/citysuggest-core/src/model.rs
use serde::{Deserialize, Serialize};

/// A city record as held by the store.
///
/// Records are produced once by the loader and never mutated afterwards;
/// the store hands out clones or shared snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: String,
    pub name: String,
    /// ASCII-normalized spelling of `name`.
    pub ascii_name: String,
    /// Raw comma-separated alternate names, matched as a single string.
    pub alt_names: String,
    pub latitude: f64,
    pub longitude: f64,
    /// ISO2 country code, e.g. "CA".
    pub country: String,
    /// First-level administrative region (state/province code). May be empty.
    pub admin1: String,
    pub population: u64,
    pub timezone: String,
}

impl City {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ascii_name(&self) -> &str {
        &self.ascii_name
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    /// `"Name, Admin1, Country"`, or `"Name, Country"` when the region is empty.
    pub fn display_name(&self) -> String {
        if self.admin1.is_empty() {
            format!("{}, {}", self.name, self.country)
        } else {
            format!("{}, {}, {}", self.name, self.admin1, self.country)
        }
    }
}

/// A point on the globe, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Where the caller is, if known.
///
/// `Unknown` makes location scoring a neutral pass-through rather than a
/// penalty.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Location {
    #[default]
    Unknown,
    At(Coordinates),
}

impl Location {
    /// Builds a location from loose request parameters.
    ///
    /// Both parts must be present; a lone latitude or longitude is treated
    /// as no location at all.
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Self {
        match (latitude, longitude) {
            (Some(lat), Some(lon)) => Location::At(Coordinates::new(lat, lon)),
            _ => Location::Unknown,
        }
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        match self {
            Location::At(c) => Some(*c),
            Location::Unknown => None,
        }
    }
}

impl From<Coordinates> for Location {
    fn from(c: Coordinates) -> Self {
        Location::At(c)
    }
}

/// One ranked entry of a suggestion response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCity {
    /// Display name, see [`City::display_name`].
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub score: f64,
}

/// The response document: a single top-level `suggestions` list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestionResult {
    pub suggestions: Vec<ScoredCity>,
}

impl SuggestionResult {
    pub fn len(&self) -> usize {
        self.suggestions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }
}
