// crates/citysuggest-core/src/service.rs
use crate::error::Result;
use crate::model::{City, Location, ScoredCity, SuggestionResult};
use crate::scoring::ScoringModel;
use crate::traits::CityRepository;
use std::sync::Arc;
use tracing::debug;

/// Maximum number of entries in a suggestion response.
pub const MAX_SUGGESTIONS: usize = 5;

/// Orchestrates search, scoring, ranking and formatting.
///
/// The service shares its store through an `Arc`, so one instance (or
/// clones of it) can serve any number of request threads.
#[derive(Debug)]
pub struct SuggestionService<R: CityRepository + ?Sized> {
    repo: Arc<R>,
    scoring: ScoringModel,
}

impl<R: CityRepository + ?Sized> Clone for SuggestionService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            scoring: self.scoring,
        }
    }
}

impl<R: CityRepository + ?Sized> SuggestionService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            repo,
            scoring: ScoringModel::new(),
        }
    }

    /// The store this service reads from.
    pub fn repository(&self) -> &Arc<R> {
        &self.repo
    }

    /// Ranked suggestions for `query`, at most [`MAX_SUGGESTIONS`] of them.
    ///
    /// Candidates scoring `<= 0` are dropped. Ordering is by descending
    /// score; equal scores keep the store's order. A store failure is
    /// returned as-is and no partial result is produced.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use citysuggest_core::{City, Location, MemoryStore, SuggestionService};
    ///
    /// let city = |name: &str, admin1: &str, country: &str, population| City {
    ///     id: name.into(),
    ///     name: name.into(),
    ///     ascii_name: name.into(),
    ///     alt_names: String::new(),
    ///     latitude: 43.7,
    ///     longitude: -79.4,
    ///     country: country.into(),
    ///     admin1: admin1.into(),
    ///     population,
    ///     timezone: String::new(),
    /// };
    /// let store = MemoryStore::with_cities(vec![
    ///     city("Toronto Hills", "", "US", 0),
    ///     city("Toronto", "Ontario", "CA", 2_731_571),
    /// ]);
    ///
    /// let service = SuggestionService::new(Arc::new(store));
    /// let result = service.suggest("toronto", Location::Unknown).unwrap();
    ///
    /// assert_eq!(result.suggestions[0].name, "Toronto, Ontario, CA");
    /// assert_eq!(result.suggestions[1].name, "Toronto Hills, US");
    /// ```
    pub fn suggest(&self, query: &str, location: Location) -> Result<SuggestionResult> {
        let candidates = self.repo.search(query)?;
        let candidate_count = candidates.len();

        let mut scored: Vec<(f64, City)> = candidates
            .into_iter()
            .map(|city| (self.scoring.score(&city, query, location), city))
            .filter(|(score, _)| *score > 0.0)
            .collect();

        // `sort_by` is stable: ties stay in store order.
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored.truncate(MAX_SUGGESTIONS);

        let suggestions: Vec<ScoredCity> = scored
            .into_iter()
            .map(|(score, city)| ScoredCity {
                name: city.display_name(),
                latitude: city.latitude,
                longitude: city.longitude,
                score,
            })
            .collect();

        debug!(
            query,
            candidates = candidate_count,
            returned = suggestions.len(),
            "suggestions computed"
        );

        Ok(SuggestionResult { suggestions })
    }

    /// Same as [`suggest`](Self::suggest) with loose coordinates; a location
    /// is only used when both parts are present.
    pub fn get_suggestions(
        &self,
        query: &str,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<SuggestionResult> {
        self.suggest(query, Location::from_parts(latitude, longitude))
    }
}
