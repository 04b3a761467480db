// crates/citysuggest-core/src/traits.rs
use crate::common::DbStats;
use crate::error::Result;
use crate::model::City;
use std::sync::Arc;

/// Storage abstraction for the city collection.
///
/// The scoring model and the suggestion service only talk to this trait, so
/// an indexed or persistent backend can replace [`MemoryStore`] without
/// touching either of them.
///
/// Implementors must be safe to share across request threads: many
/// concurrent readers, an occasional exclusive `load`.
///
/// [`MemoryStore`]: crate::store::MemoryStore
pub trait CityRepository: Send + Sync {
    /// Replaces the entire collection.
    ///
    /// Readers running concurrently observe either the previous set or the
    /// new one in full, never a mix.
    fn load(&self, cities: Vec<City>) -> Result<()>;

    /// Candidate filter: every city whose name, ASCII name or alternate-names
    /// field contains the trimmed query, case-insensitively.
    ///
    /// An empty or whitespace-only query yields no candidates. No ranking is
    /// applied; results come back in store order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use citysuggest_core::{City, CityRepository, MemoryStore};
    ///
    /// let store = MemoryStore::new();
    /// store.load(vec![City {
    ///     id: "6167865".into(),
    ///     name: "Toronto".into(),
    ///     ascii_name: "Toronto".into(),
    ///     alt_names: "YTO,Toronto".into(),
    ///     latitude: 43.70011,
    ///     longitude: -79.4163,
    ///     country: "CA".into(),
    ///     admin1: "08".into(),
    ///     population: 4_612_191,
    ///     timezone: "America/Toronto".into(),
    /// }]).unwrap();
    ///
    /// assert_eq!(store.search("  TOR ").unwrap().len(), 1);
    /// assert!(store.search("   ").unwrap().is_empty());
    /// ```
    fn search(&self, query: &str) -> Result<Vec<City>>;

    /// The full current collection.
    fn all(&self) -> Result<Arc<[City]>>;

    /// Counts over the current collection.
    fn stats(&self) -> Result<DbStats> {
        Ok(DbStats::from_cities(&self.all()?))
    }
}

impl<R: CityRepository + ?Sized> CityRepository for Arc<R> {
    fn load(&self, cities: Vec<City>) -> Result<()> {
        (**self).load(cities)
    }

    fn search(&self, query: &str) -> Result<Vec<City>> {
        (**self).search(query)
    }

    fn all(&self) -> Result<Arc<[City]>> {
        (**self).all()
    }
}
