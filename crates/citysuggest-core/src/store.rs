// crates/citysuggest-core/src/store.rs
use crate::error::{Result, SuggestError};
use crate::model::City;
use crate::text::{contains_folded, fold_key};
use crate::traits::CityRepository;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// In-memory city store.
///
/// The collection lives behind `RwLock<Arc<[City]>>`. Readers hold the read
/// lock only long enough to clone the `Arc`, then filter over that snapshot
/// with the lock released; `load` holds the write lock only for the pointer
/// swap.
#[derive(Debug)]
pub struct MemoryStore {
    cities: RwLock<Arc<[City]>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            cities: RwLock::new(Arc::from(Vec::new())),
        }
    }

    /// A store pre-loaded with `cities`.
    pub fn with_cities(cities: Vec<City>) -> Self {
        Self {
            cities: RwLock::new(Arc::from(cities)),
        }
    }

    pub fn len(&self) -> usize {
        self.snapshot().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn snapshot(&self) -> Result<Arc<[City]>> {
        let guard = self
            .cities
            .read()
            .map_err(|e| SuggestError::Store(format!("city store lock poisoned: {e}")))?;
        Ok(Arc::clone(&*guard))
    }
}

impl CityRepository for MemoryStore {
    fn load(&self, cities: Vec<City>) -> Result<()> {
        let count = cities.len();
        let next: Arc<[City]> = Arc::from(cities);
        {
            // The swap overwrites all state, so a poisoned lock is safe to reuse.
            let mut guard = self.cities.write().unwrap_or_else(PoisonError::into_inner);
            *guard = next;
        }
        self.cities.clear_poison();
        debug!(cities = count, "city store replaced");
        Ok(())
    }

    fn search(&self, query: &str) -> Result<Vec<City>> {
        let q = fold_key(query);
        if q.is_empty() {
            return Ok(Vec::new());
        }

        let snapshot = self.snapshot()?;
        let out: Vec<City> = snapshot
            .iter()
            .filter(|city| {
                contains_folded(&city.name, &q)
                    || contains_folded(&city.ascii_name, &q)
                    || contains_folded(&city.alt_names, &q)
            })
            .cloned()
            .collect();

        debug!(query = %q, candidates = out.len(), "store search");
        Ok(out)
    }

    fn all(&self) -> Result<Arc<[City]>> {
        self.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(id: &str, name: &str, ascii: &str, alt: &str) -> City {
        City {
            id: id.into(),
            name: name.into(),
            ascii_name: ascii.into(),
            alt_names: alt.into(),
            latitude: 45.0,
            longitude: -75.0,
            country: "CA".into(),
            admin1: "10".into(),
            population: 1000,
            timezone: "America/Montreal".into(),
        }
    }

    fn sample() -> Vec<City> {
        vec![
            city("1", "Montréal", "Montreal", "Montreal,YMQ"),
            city("2", "Québec", "Quebec", "Quebec City,Kebek"),
            city("3", "Trois-Rivières", "Trois-Rivieres", "Three Rivers"),
        ]
    }

    #[test]
    fn new_store_is_empty() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert!(store.search("mont").unwrap().is_empty());
        assert!(store.all().unwrap().is_empty());
    }

    #[test]
    fn search_matches_name_ascii_and_alt_names() {
        let store = MemoryStore::with_cities(sample());

        let by_name = store.search("québ").unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, "2");

        let by_ascii = store.search("RIVIERES").unwrap();
        assert_eq!(by_ascii.len(), 1);
        assert_eq!(by_ascii[0].id, "3");

        let by_alt = store.search("kebek").unwrap();
        assert_eq!(by_alt.len(), 1);
        assert_eq!(by_alt[0].id, "2");
    }

    #[test]
    fn search_trims_query() {
        let store = MemoryStore::with_cities(sample());
        assert_eq!(store.search("  montreal\t").unwrap().len(), 1);
    }

    #[test]
    fn blank_query_returns_nothing() {
        let store = MemoryStore::with_cities(sample());
        assert!(store.search("").unwrap().is_empty());
        assert!(store.search(" \t ").unwrap().is_empty());
    }

    #[test]
    fn search_preserves_store_order() {
        let store = MemoryStore::with_cities(sample());
        let ids: Vec<_> = store
            .search("e")
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn load_replaces_instead_of_merging() {
        let store = MemoryStore::with_cities(sample());
        store
            .load(vec![city("9", "Halifax", "Halifax", "")])
            .unwrap();

        assert_eq!(store.len(), 1);
        assert!(store.search("montreal").unwrap().is_empty());
        assert_eq!(store.search("hali").unwrap().len(), 1);
    }

    #[test]
    fn snapshot_outlives_reload() {
        let store = MemoryStore::with_cities(sample());
        let before = store.all().unwrap();
        store.load(Vec::new()).unwrap();

        assert_eq!(before.len(), 3);
        assert!(store.all().unwrap().is_empty());
    }

    #[test]
    fn stats_count_countries_and_regions() {
        let mut cities = sample();
        let mut us = city("4", "Burlington", "Burlington", "");
        us.country = "US".into();
        us.admin1 = String::new();
        cities.push(us);

        let stats = MemoryStore::with_cities(cities).stats().unwrap();
        assert_eq!(stats.cities, 4);
        assert_eq!(stats.countries, 2);
        assert_eq!(stats.regions, 1);
    }
}
