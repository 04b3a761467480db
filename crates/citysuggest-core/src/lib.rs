// crates/citysuggest-core/src/lib.rs

//! # citysuggest-core
//!
//! City-name autocomplete: an in-memory city store, a substring candidate
//! filter and a multi-factor relevance score (name match, proximity,
//! population).
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use citysuggest_core::{loader, CityRepository, Location, MemoryStore, SuggestionService};
//!
//! # fn main() -> citysuggest_core::Result<()> {
//! let report = loader::load_cities(loader::default_dataset_path())?;
//! let store = Arc::new(MemoryStore::new());
//! store.load(report.cities)?;
//!
//! let service = SuggestionService::new(store);
//! let result = service.suggest("londo", Location::Unknown)?;
//! for s in &result.suggestions {
//!     println!("{} ({:.2})", s.name, s.score);
//! }
//! # Ok(())
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod error;
pub mod loader;
pub mod model;
pub mod scoring;
pub mod service;
pub mod store;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::DbStats;
pub use crate::error::{Result, SuggestError};
pub use crate::model::{City, Coordinates, Location, ScoredCity, SuggestionResult};
pub use crate::scoring::ScoringModel;
pub use crate::service::{SuggestionService, MAX_SUGGESTIONS};
pub use crate::store::MemoryStore;
pub use crate::traits::CityRepository;
