//! Workspace facade over `citysuggest-core`, used by the demos.

pub use citysuggest_core::*;

/// Everything a typical caller needs in one import.
pub mod prelude {
    pub use citysuggest_core::loader;
    pub use citysuggest_core::{
        City, CityRepository, Coordinates, Location, MemoryStore, Result, ScoredCity,
        SuggestError, SuggestionResult, SuggestionService, MAX_SUGGESTIONS,
    };
}
