// crates/citysuggest-core/src/error.rs
use thiserror::Error;

/// Errors surfaced by the store, the loader and the suggestion pipeline.
///
/// Scoring never produces an error; every numeric edge case has a defined
/// in-range result.
#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    NotFound(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// A store-layer fault. Propagated verbatim to callers of the service.
    #[error("search failed: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, SuggestError>;
