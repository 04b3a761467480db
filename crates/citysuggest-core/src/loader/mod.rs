// crates/citysuggest-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (file I/O, decompression) and delegates the
//! payload to the TSV parser. The result is a plain `Vec<City>` ready for
//! [`CityRepository::load`](crate::traits::CityRepository::load).

use crate::error::Result;
use crate::model::City;
use std::path::{Path, PathBuf};
use tracing::info;

mod common_io;
mod tsv;

pub use common_io::open_stream;
pub use tsv::{parse_tsv, MIN_FIELDS};

/// Outcome of parsing a dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    pub cities: Vec<City>,
    /// Malformed rows that were dropped.
    pub skipped: usize,
}

/// Directory the bundled dataset is looked up in.
pub fn default_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

pub fn default_dataset_filename() -> &'static str {
    "cities_canada-usa.tsv"
}

pub fn default_dataset_path() -> PathBuf {
    default_data_dir().join(default_dataset_filename())
}

/// Reads and parses a dataset file (`.tsv` or `.tsv.gz`).
pub fn load_cities(path: impl AsRef<Path>) -> Result<LoadReport> {
    let path = path.as_ref();
    let reader = open_stream(path)?;
    let report = parse_tsv(reader)?;

    info!(
        path = %path.display(),
        cities = report.cities.len(),
        skipped = report.skipped,
        "loaded city dataset"
    );
    Ok(report)
}
