// crates/citysuggest-core/src/loader/common_io.rs
use crate::error::{Result, SuggestError};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a dataset file as a buffered reader, transparently gunzipping
/// `*.gz` paths.
pub fn open_stream(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).map_err(|e| {
        SuggestError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    if !is_gzip_path(path) {
        return Ok(Box::new(BufReader::new(file)));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(BufReader::new(GzDecoder::new(BufReader::new(file)))))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(SuggestError::InvalidData(format!(
            "{} is gzip-compressed but the 'compact' feature is disabled",
            path.display()
        )))
    }
}

fn is_gzip_path(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}
