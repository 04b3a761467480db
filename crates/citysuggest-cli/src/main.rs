//! citysuggest — Command-line interface for citysuggest-core
//!
//! Loads a cities TSV dump into the in-memory store and answers
//! autocomplete queries against it.
//!
//! Usage examples
//! --------------
//!
//! - Ranked suggestions (JSON, same document the HTTP route served)
//!   $ citysuggest suggest londo
//!   $ citysuggest suggest londo --latitude 43.0 --longitude -81.2 --pretty
//!
//! - Raw substring matches
//!   $ citysuggest search toronto
//!
//! - Dataset summary / full dump
//!   $ citysuggest stats
//!   $ citysuggest export > cities.jsonl
//!
//! Data source
//! -----------
//!
//! By default the bundled `cities_canada-usa.tsv` from `citysuggest-core`
//! is used. Point `--data` (or `CITYSUGGEST_DATA`) at another `.tsv` or
//! `.tsv.gz` file to override it.
mod args;
mod logging;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use citysuggest_core::{loader, CityRepository, Location, MemoryStore, SuggestionService};
use clap::Parser;
use std::io::{self, BufWriter, Write};
use std::sync::Arc;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    logging::init_logging(args.verbose)?;

    let data_path = args.data.unwrap_or_else(loader::default_dataset_path);
    let report = loader::load_cities(&data_path)
        .with_context(|| format!("failed to load cities from {}", data_path.display()))?;
    if report.skipped > 0 {
        info!(skipped = report.skipped, "malformed records were skipped");
    }

    let store = Arc::new(MemoryStore::new());
    store.load(report.cities)?;
    let service = SuggestionService::new(Arc::clone(&store));

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match args.command {
        Commands::Suggest {
            query,
            latitude,
            longitude,
            pretty,
        } => {
            let result = service
                .suggest(&query, Location::from_parts(latitude, longitude))
                .context("suggestion lookup failed")?;
            if pretty {
                serde_json::to_writer_pretty(&mut out, &result)?;
            } else {
                serde_json::to_writer(&mut out, &result)?;
            }
            writeln!(out)?;
        }

        Commands::Search { query } => {
            let matches = store.search(&query)?;
            if matches.is_empty() {
                writeln!(out, "No cities found matching: {query}")?;
            } else {
                for city in matches {
                    writeln!(out, "{} ({})", city.display_name(), city.id)?;
                }
            }
        }

        Commands::Stats => {
            let stats = store.stats()?;
            writeln!(out, "Dataset statistics:")?;
            writeln!(out, "  Cities: {}", stats.cities)?;
            writeln!(out, "  Countries: {}", stats.countries)?;
            writeln!(out, "  Regions: {}", stats.regions)?;
        }

        Commands::Export => {
            for city in store.all()?.iter() {
                serde_json::to_writer(&mut out, city)?;
                writeln!(out)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}
