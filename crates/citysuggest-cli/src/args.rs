use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for citysuggest
#[derive(Debug, Parser)]
#[command(
    name = "citysuggest",
    version,
    about = "Query the citysuggest-core city autocomplete engine"
)]
pub struct CliArgs {
    /// Path to the cities TSV dump (.tsv or .tsv.gz). Defaults to the bundled dataset.
    #[arg(short = 'd', long = "data", env = "CITYSUGGEST_DATA", global = true)]
    pub data: Option<PathBuf>,

    /// Log at debug level (RUST_LOG still takes precedence)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Ranked suggestions for a partial city name, printed as JSON
    Suggest {
        /// Partial city name (case-insensitive)
        query: String,

        /// Caller latitude in degrees
        #[arg(long, requires = "longitude", allow_hyphen_values = true)]
        latitude: Option<f64>,

        /// Caller longitude in degrees
        #[arg(long, requires = "latitude", allow_hyphen_values = true)]
        longitude: Option<f64>,

        /// Pretty-print the JSON document
        #[arg(long)]
        pretty: bool,
    },

    /// List raw substring matches, unranked
    Search {
        /// Substring to search (case-insensitive)
        query: String,
    },

    /// Show a summary of the loaded dataset
    Stats,

    /// Dump every loaded city as JSON lines
    Export,
}
