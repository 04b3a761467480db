//! Basic usage example for citysuggest-rs
//!
//! This example demonstrates how to:
//! - Load the bundled city dataset into a store
//! - Ask for suggestions with and without a caller location
//! - Inspect raw candidates and dataset statistics

use citysuggest_rs::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== CitySuggest-RS Basic Usage Example ===\n");

    println!("Loading city dataset...");
    let report = loader::load_cities(loader::default_dataset_path())?;
    println!(
        "✓ Parsed {} cities ({} skipped)\n",
        report.cities.len(),
        report.skipped
    );

    let store = Arc::new(MemoryStore::new());
    store.load(report.cities)?;
    let service = SuggestionService::new(Arc::clone(&store));

    // Example 1: Plain suggestions
    println!("--- Example 1: Suggestions for \"lon\" ---");
    let result = service.suggest("lon", Location::Unknown)?;
    for (i, s) in result.suggestions.iter().enumerate() {
        println!("{}. {} (score {:.3})", i + 1, s.name, s.score);
    }
    println!();

    // Example 2: The caller's location reorders namesakes
    println!("--- Example 2: \"london\" from Lexington, KY ---");
    let lexington = Location::At(Coordinates::new(38.04, -84.5));
    for s in service.suggest("london", lexington)?.suggestions {
        println!("- {} (score {:.3})", s.name, s.score);
    }
    println!();

    // Example 3: Raw candidates, unranked
    println!("--- Example 3: Raw candidates for \"tor\" ---");
    for city in store.search("tor")? {
        println!("- {} [{}]", city.display_name(), city.population);
    }
    println!();

    // Example 4: JSON document
    println!("--- Example 4: JSON response ---");
    let result = service.get_suggestions("toronto", Some(43.65), Some(-79.38))?;
    println!(
        "{}",
        serde_json::to_string_pretty(&result).unwrap_or_default()
    );
    println!();

    let stats = store.stats()?;
    println!(
        "Dataset: {} cities, {} countries, {} regions",
        stats.cities, stats.countries, stats.regions
    );

    Ok(())
}
