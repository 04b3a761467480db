//! Error handling example for citysuggest-rs
//!
//! This example demonstrates proper error handling and edge cases

use citysuggest_rs::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== CitySuggest-RS Error Handling Example ===\n");

    // Example 1: Handling dataset load errors
    println!("--- Example 1: Loading a missing dataset ---");
    match loader::load_cities("does/not/exist.tsv") {
        Ok(report) => println!("✓ Unexpectedly loaded {} cities", report.cities.len()),
        Err(SuggestError::NotFound(msg)) => println!("✗ Not found: {msg}"),
        Err(e) => {
            eprintln!("✗ Failed to load dataset: {e}");
            return Err(e);
        }
    }
    println!();

    let report = loader::load_cities(loader::default_dataset_path())?;
    let store = Arc::new(MemoryStore::with_cities(report.cities));
    let service = SuggestionService::new(store);

    // Example 2: Blank queries are not errors, just empty
    println!("--- Example 2: Blank queries ---");
    for query in ["", "   ", "\t"] {
        let result = service.suggest(query, Location::Unknown)?;
        println!("  {query:?} -> {} suggestions", result.len());
    }
    println!();

    // Example 3: Queries with no match
    println!("--- Example 3: Queries without matches ---");
    for query in ["xyzzy", "12345"] {
        let result = service.suggest(query, Location::Unknown)?;
        println!("  {query:?} -> {} suggestions", result.len());
    }
    println!();

    // Example 4: Half a location is no location
    println!("--- Example 4: Partial coordinates ---");
    let partial = service.get_suggestions("london", Some(37.1), None)?;
    let none = service.suggest("london", Location::Unknown)?;
    println!(
        "  latitude only == no location: {}",
        partial == none
    );

    Ok(())
}
