use citysuggest_core::{City, CityRepository, Coordinates, Location, MemoryStore, SuggestionService};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::sync::Arc;

const SYLLABLES: [&str; 8] = ["tor", "on", "van", "cou", "ver", "ham", "il", "ton"];

/// Deterministic synthetic dataset roughly the size of the Canada/USA dump.
fn synthetic_cities(n: usize) -> Vec<City> {
    (0..n)
        .map(|i| {
            let name = format!(
                "{}{}{}",
                SYLLABLES[i % 8],
                SYLLABLES[(i / 8) % 8],
                SYLLABLES[(i / 64) % 8]
            );
            City {
                id: i.to_string(),
                name: name.clone(),
                ascii_name: name.clone(),
                alt_names: format!("{name} City"),
                latitude: 25.0 + (i % 400) as f64 * 0.1,
                longitude: -125.0 + (i % 600) as f64 * 0.1,
                country: if i % 3 == 0 { "CA" } else { "US" }.to_string(),
                admin1: format!("{:02}", i % 13),
                population: (i as u64 * 7919) % 5_000_000,
                timezone: "America/Toronto".to_string(),
            }
        })
        .collect()
}

fn bench_suggest(c: &mut Criterion) {
    let store = Arc::new(MemoryStore::with_cities(synthetic_cities(7_000)));
    let service = SuggestionService::new(Arc::clone(&store));
    let here = Location::At(Coordinates::new(43.7, -79.4));

    c.bench_function("store_search_prefix", |b| {
        b.iter(|| store.search(black_box("tor")).unwrap())
    });

    c.bench_function("suggest_no_location", |b| {
        b.iter(|| service.suggest(black_box("van"), Location::Unknown).unwrap())
    });

    c.bench_function("suggest_with_location", |b| {
        b.iter(|| service.suggest(black_box("ton"), black_box(here)).unwrap())
    });
}

criterion_group!(benches, bench_suggest);
criterion_main!(benches);
