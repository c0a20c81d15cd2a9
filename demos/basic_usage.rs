//! Basic usage example for demanda-rs
//!
//! This example demonstrates how to:
//! - Load a demand dataset
//! - Filter by supervisor and demand number
//! - Read the three aggregated series
//! - Geocode a city directly

use demanda_rs::prelude::*;

const DATA: &str = r##"[
    {"#": 1, "supervisor": "Ana",   "Classificação": "Iluminação", "Cidade": "BAURU"},
    {"#": 2, "supervisor": "ana",   "Classificação": "Buraco",     "Cidade": "LINS"},
    {"#": 3, "supervisor": "Bruno", "Classificação": "Iluminação", "Cidade": "BOTUCATU"},
    {"#": 4, "supervisor": "Carla", "Classificação": "Poda",       "Cidade": "ATLANTIS"}
]"##;

fn main() -> Result<()> {
    println!("=== demanda-rs Basic Usage Example ===\n");

    let table = DemandTable::from_str(DATA)?;
    println!("Loaded {} demands", table.len());
    println!("Columns: {}", table.columns().join(", "));
    println!("Supervisors: {}\n", table.supervisors().join(", "));

    println!("--- Example 1: Filter by supervisor (case-insensitive) ---");
    let query = DemandQuery::new().with_supervisors(["ANA"]);
    let filtered = query.apply(&table);
    for record in &filtered {
        println!(
            "#{} {}",
            record.demand_number().unwrap_or_default(),
            record.supervisor().unwrap_or_default()
        );
    }
    println!();

    println!("--- Example 2: Filter by demand number ---");
    let one = DemandQuery::new().with_demand_number("3").apply(&table);
    println!("Demand 3 found: {}\n", !one.is_empty());

    println!("--- Example 3: Aggregations over the whole table ---");
    for c in by_supervisor(&table) {
        println!("{:>3}  {}", c.count, c.supervisor);
    }
    for c in by_classification(&table) {
        println!("{:>3}  {}", c.count, c.classification);
    }
    for c in by_city(&table) {
        println!("{:>3}  {} ({}, {})", c.count, c.city, c.latitude, c.longitude);
    }
    println!();

    println!("--- Example 4: Geocoder ---");
    for name in ["são pedro", "Atlantis"] {
        match geocoder::lookup(name) {
            Some(c) => println!("{name}: {}, {}", c.latitude, c.longitude),
            None => println!("{name}: not a known city"),
        }
    }

    Ok(())
}
