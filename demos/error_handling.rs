//! Error handling example for demanda-rs
//!
//! This example demonstrates how load failures and empty datasets surface.

use demanda_rs::prelude::*;

fn main() {
    println!("=== demanda-rs Error Handling Example ===\n");

    println!("--- Example 1: Missing file ---");
    match DemandTable::load_from_path("does-not-exist.json") {
        Ok(table) => println!("✓ Loaded {} rows", table.len()),
        Err(e) => println!("✗ {e}"),
    }
    println!();

    println!("--- Example 2: Malformed and mis-shaped documents ---");
    for doc in ["[{", "42", r#"{"Cidade": ["LINS"], "supervisor": []}"#] {
        match DemandTable::from_str(doc) {
            Ok(table) => println!("  {doc:<40} -> {} rows", table.len()),
            Err(e) => println!("  {doc:<40} -> {e}"),
        }
    }
    println!();

    println!("--- Example 3: Outcomes handed to a front-end ---");
    let query = DemandQuery::new();
    for doc in ["[]", "[{", r#"[{"Cidade": "BAURU"}]"#] {
        let outcome = DashboardOutcome::from_load(DemandTable::from_str(doc), &query, MAP_STYLES[0]);
        match outcome {
            DashboardOutcome::Ready(d) => println!("  ready: {} demands", d.total),
            DashboardOutcome::NoData => println!("  no data"),
            DashboardOutcome::LoadFailed { message } => println!("  load failed: {message}"),
        }
    }
}
