//! demanda — Command-line interface for demanda-core
//!
//! Loads a JSON dataset of regional demands, applies the demand-number and
//! supervisor filters, and prints either the filtered rows or one of the
//! aggregated series a dashboard charts.
//!
//! Usage examples
//! --------------
//!
//! - Show row counts and columns
//!   $ demanda stats
//!
//! - List supervisors available for filtering
//!   $ demanda supervisors
//!
//! - Rows for two supervisors (case-insensitive), as JSON
//!   $ demanda --supervisor=ana,bruno --json table
//!
//! - Demands per classification, smallest first
//!   $ demanda by-classification
//!
//! - City occurrences with coordinates for demand 42
//!   $ demanda -d 42 map
//!
//! - Full snapshot for a front-end
//!   $ demanda --map-style carto-positron dashboard
//!
//! Data source
//! -----------
//!
//! By default the CLI reads `rc2.json` from the working directory. Use
//! `--input <path>` or `DEMANDA_INPUT` to point elsewhere; `.json.gz` files
//! are decompressed on the fly. Set `RUST_LOG=info` to see what was loaded.
mod args;

use crate::args::{CliArgs, Commands, ReportCommand};
use clap::Parser;
use demanda_core::aggregate::{by_city, by_classification, by_supervisor};
use demanda_core::{load_or_report, DashboardOutcome, DemandQuery, DemandTable};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    let input_path = args.input_path();
    let query = args.query();
    debug!(input = %input_path, ?query, "starting");

    match args.command {
        Commands::Dashboard => {
            let outcome = DashboardOutcome::from_load(
                DemandTable::load_from_path(&input_path),
                &query,
                args.map_style.as_str(),
            );
            print_json(&outcome)
        }
        Commands::Report(command) => {
            // Load failures are logged by the loader; nothing else to do.
            let Some(table) = load_or_report(&input_path) else {
                eprintln!("No data loaded from {input_path}");
                return Ok(());
            };
            if table.is_empty() {
                eprintln!("Dataset {input_path} has no rows");
                return Ok(());
            }
            report(command, &table, &query, args.json)
        }
    }
}

fn report(
    command: ReportCommand,
    table: &DemandTable,
    query: &DemandQuery,
    json: bool,
) -> anyhow::Result<()> {
    let filtered = query.apply(table);

    match command {
        ReportCommand::Stats => {
            let columns = table.columns();
            if json {
                return print_json(&serde_json::json!({
                    "rows": table.len(),
                    "filtered": filtered.len(),
                    "columns": columns,
                }));
            }
            println!("Dataset statistics:");
            println!("  Rows: {}", table.len());
            println!("  Filtered rows: {}", filtered.len());
            println!("  Columns: {}", columns.join(", "));
        }

        ReportCommand::Supervisors => {
            let names = table.supervisors();
            if json {
                return print_json(&names);
            }
            for name in names {
                println!("{name}");
            }
        }

        ReportCommand::Table => {
            if json {
                return print_json(&filtered);
            }
            println!("Filtered demands: {}", filtered.len());
            for record in &filtered {
                println!("{}", serde_json::to_string(record)?);
            }
        }

        ReportCommand::BySupervisor => {
            let counts = by_supervisor(&filtered);
            if json {
                return print_json(&counts);
            }
            for c in counts {
                println!("{:>6}  {}", c.count, c.supervisor);
            }
        }

        ReportCommand::ByClassification => {
            let counts = by_classification(&filtered);
            if json {
                return print_json(&counts);
            }
            for c in counts {
                println!("{:>6}  {}", c.count, c.classification);
            }
        }

        ReportCommand::Map => {
            let cities = by_city(&filtered);
            if json {
                return print_json(&cities);
            }
            if cities.is_empty() {
                println!("No known cities among {} filtered demands", filtered.len());
            }
            for c in cities {
                println!(
                    "{:>6}  {} ({:.6}, {:.6})",
                    c.count, c.city, c.latitude, c.longitude
                );
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
