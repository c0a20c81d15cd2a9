use clap::{Parser, Subcommand};
use demanda_core::loader::INPUT_ENV_VAR;
use demanda_core::{DemandQuery, DemandTable, MAP_STYLES};

/// CLI arguments for demanda
#[derive(Debug, Parser)]
#[command(
    name = "demanda",
    version,
    about = "Filter and summarize a JSON dataset of regional demands"
)]
pub struct CliArgs {
    /// Path to the dataset (.json or .json.gz; default: rc2.json)
    #[arg(short = 'i', long = "input", env = INPUT_ENV_VAR, global = true)]
    pub input: Option<String>,

    /// Only keep the demand with this number (matched against the `#` field)
    #[arg(short = 'd', long = "demand", global = true)]
    pub demand: Option<String>,

    /// Comma-separated supervisors to keep, case-insensitive (repeatable)
    #[arg(short = 's', long = "supervisor", value_delimiter = ',', global = true)]
    pub supervisors: Vec<String>,

    /// Map style name handed to the renderer
    #[arg(long = "map-style", default_value = MAP_STYLES[0], global = true)]
    pub map_style: String,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    pub fn input_path(&self) -> String {
        self.input
            .clone()
            .unwrap_or_else(|| DemandTable::default_dataset_filename().to_string())
    }

    pub fn query(&self) -> DemandQuery {
        let supervisors = self
            .supervisors
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty());
        DemandQuery::new()
            .with_demand_number(self.demand.as_deref().unwrap_or(""))
            .with_supervisors(supervisors)
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the full dashboard snapshot as JSON
    Dashboard,

    #[command(flatten)]
    Report(ReportCommand),
}

/// Subcommands that print one view of a loaded, non-empty dataset.
#[derive(Debug, Subcommand)]
pub enum ReportCommand {
    /// Show row counts and columns
    Stats,

    /// List the distinct supervisors in the dataset
    Supervisors,

    /// Print the filtered rows
    Table,

    /// Count filtered demands per supervisor
    BySupervisor,

    /// Count filtered demands per classification (ascending)
    ByClassification,

    /// Count filtered demands per known city, with coordinates
    Map,
}
