// crates/demanda-core/src/error.rs
use thiserror::Error;

/// Everything that can go wrong while turning an input file into a
/// [`DemandTable`](crate::DemandTable).
///
/// Filtering and aggregation never fail; only loading does.
#[derive(Debug, Error)]
pub enum DemandError {
    /// The dataset file does not exist or cannot be opened.
    #[error("{0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Valid JSON, but not a shape we can read as a table.
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, DemandError>;
