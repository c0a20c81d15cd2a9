// crates/demanda-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (file I/O, optional gzip) and normalizes the
//! two JSON layouts a tabular dataset can arrive in:
//!
//! - **rows**: `[{"#": 1, "supervisor": "Ana"}, ...]`
//! - **columns**: `{"#": [1, ...], "supervisor": ["Ana", ...]}`, or with each
//!   column keyed by row label, `{"#": {"0": 1, ...}, ...}`
//!
//! Both end up as the same row-oriented [`DemandTable`].

use crate::error::{DemandError, Result};
use crate::model::{DemandRecord, DemandTable};
use serde_json::{Map, Value};
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, error, info};

mod common_io;

pub use common_io::open_stream;

/// Environment variable consulted by the CLI for the dataset path.
pub const INPUT_ENV_VAR: &str = "DEMANDA_INPUT";

impl DemandTable {
    pub fn default_dataset_filename() -> &'static str {
        "rc2.json"
    }

    /// Parses a JSON document held in memory.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let doc: Value = serde_json::from_slice(bytes)?;
        Self::from_json(doc)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let doc: Value = serde_json::from_reader(reader)?;
        Self::from_json(doc)
    }

    /// Loads a dataset file. Paths ending in `.gz` are decompressed on the fly.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = open_stream(path)?;
        let table = Self::from_reader(reader)?;
        info!(path = %path.display(), rows = table.len(), "dataset loaded");
        Ok(table)
    }

    /// Normalizes an already parsed document into a table.
    pub fn from_json(doc: Value) -> Result<Self> {
        let records = match doc {
            Value::Array(rows) => from_rows(rows)?,
            Value::Object(columns) => from_columns(columns)?,
            other => {
                return Err(DemandError::InvalidData(format!(
                    "expected an array of records or an object of columns, found {}",
                    kind(&other)
                )))
            }
        };
        Ok(Self::new(records))
    }
}

impl FromStr for DemandTable {
    type Err = DemandError;

    fn from_str(text: &str) -> Result<Self> {
        let doc: Value = serde_json::from_str(text)?;
        Self::from_json(doc)
    }
}

/// Loads `path`, reporting any failure through `tracing` instead of
/// returning it.
///
/// `None` means "no data": the caller skips everything downstream. An empty
/// file is *not* a failure and comes back as `Some` of an empty table.
pub fn load_or_report(path: impl AsRef<Path>) -> Option<DemandTable> {
    let path = path.as_ref();
    match DemandTable::load_from_path(path) {
        Ok(table) => Some(table),
        Err(e) => {
            error!(path = %path.display(), error = %e, "failed to load dataset");
            None
        }
    }
}

fn from_rows(rows: Vec<Value>) -> Result<Vec<DemandRecord>> {
    debug!(rows = rows.len(), "reading row-oriented dataset");
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| match row {
            Value::Object(fields) => Ok(DemandRecord::new(fields)),
            other => Err(DemandError::InvalidData(format!(
                "row {i} is {}, expected an object",
                kind(&other)
            ))),
        })
        .collect()
}

fn from_columns(columns: Map<String, Value>) -> Result<Vec<DemandRecord>> {
    debug!(columns = columns.len(), "reading column-oriented dataset");
    if columns.values().all(Value::is_array) {
        positional_columns(columns)
    } else if columns.values().all(Value::is_object) {
        labelled_columns(columns)
    } else {
        Err(DemandError::InvalidData(
            "columns must all be arrays or all be objects keyed by row label".into(),
        ))
    }
}

fn positional_columns(columns: Map<String, Value>) -> Result<Vec<DemandRecord>> {
    let mut cols: Vec<(String, Vec<Value>)> = Vec::with_capacity(columns.len());
    for (name, values) in columns {
        if let Value::Array(values) = values {
            cols.push((name, values));
        }
    }

    let height = cols.first().map_or(0, |(_, v)| v.len());
    if let Some((name, values)) = cols.iter().find(|(_, v)| v.len() != height) {
        return Err(DemandError::InvalidData(format!(
            "column '{name}' has {} values, expected {height}",
            values.len()
        )));
    }

    let mut rows: Vec<Map<String, Value>> = (0..height).map(|_| Map::new()).collect();
    for (name, values) in cols {
        for (row, value) in rows.iter_mut().zip(values) {
            row.insert(name.clone(), value);
        }
    }
    Ok(rows.into_iter().map(DemandRecord::new).collect())
}

fn labelled_columns(columns: Map<String, Value>) -> Result<Vec<DemandRecord>> {
    let mut labels: Vec<String> = Vec::new();
    for cells in columns.values().filter_map(Value::as_object) {
        for label in cells.keys() {
            if !labels.contains(label) {
                labels.push(label.clone());
            }
        }
    }

    let records = labels
        .iter()
        .map(|label| {
            let fields = columns
                .iter()
                .map(|(name, cells)| {
                    let value = cells.get(label).cloned().unwrap_or(Value::Null);
                    (name.clone(), value)
                })
                .collect::<Map<_, _>>();
            DemandRecord::new(fields)
        })
        .collect();
    Ok(records)
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
