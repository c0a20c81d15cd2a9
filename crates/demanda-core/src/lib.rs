// crates/demanda-core/src/lib.rs

//! demanda-core
//! ============
//!
//! Loads a JSON dataset of regional demand records, filters it by demand
//! number and supervisor, and derives the series a dashboard charts:
//! demands per supervisor, per classification, and per city placed on a map
//! through a fixed geocoder.
//!
//! ```no_run
//! use demanda_core::prelude::*;
//!
//! let table = DemandTable::load_from_path("rc2.json")?;
//! let query = DemandQuery::new().with_supervisors(["ana"]);
//! let dashboard = Dashboard::build(&table, &query, MAP_STYLES[0]);
//! println!("{} demands", dashboard.total);
//! # Ok::<(), demanda_core::DemandError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod aggregate;
pub mod dashboard;
pub mod error;
pub mod geocoder;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod query;

// Re-exports
pub use crate::aggregate::{CityOccurrence, ClassificationCount, SupervisorCount};
pub use crate::dashboard::{Dashboard, DashboardOutcome, MapView, MAP_STYLES};
pub use crate::error::{DemandError, Result};
pub use crate::geocoder::CityCoordinate;
pub use crate::loader::load_or_report;
pub use crate::model::{DemandRecord, DemandTable};
pub use crate::query::DemandQuery;
