//! demanda prelude: bring common types and functions into scope for demos.

#![allow(unused_imports)]

pub use crate::aggregate::{
    by_city, by_classification, by_supervisor, CityOccurrence, ClassificationCount,
    SupervisorCount,
};
pub use crate::dashboard::{Dashboard, DashboardOutcome, MapView, MAP_STYLES};
pub use crate::error::{DemandError, Result};
pub use crate::geocoder::{self, CityCoordinate};
pub use crate::loader::load_or_report;
pub use crate::model::{DemandRecord, DemandTable};
pub use crate::query::DemandQuery;
pub use std::str::FromStr;
