// crates/demanda-core/src/dashboard.rs

//! One pipeline run, bundled for the presentation layer.
//!
//! [`Dashboard`] is what a front-end renders: the filtered table, the three
//! chart series and the map settings. [`DashboardOutcome`] adds the two
//! states where there is nothing to render.

use crate::aggregate::{self, CityOccurrence, ClassificationCount, SupervisorCount};
use crate::error::DemandError;
use crate::geocoder::CityCoordinate;
use crate::model::DemandTable;
use crate::query::DemandQuery;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Map style identifiers offered by default. The first one is the default.
pub const MAP_STYLES: [&str; 6] = [
    "open-street-map",
    "carto-positron",
    "carto-darkmatter",
    "stamen-terrain",
    "stamen-toner",
    "stamen-watercolor",
];

/// Centre of the occurrence map, over the covered region of São Paulo state.
pub const MAP_CENTER: CityCoordinate = CityCoordinate::new(-22.8, -49.3);
pub const MAP_ZOOM: u8 = 7;

/// Map settings handed to the renderer.
///
/// `style` is passed through as given; it is not checked against
/// [`MAP_STYLES`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub style: String,
    pub center: CityCoordinate,
    pub zoom: u8,
}

impl MapView {
    pub fn new(style: impl Into<String>) -> Self {
        Self {
            style: style.into(),
            center: MAP_CENTER,
            zoom: MAP_ZOOM,
        }
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self::new(MAP_STYLES[0])
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    /// Every supervisor in the unfiltered table, for the selection widget.
    pub supervisor_options: Vec<String>,
    pub query: DemandQuery,
    /// Number of rows left after filtering.
    pub total: usize,
    pub records: DemandTable,
    pub by_supervisor: Vec<SupervisorCount>,
    pub by_classification: Vec<ClassificationCount>,
    pub city_occurrences: Vec<CityOccurrence>,
    pub map: MapView,
}

impl Dashboard {
    /// Filters once, then aggregates the filtered rows three ways.
    pub fn build(table: &DemandTable, query: &DemandQuery, map_style: impl Into<String>) -> Self {
        let filtered = query.apply(table);
        let dashboard = Self {
            supervisor_options: table.supervisors(),
            query: query.clone(),
            total: filtered.len(),
            by_supervisor: aggregate::by_supervisor(&filtered),
            by_classification: aggregate::by_classification(&filtered),
            city_occurrences: aggregate::by_city(&filtered),
            records: filtered,
            map: MapView::new(map_style),
        };
        info!(
            rows = table.len(),
            filtered = dashboard.total,
            mapped_cities = dashboard.city_occurrences.len(),
            "dashboard built"
        );
        dashboard
    }
}

/// Result of a whole interaction, load included.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DashboardOutcome {
    Ready(Box<Dashboard>),
    /// The dataset loaded but has no rows.
    NoData,
    /// The dataset could not be loaded; `message` carries the cause.
    LoadFailed { message: String },
}

impl DashboardOutcome {
    pub fn from_load(
        loaded: Result<DemandTable, DemandError>,
        query: &DemandQuery,
        map_style: impl Into<String>,
    ) -> Self {
        match loaded {
            Ok(table) if table.is_empty() => Self::NoData,
            Ok(table) => Self::Ready(Box::new(Dashboard::build(&table, query, map_style))),
            Err(e) => Self::LoadFailed {
                message: e.to_string(),
            },
        }
    }

    pub fn dashboard(&self) -> Option<&Dashboard> {
        match self {
            Self::Ready(d) => Some(d.as_ref()),
            _ => None,
        }
    }
}
