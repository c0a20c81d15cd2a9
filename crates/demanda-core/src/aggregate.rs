// crates/demanda-core/src/aggregate.rs

//! Frequency aggregations over a (usually filtered) [`DemandTable`].
//!
//! All three are group-by + count. Rows where the grouped field is missing
//! or `null` are not counted.

use crate::geocoder;
use crate::model::{DemandTable, FIELD_CITY, FIELD_CLASSIFICATION, FIELD_SUPERVISOR};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Demands per supervisor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupervisorCount {
    #[serde(rename = "Supervisor")]
    pub supervisor: String,
    #[serde(rename = "Contagem")]
    pub count: usize,
}

/// Demands per classification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationCount {
    #[serde(rename = "Classificação")]
    pub classification: String,
    #[serde(rename = "Contagem")]
    pub count: usize,
}

/// Demands per geocodable city, with the city's fixed coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CityOccurrence {
    #[serde(rename = "Cidade")]
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "Contagem")]
    pub count: usize,
}

/// Counts the distinct values of `field`.
///
/// Ordered by descending count; ties keep first-encounter order.
pub fn value_counts(table: &DemandTable, field: &str) -> Vec<(String, usize)> {
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for value in table.iter().filter_map(|r| r.text(field)) {
        match slots.get(&value) {
            Some(&i) => counts[i].1 += 1,
            None => {
                slots.insert(value.clone(), counts.len());
                counts.push((value, 1));
            }
        }
    }

    // stable: equal counts stay in encounter order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

pub fn by_supervisor(table: &DemandTable) -> Vec<SupervisorCount> {
    value_counts(table, FIELD_SUPERVISOR)
        .into_iter()
        .map(|(supervisor, count)| SupervisorCount { supervisor, count })
        .collect()
}

/// Classification counts, smallest first.
pub fn by_classification(table: &DemandTable) -> Vec<ClassificationCount> {
    let mut counts = value_counts(table, FIELD_CLASSIFICATION);
    counts.sort_by_key(|&(_, n)| n);
    counts
        .into_iter()
        .map(|(classification, count)| ClassificationCount {
            classification,
            count,
        })
        .collect()
}

/// City counts joined with the geocoder.
///
/// Cities that are not a canonical geocoder key are dropped here, on
/// purpose: they cannot be placed on the map. The other aggregations and the
/// table itself still include them.
pub fn by_city(table: &DemandTable) -> Vec<CityOccurrence> {
    value_counts(table, FIELD_CITY)
        .into_iter()
        .filter(|(city, _)| geocoder::is_known(city))
        .filter_map(|(city, count)| {
            geocoder::lookup(&city).map(|c| CityOccurrence {
                city,
                latitude: c.latitude,
                longitude: c.longitude,
                count,
            })
        })
        .collect()
}
