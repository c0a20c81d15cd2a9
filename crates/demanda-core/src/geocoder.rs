// crates/demanda-core/src/geocoder.rs

//! # Geocoder
//!
//! A closed, build-time table of the cities the dashboard can place on the
//! map. Keys are canonical uppercase names with their diacritics intact
//! (`"SÃO PEDRO"`, not `"SAO PEDRO"`).

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A fixed `(latitude, longitude)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CityCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl CityCoordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Source table, in declaration order.
static KNOWN_CITIES: [(&str, CityCoordinate); 17] = [
    ("ÁGUAS DE SANTA BÁRBARA", CityCoordinate::new(-22.7666740, -49.2141300)),
    ("ANHEMBI", CityCoordinate::new(-22.789859, -48.140030)),
    ("AVAÍ", CityCoordinate::new(-22.159374, -49.369551)),
    ("BAURU", CityCoordinate::new(-22.262420, -49.180159)),
    ("BOTUCATU", CityCoordinate::new(-22.835740, -48.231794)),
    ("GUARANTÃ", CityCoordinate::new(-21.906337, -49.586856)),
    ("ITATINGA", CityCoordinate::new(-23.038354, -48.668439)),
    ("LENCOIS PAULISTA", CityCoordinate::new(-22.573064, -48.785689)),
    ("PAULISTÂNIA", CityCoordinate::new(-22.582313, -49.390672)),
    ("PRESIDENTE ALVES", CityCoordinate::new(-22.084878, -49.422422)),
    ("REGINÓPOLIS", CityCoordinate::new(-21.926986, -49.221164)),
    ("SÃO PEDRO", CityCoordinate::new(-22.585806, -47.916186)),
    ("LINS", CityCoordinate::new(-21.682648, -49.797577)),
    ("GETULINA", CityCoordinate::new(-21.786340, -49.940519)),
    ("GÁLIA", CityCoordinate::new(-22.304004, -49.565130)),
    ("SANTA CRUZ DO RIO PARDO", CityCoordinate::new(-22.805438, -49.475661)),
    ("PONGAÍ", CityCoordinate::new(-21.7948626, -49.3606179)),
];

// Built once per process, never mutated.
static CITY_INDEX: Lazy<HashMap<&'static str, CityCoordinate>> =
    Lazy::new(|| KNOWN_CITIES.iter().copied().collect());

/// Looks up a city, case-insensitively.
///
/// The query is upper-cased (Unicode-aware, so `"são pedro"` becomes
/// `"SÃO PEDRO"`) before it is matched against the canonical keys.
/// Unknown cities are `None`, never an error.
///
/// # Examples
/// ```rust
/// use demanda_core::geocoder;
///
/// let bauru = geocoder::lookup("Bauru").unwrap();
/// assert_eq!(bauru.latitude, -22.262420);
/// assert!(geocoder::lookup("Neverland").is_none());
/// ```
pub fn lookup(city: &str) -> Option<CityCoordinate> {
    CITY_INDEX.get(city.to_uppercase().as_str()).copied()
}

/// Exact membership test against the canonical keys.
///
/// Unlike [`lookup`] this does not normalize case: `"Bauru"` is not a
/// known key, `"BAURU"` is. The city aggregation joins on this predicate.
pub fn is_known(city: &str) -> bool {
    CITY_INDEX.contains_key(city)
}

/// All known cities with their coordinates, in declaration order.
pub fn known_cities() -> impl Iterator<Item = (&'static str, CityCoordinate)> {
    KNOWN_CITIES.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_seventeen_distinct_keys() {
        assert_eq!(CITY_INDEX.len(), 17);
        assert_eq!(known_cities().count(), 17);
    }

    #[test]
    fn lookup_upper_cases_including_diacritics() {
        let sp = lookup("são pedro").unwrap();
        assert_eq!(sp, CityCoordinate::new(-22.585806, -47.916186));
        assert_eq!(lookup("Águas de Santa Bárbara"), lookup("ÁGUAS DE SANTA BÁRBARA"));
    }

    #[test]
    fn diacritics_are_not_folded() {
        assert!(lookup("SAO PEDRO").is_none());
        assert!(lookup("PONGAI").is_none());
    }

    #[test]
    fn membership_is_exact() {
        assert!(is_known("BAURU"));
        assert!(!is_known("Bauru"));
        assert!(!is_known("NEVERLAND"));
    }
}
