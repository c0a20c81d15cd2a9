use demanda_core::prelude::*;
use std::io::Write;

const ROWS: &str = r##"[
    {"#": 101, "supervisor": "Ana",   "Classificação": "Iluminação", "Cidade": "BAURU"},
    {"#": 102, "supervisor": "ana",   "Classificação": "Buraco",     "Cidade": "LINS"},
    {"#": 103, "supervisor": "BRUNO", "Classificação": "Iluminação", "Cidade": "NEVERLAND"},
    {"#": 104, "supervisor": "Carla", "Classificação": "Poda",       "Cidade": "BAURU"},
    {"#": 105, "supervisor": "Ana",   "Classificação": "Iluminação", "Cidade": "SÃO PEDRO"}
]"##;

const COLUMNS: &str = r##"{
    "#": [101, 102, 103, 104, 105],
    "supervisor": ["Ana", "ana", "BRUNO", "Carla", "Ana"],
    "Classificação": ["Iluminação", "Buraco", "Iluminação", "Poda", "Iluminação"],
    "Cidade": ["BAURU", "LINS", "NEVERLAND", "BAURU", "SÃO PEDRO"]
}"##;

fn sample() -> DemandTable {
    DemandTable::from_str(ROWS).expect("sample parses")
}

fn queries() -> Vec<DemandQuery> {
    vec![
        DemandQuery::new(),
        DemandQuery::new().with_demand_number("103"),
        DemandQuery::new().with_supervisors(["ana", "carla"]),
        DemandQuery::new()
            .with_demand_number("105")
            .with_supervisors(["ANA"]),
        DemandQuery::new().with_demand_number("999"),
    ]
}

#[test]
fn row_and_column_layouts_load_identically() {
    assert_eq!(sample(), DemandTable::from_str(COLUMNS).unwrap());
}

#[test]
fn filtering_is_idempotent() {
    let table = sample();
    for q in queries() {
        let once = q.apply(&table);
        assert_eq!(q.apply(&once), once, "{q:?}");
    }
}

#[test]
fn supervisor_and_classification_counts_cover_every_row() {
    let table = sample();
    for q in queries() {
        let filtered = q.apply(&table);
        let sup: usize = by_supervisor(&filtered).iter().map(|c| c.count).sum();
        let class: usize = by_classification(&filtered).iter().map(|c| c.count).sum();
        assert_eq!(sup, filtered.len());
        assert_eq!(class, filtered.len());
    }
}

#[test]
fn city_counts_are_bounded_by_filtered_size() {
    let table = sample();
    for q in queries() {
        let filtered = q.apply(&table);
        let mapped: usize = by_city(&filtered).iter().map(|c| c.count).sum();
        let all_known = filtered
            .iter()
            .all(|r| r.city().is_some_and(|c| geocoder::is_known(&c)));
        assert!(mapped <= filtered.len());
        assert_eq!(mapped == filtered.len(), all_known, "{q:?}");
    }
}

#[test]
fn supervisor_filter_ignores_case() {
    let table = DemandTable::from_str(
        r#"[{"supervisor": "Ana"}, {"supervisor": "ana"}, {"supervisor": "BRUNO"}]"#,
    )
    .unwrap();
    let kept = DemandQuery::new().with_supervisors(["ana"]).apply(&table);
    let names: Vec<String> = kept.iter().filter_map(|r| r.supervisor()).collect();
    assert_eq!(names, vec!["Ana", "ana"]);
}

#[test]
fn supervisor_aggregation_groups_exact_values() {
    let counts = by_supervisor(&sample());
    assert_eq!(counts[0].supervisor, "Ana");
    assert_eq!(counts[0].count, 2);
    assert_eq!(counts.len(), 4);
}

#[test]
fn classification_counts_ascend() {
    let counts = by_classification(&sample());
    let got: Vec<(&str, usize)> = counts
        .iter()
        .map(|c| (c.classification.as_str(), c.count))
        .collect();
    assert_eq!(got, vec![("Buraco", 1), ("Poda", 1), ("Iluminação", 3)]);
}

#[test]
fn unknown_city_is_dropped_from_map_only() {
    let table =
        DemandTable::from_str(r#"[{"Cidade": "BAURU"}, {"Cidade": "NEVERLAND"}]"#).unwrap();
    let dashboard = Dashboard::build(&table, &DemandQuery::new(), MAP_STYLES[0]);

    assert_eq!(dashboard.total, 2);
    assert_eq!(dashboard.records.len(), 2);
    assert_eq!(
        dashboard.city_occurrences,
        vec![CityOccurrence {
            city: "BAURU".to_string(),
            latitude: -22.262420,
            longitude: -49.180159,
            count: 1,
        }]
    );
}

#[test]
fn empty_dataset_yields_empty_aggregations() {
    let table = DemandTable::from_str("[]").unwrap();
    assert!(table.is_empty());

    let dashboard = Dashboard::build(&table, &DemandQuery::new(), MAP_STYLES[0]);
    assert!(dashboard.by_supervisor.is_empty());
    assert!(dashboard.by_classification.is_empty());
    assert!(dashboard.city_occurrences.is_empty());

    let outcome = DashboardOutcome::from_load(Ok(table), &DemandQuery::new(), MAP_STYLES[0]);
    assert_eq!(outcome, DashboardOutcome::NoData);
}

#[test]
fn filter_to_nothing_yields_empty_aggregations() {
    let dashboard = Dashboard::build(
        &sample(),
        &DemandQuery::new().with_demand_number("999"),
        MAP_STYLES[0],
    );
    assert_eq!(dashboard.total, 0);
    assert!(dashboard.by_supervisor.is_empty());
    assert!(dashboard.by_classification.is_empty());
    assert!(dashboard.city_occurrences.is_empty());
    assert_eq!(dashboard.supervisor_options.len(), 4);
}

#[test]
fn absent_aggregation_columns_yield_empty_series() {
    let table = DemandTable::from_str(r##"[{"#": 1, "supervisor": "Ana"}]"##).unwrap();
    let dashboard = Dashboard::build(&table, &DemandQuery::new(), MAP_STYLES[0]);

    assert_eq!(dashboard.total, 1);
    assert!(dashboard.by_classification.is_empty());
    assert!(dashboard.city_occurrences.is_empty());
    assert_eq!(dashboard.by_supervisor.len(), 1);
    assert_eq!(dashboard.by_supervisor[0].supervisor, "Ana");
    assert_eq!(dashboard.by_supervisor[0].count, 1);
}

#[test]
fn malformed_json_is_a_load_error() {
    let err = DemandTable::from_str(r#"[{"supervisor": "Ana""#).unwrap_err();
    assert!(matches!(err, DemandError::Json(_)));
}

#[test]
fn malformed_file_reports_instead_of_failing() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{ not json").unwrap();
    assert!(load_or_report(file.path()).is_none());
    assert!(matches!(
        DemandTable::load_from_path(file.path()),
        Err(DemandError::Json(_))
    ));
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rc2.json");
    let err = DemandTable::load_from_path(&path).unwrap_err();
    assert!(matches!(err, DemandError::NotFound(_)));
    assert!(err.to_string().contains("rc2.json"));
    assert!(load_or_report(&path).is_none());
}

#[test]
fn file_round_trip_matches_in_memory_parse() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rc2.json");
    std::fs::write(&path, COLUMNS).unwrap();
    assert_eq!(load_or_report(&path), Some(sample()));
}

#[cfg(feature = "compact")]
#[test]
fn gzip_dataset_loads_like_plain_json() {
    use flate2::{write::GzEncoder, Compression};

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rc2.json.gz");
    let mut encoder = GzEncoder::new(std::fs::File::create(&path).unwrap(), Compression::default());
    encoder.write_all(ROWS.as_bytes()).unwrap();
    encoder.finish().unwrap();

    assert_eq!(DemandTable::load_from_path(&path).unwrap(), sample());
}
