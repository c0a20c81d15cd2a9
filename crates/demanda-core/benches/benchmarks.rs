use criterion::{criterion_group, criterion_main, Criterion};
use demanda_core::prelude::*;
use serde_json::{json, Map, Value};
use std::hint::black_box;

const SUPERVISORS: [&str; 5] = ["Ana", "ana", "Bruno", "Carla", "Davi"];
const CLASSES: [&str; 4] = ["Iluminação", "Buraco", "Poda", "Limpeza"];
const CITIES: [&str; 5] = ["BAURU", "LINS", "BOTUCATU", "NEVERLAND", "GÁLIA"];

fn synthetic_table(rows: usize) -> DemandTable {
    (0..rows)
        .map(|i| {
            let mut fields = Map::new();
            fields.insert("#".into(), json!(i));
            fields.insert("supervisor".into(), json!(SUPERVISORS[i % SUPERVISORS.len()]));
            fields.insert("Classificação".into(), json!(CLASSES[i % CLASSES.len()]));
            fields.insert("Cidade".into(), json!(CITIES[i % CITIES.len()]));
            fields.insert("Descrição".into(), Value::String(format!("demanda {i}")));
            DemandRecord::new(fields)
        })
        .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let table = synthetic_table(10_000);
    let query = DemandQuery::new().with_supervisors(["ana", "carla"]);

    c.bench_function("filter_10k", |b| b.iter(|| query.apply(black_box(&table))));

    c.bench_function("dashboard_10k", |b| {
        b.iter(|| Dashboard::build(black_box(&table), &query, MAP_STYLES[0]))
    });

    let json = serde_json::to_string(&table).unwrap_or_default();
    c.bench_function("load_rows_10k", |b| {
        b.iter(|| DemandTable::from_str(black_box(&json)))
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
