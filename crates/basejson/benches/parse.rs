#![allow(missing_docs)]
//! Whole-document parse throughput of basejson against `serde_json`.

use std::{fmt::Write as _, hint::black_box, time::Duration};

use basejson::{Parser, ParserOptions};
use criterion::{
    BenchmarkGroup, Criterion, Throughput, criterion_group, criterion_main, measurement::WallTime,
};
use serde_json::Value as SerdeValue;

struct Dataset {
    name: &'static str,
    text: String,
}

fn sample() -> String {
    include_str!("../data/sample.json").to_owned()
}

fn floats_array() -> String {
    let mut text = String::from("[");
    for i in 0..20_000 {
        if i > 0 {
            text.push(',');
        }
        write!(text, "{}", f64::from(i) * 0.731 - 5000.0).unwrap();
    }
    text.push(']');
    text
}

fn ints_array() -> String {
    let items: Vec<String> = (0..20_000_i64).map(|i| (i * 7919 - 70_000).to_string()).collect();
    format!("[{}]", items.join(", "))
}

fn string_array() -> String {
    let items: Vec<String> = (0..5_000)
        .map(|i| format!(r#""item {i} with \"quoted\" text and a \\ backslash""#))
        .collect();
    format!("[{}]", items.join(","))
}

fn records() -> String {
    let items: Vec<String> = (0..2_000)
        .map(|i| {
            format!(
                r#"{{"id": {i}, "name": "user{i}", "active": {}, "score": {}.5, "tags": ["a", "b"], "manager": null}}"#,
                i % 2 == 0,
                i % 100
            )
        })
        .collect();
    format!("[\n  {}\n]", items.join(",\n  "))
}

fn nested() -> String {
    format!("{}1{}", "[".repeat(100), "]".repeat(100))
}

fn basejson_value(text: &str, group: &mut BenchmarkGroup<'_, WallTime>) {
    group.bench_function("basejson_value", |b| {
        b.iter(|| {
            let v = basejson::parse(black_box(text)).unwrap();
            black_box(v)
        });
    });
}

fn basejson_strict(text: &str, group: &mut BenchmarkGroup<'_, WallTime>) {
    let options = ParserOptions {
        strict_commas: true,
        ..Default::default()
    };
    group.bench_function("basejson_strict", |b| {
        b.iter(|| {
            let v = Parser::new(black_box(text), options).parse().unwrap();
            black_box(v)
        });
    });
}

fn serde_value(text: &str, group: &mut BenchmarkGroup<'_, WallTime>) {
    group.bench_function("serde_value", |b| {
        b.iter(|| {
            let v: SerdeValue = serde_json::from_str(black_box(text)).unwrap();
            black_box(v)
        });
    });
}

fn bench_dataset(dataset: &Dataset, c: &mut Criterion) {
    let mut group = c.benchmark_group(dataset.name);
    group.measurement_time(Duration::from_secs(3));
    group.warm_up_time(Duration::from_secs(1));
    group.throughput(Throughput::Bytes(dataset.text.len() as u64));
    basejson_value(&dataset.text, &mut group);
    basejson_strict(&dataset.text, &mut group);
    serde_value(&dataset.text, &mut group);
    group.finish();
}

pub fn parse_benches(c: &mut Criterion) {
    let datasets = [
        Dataset {
            name: "sample",
            text: sample(),
        },
        Dataset {
            name: "floats_array",
            text: floats_array(),
        },
        Dataset {
            name: "ints_array",
            text: ints_array(),
        },
        Dataset {
            name: "string_array",
            text: string_array(),
        },
        Dataset {
            name: "records",
            text: records(),
        },
        Dataset {
            name: "nested",
            text: nested(),
        },
    ];

    for dataset in &datasets {
        bench_dataset(dataset, c);
    }
}

criterion_group!(benches, parse_benches);
criterion_main!(benches);
