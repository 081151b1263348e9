//! Performance benchmarks for loading and reporting
//!
//! Measures the two single-pass stages that scale with the table size:
//!
//! 1. **CSV loading**: parse + integer conversion + matrix assembly
//! 2. **Report building**: per-species statistics and trophic totals
//!
//! Chart rendering is dominated by the rasterizer and is not measured here.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench --bench report_performance
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::fmt::Write as _;

use ecosystem_viz::prelude::*;

const SPECIES: [&str; 12] = [
    "Wildflowers",
    "Berries",
    "Aspen",
    "Spruce",
    "Deer",
    "Bunny",
    "FieldMouse",
    "GroundSquirrel",
    "Chipmunk",
    "Fox",
    "Coyote",
    "BlackBear",
];

/// Deterministic oscillating populations, one row per timestep
fn synthetic_csv(rows: usize) -> String {
    let mut csv = String::from("TimeStep");
    for name in SPECIES {
        csv.push(',');
        csv.push_str(name);
    }
    csv.push('\n');

    for t in 0..rows {
        write!(csv, "{}", t).unwrap();
        for (k, _) in SPECIES.iter().enumerate() {
            let value = 100 + ((t * (k + 3)) % 97) as i64;
            write!(csv, ",{}", value).unwrap();
        }
        csv.push('\n');
    }
    csv
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_population_table");
    let dir = tempfile::tempdir().unwrap();

    for rows in [100, 1_000, 10_000] {
        let path = dir.path().join(format!("data_{}.csv", rows));
        std::fs::write(&path, synthetic_csv(rows)).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(rows), &path, |b, path| {
            b.iter(|| read_population_table(black_box(path)).unwrap())
        });
    }
    group.finish();
}

fn bench_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("population_report");
    let dir = tempfile::tempdir().unwrap();
    let groups = SpeciesGroups::default();

    for rows in [100, 1_000, 10_000] {
        let path = dir.path().join(format!("data_{}.csv", rows));
        std::fs::write(&path, synthetic_csv(rows)).unwrap();
        let table = read_population_table(&path).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(rows), &table, |b, table| {
            b.iter(|| {
                PopulationReport::from_table(black_box(table))
                    .unwrap()
                    .with_trophic_totals(table, &groups)
                    .to_string()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_load, bench_report);
criterion_main!(benches);
