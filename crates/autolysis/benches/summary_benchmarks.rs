//! Load and summary performance benchmarks.
//!
//! Measures parsing, describe statistics and the correlation matrix on
//! synthetic mixed-type data.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use std::io::Write;
use tempfile::NamedTempFile;

use autolysis::Parser;
use autolysis::schema::{classify_table, numeric_values};
use autolysis::summary::describe;
use autolysis::visualize::correlation_matrix;

/// Generate CSV data with `numeric` numeric columns and two text columns.
fn generate_csv_data(rows: usize, numeric: usize) -> String {
    let mut data = String::from("region,label");
    for col in 0..numeric {
        data.push_str(&format!(",metric_{}", col + 1));
    }
    data.push('\n');

    let regions = ["north", "south", "east", "west"];
    for row in 0..rows {
        data.push_str(regions[row % regions.len()]);
        data.push_str(&format!(",item_{:05}", row));
        for col in 0..numeric {
            if (row + col) % 37 == 0 {
                data.push(',');
            } else {
                data.push_str(&format!(",{:.3}", ((row * (col + 3)) % 997) as f64 / 7.0));
            }
        }
        data.push('\n');
    }

    data
}

fn bench_parse_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_file");

    for rows in [100, 1_000, 10_000].iter() {
        let data = generate_csv_data(*rows, 8);

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &data, |b, data| {
            b.iter_with_setup(
                || {
                    let mut temp = NamedTempFile::with_suffix(".csv").unwrap();
                    temp.write_all(data.as_bytes()).unwrap();
                    temp
                },
                |temp| black_box(Parser::new().parse_file(temp.path()).unwrap()),
            )
        });
    }

    group.finish();
}

fn bench_describe(c: &mut Criterion) {
    let mut group = c.benchmark_group("describe");

    for rows in [100, 1_000, 10_000].iter() {
        let table = Parser::new()
            .parse_text(&generate_csv_data(*rows, 8), b',')
            .unwrap();

        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &table, |b, table| {
            b.iter(|| {
                let schema = classify_table(table);
                black_box(describe(table, &schema).to_string())
            })
        });
    }

    group.finish();
}

fn bench_correlation_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("correlation_matrix");

    for cols in [3, 10, 25].iter() {
        let table = Parser::new()
            .parse_text(&generate_csv_data(2_000, *cols), b',')
            .unwrap();
        let schema = classify_table(&table);
        let columns: Vec<Vec<Option<f64>>> = schema
            .numeric_columns()
            .map(|c| numeric_values(&table, c.position))
            .collect();

        group.bench_with_input(BenchmarkId::new("cols", cols), &columns, |b, columns| {
            b.iter(|| black_box(correlation_matrix(columns)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_file, bench_describe, bench_correlation_matrix);
criterion_main!(benches);
