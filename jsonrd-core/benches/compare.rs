//! Cross-reader comparison benchmarks.
//!
//! Compares this reader against serde_json parsing the same documents
//! into its dynamically-typed `serde_json::Value`. Both sides buffer the
//! full input and build a complete tree, so throughput is directly
//! comparable.
//!
//! Run with: cargo bench --bench compare

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use jsonrd_core::parse;

/// Generate a flat array of record objects shared by both readers.
fn generate_document(records: usize) -> String {
    let mut doc = String::with_capacity(records * 70);
    doc.push('[');
    for i in 0..records {
        if i > 0 {
            doc.push(',');
        }
        doc.push_str(&format!(
            r#"{{"id": {}, "label": "item number {}", "weight": {}.25, "active": {}}}"#,
            i,
            i,
            i % 53,
            i % 2 == 0
        ));
    }
    doc.push(']');
    doc
}

fn parse_jsonrd(input: &str) -> usize {
    let tree = parse(input).expect("document parses");
    tree.as_array().map(|items| items.len()).unwrap_or(0)
}

fn parse_serde(input: &str) -> usize {
    let tree: serde_json::Value = serde_json::from_str(input).expect("document parses");
    tree.as_array().map(|items| items.len()).unwrap_or(0)
}

/// Benchmark both readers on the same generated documents.
fn bench_reader_comparison(c: &mut Criterion) {
    for records in [50, 500, 5000] {
        let doc = generate_document(records);

        // Both sides must see the same element count.
        assert_eq!(parse_jsonrd(&doc), parse_serde(&doc));

        let mut group = c.benchmark_group(format!("compare_{}records", records));
        group.throughput(Throughput::Bytes(doc.len() as u64));

        group.bench_with_input(BenchmarkId::new("jsonrd", ""), &doc, |b, doc| {
            b.iter(|| parse_jsonrd(black_box(doc)))
        });

        group.bench_with_input(BenchmarkId::new("serde_json", ""), &doc, |b, doc| {
            b.iter(|| parse_serde(black_box(doc)))
        });

        group.finish();
    }
}

criterion_group!(benches, bench_reader_comparison);
criterion_main!(benches);
