// benches/extract.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;
use sunset_scrape::engine::{dates::normalize_date, extract};
use sunset_scrape::specs;

fn load_fixture(slug: &str) -> String {
    let path = format!("{}/tests/fixtures/{slug}.html", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {path}: {e}"))
}

fn bench_extract(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();

    for src in specs::ALL {
        let doc = load_fixture(src.slug);
        c.bench_function(&format!("extract_{}", src.slug), |b| {
            b.iter(|| {
                let recs = extract(black_box(&doc), src, today);
                black_box(recs.len())
            })
        });
    }

    // Large page: every fixture table repeated.
    let big: String = specs::ALL.iter().map(|s| load_fixture(s.slug)).collect::<Vec<_>>().concat().repeat(20);
    c.bench_function("extract_bedrock_large", |b| {
        b.iter(|| black_box(extract(black_box(&big), &specs::bedrock::SOURCE, today).len()))
    });
}

fn bench_dates(c: &mut Criterion) {
    let cells = [
        "2026-02-17",
        "June 19, 2026",
        "July 1, 2026 (GovCloud)",
        "legacy date: not sooner than March 2026",
        "N/A",
        "TBD",
    ];
    c.bench_function("normalize_date", |b| {
        b.iter(|| {
            for cell in cells {
                black_box(normalize_date(black_box(cell)));
            }
        })
    });
}

criterion_group!(benches, bench_extract, bench_dates);
criterion_main!(benches);
