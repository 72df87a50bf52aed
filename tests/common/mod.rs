// tests/common/mod.rs
#![allow(dead_code)]
use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use sunset_scrape::engine::{DateValue, NormalizedRecord};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

pub fn fixture(slug: &str) -> String {
    let path = fixtures_dir().join(format!("{slug}.html"));
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
}

/// Reference date the fixtures are written against.
pub fn today() -> NaiveDate {
    ymd(2026, 1, 15)
}

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn known(y: i32, m: u32, d: u32) -> DateValue {
    DateValue::Known(ymd(y, m, d))
}

pub fn record(name: &str, shutdown: DateValue) -> NormalizedRecord {
    NormalizedRecord {
        source: "Test".into(),
        entity_name: name.into(),
        entity_id: None,
        deprecated_on: DateValue::Unknown,
        shutdown_on: shutdown,
        replacement: String::new(),
        status: "deprecated".into(),
    }
}

pub fn find<'a>(records: &'a [NormalizedRecord], name: &str) -> &'a NormalizedRecord {
    records
        .iter()
        .find(|r| r.entity_name == name)
        .unwrap_or_else(|| panic!("no record for {name}"))
}
