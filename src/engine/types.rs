// src/engine/types.rs
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A date as stated by a source, or the explicit absence of one.
///
/// `Unknown` orders after every known date, so "earliest" comparisons naturally
/// prefer a stated date. It serializes as `""`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DateValue {
    Known(NaiveDate),
    #[default]
    Unknown,
}

impl DateValue {
    pub fn is_known(&self) -> bool {
        matches!(self, DateValue::Known(_))
    }

    pub fn known(&self) -> Option<NaiveDate> {
        match self {
            DateValue::Known(d) => Some(*d),
            DateValue::Unknown => None,
        }
    }

    /// ISO-8601 for known dates, empty for `Unknown`.
    pub fn to_iso(&self) -> String {
        match self {
            DateValue::Known(d) => d.format("%Y-%m-%d").to_string(),
            DateValue::Unknown => s!(),
        }
    }
}

impl From<NaiveDate> for DateValue {
    fn from(d: NaiveDate) -> Self {
        DateValue::Known(d)
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso())
    }
}

impl Serialize for DateValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso())
    }
}

impl<'de> Deserialize<'de> for DateValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(DateValue::Unknown);
        }
        NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map(DateValue::Known)
            .map_err(serde::de::Error::custom)
    }
}

/// One model's deprecation schedule as a vendor states it.
///
/// Field order matters: the derived `Ord` is the final tie-break when the merger
/// has to choose between two records for the same model.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRecord {
    pub source: String,
    pub entity_name: String,
    #[serde(default, with = "empty_as_none")]
    pub entity_id: Option<String>,
    #[serde(default)]
    pub deprecated_on: DateValue,
    #[serde(default)]
    pub shutdown_on: DateValue,
    #[serde(default)]
    pub replacement: String,
    pub status: String,
}

impl NormalizedRecord {
    /// Same record with a different replacement. Records are never edited in place.
    pub fn with_replacement(&self, replacement: &str) -> Self {
        Self { replacement: replacement.to_string(), ..self.clone() }
    }
}

mod empty_as_none {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(v: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(v.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.filter(|s| !s.is_empty()))
    }
}

/// One `<td>`/`<th>` as written in the markup, before span resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawCell {
    pub text: String,
    pub row_span: usize,
    pub col_span: usize,
}

impl RawCell {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), row_span: 1, col_span: 1 }
    }

    pub fn spanning_rows(text: impl Into<String>, rows: usize) -> Self {
        Self { text: text.into(), row_span: rows, col_span: 1 }
    }
}

/// Semantic meaning of a table column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    Identity,
    EntityId,
    Deprecated,
    Shutdown,
    Replacement,
    ReplacementId,
    Status,
}
