// src/engine/synth.rs
//! Record synthesizer: one grid row → zero or one `NormalizedRecord`.

use chrono::NaiveDate;

use crate::core::sanitize::{clean_identity, is_placeholder};
use crate::engine::dates::normalize_date;
use crate::engine::roles::RoleMap;
use crate::engine::source::{SourceConfig, StatusPolicy};
use crate::engine::types::{DateValue, NormalizedRecord, Role};

fn cell<'a>(row: &'a [String], roles: &RoleMap, role: Role) -> Option<&'a str> {
    roles.get(role).and_then(|i| row.get(i)).map(|s| s.trim())
}

/// Build a record from `row`. Returns `None` when the identity cell is empty.
///
/// `today` decides whether a known shutdown date has already passed.
pub fn synthesize(
    row: &[String],
    roles: &RoleMap,
    status: &StatusPolicy,
    source: &SourceConfig,
    today: NaiveDate,
) -> Option<NormalizedRecord> {
    let entity_name = clean_identity(cell(row, roles, Role::Identity)?);
    if entity_name.is_empty() {
        return None;
    }

    let entity_id = cell(row, roles, Role::EntityId)
        .map(clean_identity)
        .filter(|id| !is_placeholder(id));

    let date_of = |role| cell(row, roles, role).map(normalize_date).unwrap_or_default();
    let deprecated_on = date_of(Role::Deprecated);
    let shutdown_on = date_of(Role::Shutdown);

    let stated = cell(row, roles, Role::Status).filter(|s| !s.is_empty());
    let status = match stated {
        Some(raw) => source.map_status(raw),
        None => derive_status(status, deprecated_on, shutdown_on, today).to_string(),
    };

    Some(NormalizedRecord {
        source: source.name.to_string(),
        entity_name,
        entity_id,
        deprecated_on,
        shutdown_on,
        replacement: replacement_of(row, roles, source.replacement_separator),
        status,
    })
}

/// Status for a row whose table has no status column (or an empty status cell).
pub fn derive_status(
    policy: &StatusPolicy,
    deprecated_on: DateValue,
    shutdown_on: DateValue,
    today: NaiveDate,
) -> &'static str {
    if let Some(fixed) = policy.fixed {
        return fixed;
    }
    match shutdown_on {
        DateValue::Known(d) if d <= today => "retired",
        DateValue::Known(_) => policy.dated,
        DateValue::Unknown if deprecated_on.is_known() => policy.dated,
        DateValue::Unknown => policy.default,
    }
}

/// Replacement name and replacement id, joined when both are present.
pub fn replacement_of(row: &[String], roles: &RoleMap, separator: &str) -> String {
    [Role::Replacement, Role::ReplacementId]
        .into_iter()
        .filter_map(|role| cell(row, roles, role))
        .filter(|v| !is_placeholder(v))
        .collect::<Vec<_>>()
        .join(separator)
}
