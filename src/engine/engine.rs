// src/engine/engine.rs
use chrono::NaiveDate;

use crate::core::sanitize::clean_identity;
use crate::engine::dates::{Prose, prose_date};
use crate::engine::grid::{Grid, build_grid};
use crate::engine::markup::{self, MarkupTable};
use crate::engine::merge::{ReplacementMap, merge};
use crate::engine::roles::{RoleMap, RoleRule, infer_roles};
use crate::engine::source::{SectionScan, SourceConfig, TableKind};
use crate::engine::synth::{replacement_of, synthesize};
use crate::engine::types::{NormalizedRecord, Role};

/// A table after role inference and span resolution. Every row is `headers.len()` wide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub roles: RoleMap,
    pub rows: Grid,
}

impl RawTable {
    /// `None` when no header names the model (decorative or unrelated table) or when
    /// the spans cannot be resolved.
    pub fn build(table: &MarkupTable, rules: &[RoleRule]) -> Option<RawTable> {
        let roles = infer_roles(&table.headers, rules);
        if roles.identity().is_none() {
            logd!("table [{}]: no identity column", table.headers.join(" | "));
            return None;
        }
        match build_grid(&table.rows, table.headers.len()) {
            Ok(rows) => Some(RawTable { headers: table.headers.clone(), roles, rows }),
            Err(e) => {
                logw!("table [{}]: skipped, {e}", table.headers.join(" | "));
                None
            }
        }
    }
}

/// Extract the normalized record set for one source page.
///
/// Never fails: tables that cannot be read are skipped, and the result may be empty.
/// Order is table discovery order then row order, except where duplicates collapse.
pub fn extract(doc: &str, source: &SourceConfig, today: NaiveDate) -> Vec<NormalizedRecord> {
    let mut records: Vec<NormalizedRecord> = Vec::new();
    let mut replacements = ReplacementMap::default();

    for (t, html) in markup::tables(doc).into_iter().enumerate() {
        let Some(table) = markup::read_table(html) else {
            logd!("{}: table #{t} has no header row", source.name);
            continue;
        };
        let Some(profile) = source.profile_for(&table.headers) else {
            logd!("{}: table #{t} matches no profile", source.name);
            continue;
        };
        let Some(raw) = RawTable::build(&table, profile.rules) else { continue };
        logd!("{}: table #{t} is a {} table, {} row(s)", source.name, profile.label, raw.rows.len());

        match profile.kind {
            TableKind::Records => records.extend(
                raw.rows
                    .iter()
                    .filter_map(|row| synthesize(row, &raw.roles, &profile.status, source, today)),
            ),
            TableKind::Replacements => collect_replacements(&raw, source, &mut replacements),
        }
    }

    if records.is_empty() {
        if let Some(scan) = &source.sections {
            records = scan_sections(doc, source, scan, today);
        }
    }

    let merged = merge(records, &replacements, source.dedup);
    logf!("{}: {} record(s)", source.name, merged.len());
    merged
}

fn collect_replacements(raw: &RawTable, source: &SourceConfig, into: &mut ReplacementMap) {
    let Some(id_col) = raw.roles.identity() else { return };
    for row in &raw.rows {
        let name = row.get(id_col).map(|s| clean_identity(s)).unwrap_or_default();
        let replacement = replacement_of(row, &raw.roles, source.replacement_separator);
        if !name.is_empty() && !replacement.is_empty() {
            into.insert(name, replacement);
        }
    }
}

/// Records from headed prose sections. Dates are resolved here and handed to the
/// synthesizer as ISO text so status derivation stays in one place.
fn scan_sections(doc: &str, source: &SourceConfig, scan: &SectionScan, today: NaiveDate) -> Vec<NormalizedRecord> {
    let roles = RoleMap::from_pairs([
        (Role::Identity, 0),
        (Role::EntityId, 1),
        (Role::Deprecated, 2),
        (Role::Shutdown, 3),
    ]);

    markup::sections(doc)
        .into_iter()
        .filter_map(|sec| {
            let lc = sec.text.to_lowercase();
            if !scan.keywords.iter().any(|k| lc.contains(k)) {
                return None;
            }
            let deprecated = prose_date(&sec.text, Prose::DeprecatedAsOf);
            let mut shutdown = prose_date(&sec.text, Prose::ShutdownOn);
            if !shutdown.is_known() {
                shutdown = prose_date(&sec.text, Prose::DiscontinuedAsOf);
            }
            if !deprecated.is_known() && !shutdown.is_known() {
                return None;
            }
            let id = sec.code.clone().unwrap_or_else(|| sec.heading.clone());
            let row = vec![sec.heading, id, deprecated.to_iso(), shutdown.to_iso()];
            synthesize(&row, &roles, &scan.status, source, today)
        })
        .collect()
}
