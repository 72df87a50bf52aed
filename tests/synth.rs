// tests/synth.rs
mod common;

use common::{known, today, ymd};
use sunset_scrape::engine::roles::RoleMap;
use sunset_scrape::engine::source::{DedupKey, SourceConfig, StatusPolicy};
use sunset_scrape::engine::synth::{derive_status, replacement_of, synthesize};
use sunset_scrape::engine::{DateValue, Role};
use sunset_scrape::specs;

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|s| s.to_string()).collect()
}

fn three_column() -> RoleMap {
    RoleMap::from_pairs([(Role::Shutdown, 0), (Role::Identity, 1), (Role::Replacement, 2)])
}

#[test]
fn three_column_openai_row() {
    let rec = synthesize(
        &row(&["2026-02-17", "chatgpt-4o-latest", "gpt-5.1-chat-latest"]),
        &three_column(),
        &StatusPolicy::defaulting_to("deprecated"),
        &specs::openai::SOURCE,
        today(),
    )
    .unwrap();
    assert_eq!(rec.source, "OpenAI");
    assert_eq!(rec.entity_name, "chatgpt-4o-latest");
    assert_eq!(rec.shutdown_on, known(2026, 2, 17));
    assert_eq!(rec.deprecated_on, DateValue::Unknown);
    assert_eq!(rec.replacement, "gpt-5.1-chat-latest");
    assert_eq!(rec.status, "deprecated");
    assert_eq!(rec.entity_id, None);
}

#[test]
fn empty_identity_drops_row() {
    let policy = StatusPolicy::defaulting_to("active");
    for name in ["", "   ", "``"] {
        let r = synthesize(&row(&["2026-02-17", name, "x"]), &three_column(), &policy, &specs::openai::SOURCE, today());
        assert!(r.is_none(), "{name:?}");
    }
}

#[test]
fn identity_is_cleaned() {
    let rec = synthesize(
        &row(&["", " `gpt-4-0314` ", ""]),
        &three_column(),
        &StatusPolicy::defaulting_to("active"),
        &specs::openai::SOURCE,
        today(),
    )
    .unwrap();
    assert_eq!(rec.entity_name, "gpt-4-0314");
    assert_eq!(rec.status, "active");
    assert_eq!(rec.replacement, "");
}

#[test]
fn status_from_dates_and_today() {
    let policy = StatusPolicy::defaulting_to("active");
    let t = today();
    assert_eq!(derive_status(&policy, DateValue::Unknown, known(2025, 7, 21), t), "retired");
    // Shutdown on today counts as retired.
    assert_eq!(derive_status(&policy, DateValue::Unknown, DateValue::Known(t), t), "retired");
    assert_eq!(derive_status(&policy, DateValue::Unknown, known(2026, 6, 19), t), "deprecated");
    assert_eq!(derive_status(&policy, known(2025, 1, 1), DateValue::Unknown, t), "deprecated");
    assert_eq!(derive_status(&policy, DateValue::Unknown, DateValue::Unknown, t), "active");
}

#[test]
fn status_depends_on_explicit_today() {
    let policy = StatusPolicy::defaulting_to("active");
    let shutdown = known(2026, 2, 17);
    assert_eq!(derive_status(&policy, DateValue::Unknown, shutdown, ymd(2026, 2, 16)), "deprecated");
    assert_eq!(derive_status(&policy, DateValue::Unknown, shutdown, ymd(2026, 2, 17)), "retired");
}

#[test]
fn fixed_and_dated_policies() {
    let t = today();
    let eol = StatusPolicy::fixed("retired");
    assert_eq!(derive_status(&eol, DateValue::Unknown, DateValue::Unknown, t), "retired");
    let legacy = StatusPolicy { fixed: None, dated: "legacy", default: "legacy" };
    assert_eq!(derive_status(&legacy, known(2026, 6, 19), known(2026, 12, 19), t), "legacy");
    assert_eq!(derive_status(&legacy, known(2025, 1, 1), known(2025, 7, 21), t), "retired");
}

#[test]
fn status_column_goes_through_vocabulary() {
    let roles = RoleMap::from_pairs([(Role::Identity, 0), (Role::Status, 1), (Role::Shutdown, 2)]);
    let policy = StatusPolicy::defaulting_to("active");
    let src = &specs::anthropic::SOURCE;

    let rec = synthesize(&row(&["claude-opus-4-6", "Active", "2025-01-01"]), &roles, &policy, src, today()).unwrap();
    // Stated status wins over the past shutdown date.
    assert_eq!(rec.status, "active");

    let rec = synthesize(&row(&["claude-x", "Sunsetting Soon", ""]), &roles, &policy, src, today()).unwrap();
    assert_eq!(rec.status, "sunsetting soon");

    let rec = synthesize(&row(&["claude-y", "", "2025-01-01"]), &roles, &policy, src, today()).unwrap();
    assert_eq!(rec.status, "retired");
}

static SUNSET: SourceConfig = SourceConfig {
    name: "Sunset",
    slug: "sunset",
    url: "https://example.com/deprecations",
    profiles: &[],
    vocabulary: &[("sunsetting", "deprecated"), ("ga", "active")],
    replacement_separator: " / ",
    dedup: DedupKey::Name,
    sections: None,
};

#[test]
fn vocabulary_rewrites_stated_status() {
    assert_eq!(SUNSET.map_status("  Sunsetting "), "deprecated");
    assert_eq!(SUNSET.map_status("GA"), "active");
    assert_eq!(SUNSET.map_status("Preview Only"), "preview only");

    let roles = RoleMap::from_pairs([(Role::Identity, 0), (Role::Status, 1), (Role::Shutdown, 2)]);
    let policy = StatusPolicy::defaulting_to("active");

    let rec = synthesize(&row(&["model-a", "Sunsetting", "2027-01-01"]), &roles, &policy, &SUNSET, today()).unwrap();
    assert_eq!(rec.status, "deprecated");
    assert_eq!(rec.source, "Sunset");

    // A past shutdown does not override a stated status.
    let rec = synthesize(&row(&["model-b", "GA", "2025-01-01"]), &roles, &policy, &SUNSET, today()).unwrap();
    assert_eq!(rec.status, "active");

    let rec = synthesize(&row(&["model-c", "Preview Only", ""]), &roles, &policy, &SUNSET, today()).unwrap();
    assert_eq!(rec.status, "preview only");
}

#[test]
fn entity_id_placeholder_is_absent() {
    let roles = RoleMap::from_pairs([(Role::Identity, 0), (Role::EntityId, 1)]);
    let policy = StatusPolicy::defaulting_to("deprecated");
    let rec = synthesize(&row(&["Claude 3 Opus", "N/A"]), &roles, &policy, &specs::vertex::SOURCE, today()).unwrap();
    assert_eq!(rec.entity_id, None);
    let rec = synthesize(&row(&["Claude 3 Opus", "claude-3-opus@20240229"]), &roles, &policy, &specs::vertex::SOURCE, today()).unwrap();
    assert_eq!(rec.entity_id.as_deref(), Some("claude-3-opus@20240229"));
}

#[test]
fn replacement_name_and_id_are_joined() {
    let roles = RoleMap::from_pairs([(Role::Identity, 0), (Role::Replacement, 1), (Role::ReplacementId, 2)]);
    let r = row(&["Claude v2", "Claude Sonnet 4.5", "anthropic.claude-sonnet-4-5-20250929-v1:0"]);
    assert_eq!(replacement_of(&r, &roles, " / "), "Claude Sonnet 4.5 / anthropic.claude-sonnet-4-5-20250929-v1:0");

    let r = row(&["Claude v2", "Claude Sonnet 4.5", "N/A"]);
    assert_eq!(replacement_of(&r, &roles, " / "), "Claude Sonnet 4.5");

    let r = row(&["Claude v2", "—", "—"]);
    assert_eq!(replacement_of(&r, &roles, " / "), "");
}
