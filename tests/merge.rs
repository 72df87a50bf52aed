// tests/merge.rs
mod common;

use common::{known, record};
use sunset_scrape::engine::DateValue;
use sunset_scrape::engine::merge::{ReplacementMap, dedup, link_replacements, merge};
use sunset_scrape::engine::source::DedupKey;

#[test]
fn earliest_shutdown_wins() {
    let later = record("Claude v2", known(2026, 6, 19));
    let earlier = record("Claude v2", known(2025, 7, 21));
    let merged = dedup(vec![later, earlier], DedupKey::Name);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].shutdown_on, known(2025, 7, 21));
}

#[test]
fn known_shutdown_beats_unknown() {
    let vague = record("gemini-2.5-pro", DateValue::Unknown);
    let dated = record("gemini-2.5-pro", known(2026, 6, 17));
    let merged = dedup(vec![vague, dated], DedupKey::Name);
    assert_eq!(merged[0].shutdown_on, known(2026, 6, 17));
}

#[test]
fn same_shutdown_prefers_advanced_status() {
    let mut legacy = record("Claude v2", known(2025, 7, 21));
    legacy.status = "legacy".into();
    let mut retired = record("Claude v2", known(2025, 7, 21));
    retired.status = "retired".into();

    for input in [vec![legacy.clone(), retired.clone()], vec![retired.clone(), legacy.clone()]] {
        let merged = dedup(input, DedupKey::Name);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].status, "retired");
    }

    let mut active = record("gpt-4", known(2026, 6, 6));
    active.status = "active".into();
    let deprecated = record("gpt-4", known(2026, 6, 6));
    assert_eq!(dedup(vec![active, deprecated], DedupKey::Name)[0].status, "deprecated");

    // An earlier shutdown still outranks status.
    let mut early_legacy = record("m", known(2025, 1, 1));
    early_legacy.status = "legacy".into();
    let mut late_retired = record("m", known(2025, 2, 1));
    late_retired.status = "retired".into();
    assert_eq!(dedup(vec![late_retired, early_legacy], DedupKey::Name)[0].status, "legacy");
}

#[test]
fn merge_is_commutative() {
    let mut a = record("m", known(2026, 6, 19));
    a.status = "legacy".into();
    let mut b = record("m", known(2026, 6, 19));
    b.status = "retired".into();
    let c = record("n", DateValue::Unknown);

    let ab = merge(vec![a.clone(), b.clone()], &ReplacementMap::default(), DedupKey::Name);
    let ba = merge(vec![b.clone(), a.clone()], &ReplacementMap::default(), DedupKey::Name);
    assert_eq!(ab, ba);

    // Distinct identities keep first-appearance order.
    let one = merge(vec![a.clone(), c.clone()], &ReplacementMap::default(), DedupKey::Name);
    assert_eq!(one[0].entity_name, "m");
    assert_eq!(one[1].entity_name, "n");
}

#[test]
fn merge_is_idempotent() {
    let mut repl = ReplacementMap::default();
    repl.insert("claude-3-haiku-20240307", "claude-haiku-4-5-20251001");
    let input = vec![
        record("claude-3-haiku-20240307", known(2026, 4, 20)),
        record("claude-3-haiku-20240307", DateValue::Unknown),
        record("claude-opus-4-6", known(2027, 2, 5)),
    ];
    let once = merge(input, &repl, DedupKey::Name);
    let twice = merge(once.clone(), &repl, DedupKey::Name);
    assert_eq!(once, twice);
    assert_eq!(once.len(), 2);
}

#[test]
fn name_and_id_keeps_distinct_ids() {
    let mut a = record("Claude 3 Opus", known(2026, 8, 23));
    a.entity_id = Some("claude-3-opus@20240229".into());
    let mut b = record("Claude 3 Opus", known(2026, 1, 5));
    b.entity_id = Some("claude-3-opus@20240301".into());

    assert_eq!(dedup(vec![a.clone(), b.clone()], DedupKey::NameAndId).len(), 2);
    let by_name = dedup(vec![a, b], DedupKey::Name);
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].shutdown_on, known(2026, 1, 5));
}

#[test]
fn replacement_linking_is_exact_match() {
    let mut repl = ReplacementMap::default();
    repl.insert("claude-3-7-sonnet-20250219", "claude-opus-4-6");
    let records = vec![
        record("claude-3-7-sonnet-20250219", known(2026, 2, 19)),
        record("Claude-3-7-Sonnet-20250219", known(2026, 2, 19)),
    ];
    let linked = link_replacements(records.clone(), &repl);
    assert_eq!(linked[0].replacement, "claude-opus-4-6");
    assert_eq!(linked[1].replacement, "");
    // Inputs are left untouched.
    assert_eq!(records[0].replacement, "");
}

#[test]
fn later_history_table_overrides_earlier() {
    let mut repl = ReplacementMap::default();
    repl.insert("claude-2.1", "claude-3-opus");
    repl.insert("claude-2.1", "claude-opus-4-6");
    assert_eq!(repl.get("claude-2.1"), Some("claude-opus-4-6"));
    assert_eq!(repl.len(), 1);
}
