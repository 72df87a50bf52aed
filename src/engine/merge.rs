// src/engine/merge.rs
//! Cross-table merge for one source: link replacements from history tables, then
//! collapse duplicate records for the same model.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::engine::source::DedupKey;
use crate::engine::types::NormalizedRecord;

/// Model name → replacement, collected from `Replacements` tables.
///
/// Tables are applied in discovery order, so a later table overrides an earlier one
/// for the same name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReplacementMap {
    by_name: HashMap<String, String>,
}

impl ReplacementMap {
    pub fn insert(&mut self, name: impl Into<String>, replacement: impl Into<String>) {
        self.by_name.insert(name.into(), replacement.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.by_name.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

type Key = (String, Option<String>);

fn key_of(rec: &NormalizedRecord, dedup: DedupKey) -> Key {
    match dedup {
        DedupKey::Name => (rec.entity_name.clone(), None),
        DedupKey::NameAndId => (rec.entity_name.clone(), rec.entity_id.clone()),
    }
}

/// How far along the lifecycle a status is: retired > deprecated > legacy > anything else.
fn status_rank(status: &str) -> u8 {
    match status {
        "retired" => 3,
        "deprecated" => 2,
        "legacy" => 1,
        _ => 0,
    }
}

/// `candidate` beats `current` when its shutdown is known and earlier (unknown sorts
/// last). On the same shutdown the more advanced status wins, then full record order,
/// so the outcome never depends on input order.
fn prefers(candidate: &NormalizedRecord, current: &NormalizedRecord) -> bool {
    let rank = |r: &NormalizedRecord| Reverse(status_rank(&r.status));
    (candidate.shutdown_on, rank(candidate), candidate) < (current.shutdown_on, rank(current), current)
}

/// Exact-name replacement linking. Records without an entry keep their own replacement.
pub fn link_replacements(records: Vec<NormalizedRecord>, replacements: &ReplacementMap) -> Vec<NormalizedRecord> {
    if replacements.is_empty() {
        return records;
    }
    records
        .into_iter()
        .map(|rec| match replacements.get(&rec.entity_name) {
            Some(r) if r != rec.replacement => rec.with_replacement(r),
            _ => rec,
        })
        .collect()
}

/// One record per key, kept at the position where the key first appeared.
pub fn dedup(records: Vec<NormalizedRecord>, dedup: DedupKey) -> Vec<NormalizedRecord> {
    let mut order: Vec<Key> = Vec::new();
    let mut best: HashMap<Key, NormalizedRecord> = HashMap::new();

    for rec in records {
        match best.entry(key_of(&rec, dedup)) {
            Entry::Vacant(slot) => {
                order.push(slot.key().clone());
                slot.insert(rec);
            }
            Entry::Occupied(mut slot) => {
                if prefers(&rec, slot.get()) {
                    logd!("merge: {} -> shutdown {} replaces {}", rec.entity_name, rec.shutdown_on, slot.get().shutdown_on);
                    slot.insert(rec);
                }
            }
        }
    }

    order.into_iter().filter_map(|k| best.remove(&k)).collect()
}

/// Linking followed by dedup. Idempotent: merging an already merged set returns it unchanged.
pub fn merge(records: Vec<NormalizedRecord>, replacements: &ReplacementMap, key: DedupKey) -> Vec<NormalizedRecord> {
    dedup(link_replacements(records, replacements), key)
}
