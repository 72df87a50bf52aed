// src/specs/gemini.rs
//! Gemini API deprecations page: `Model | Release date | Shutdown date | Recommended replacement`.

use crate::engine::roles::{Detect, RoleRule};
use crate::engine::source::{DedupKey, SourceConfig, StatusPolicy, TableKind, TableProfile};
use crate::engine::types::Role;

const RULES: &[RoleRule] = &[
    RoleRule::new(Role::Replacement, Detect::any(&["replacement", "recommended"])),
    RoleRule::new(Role::Identity, Detect::any(&["model"])),
    RoleRule::new(Role::Shutdown, Detect::any(&["shutdown", "cutoff", "sunset"])),
];

pub static SOURCE: SourceConfig = SourceConfig {
    name: "Gemini",
    slug: "gemini",
    url: "https://ai.google.dev/gemini-api/docs/deprecations",
    profiles: &[TableProfile {
        label: "shutdown",
        kind: TableKind::Records,
        detect: Detect::ANY,
        rules: RULES,
        status: StatusPolicy::defaulting_to("active"),
    }],
    vocabulary: &[],
    replacement_separator: " / ",
    dedup: DedupKey::Name,
    sections: None,
};
