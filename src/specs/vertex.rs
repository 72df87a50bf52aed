// src/specs/vertex.rs
//! Vertex AI partner-model deprecations page.
//!
//! Sometimes a table (`Model | Model ID | Deprecation date | Shutdown date`), sometimes
//! only headed paragraphs ("… deprecated as of February 23, 2026. Shutdown date: …").
//! Paragraphs are read only when the tables yield nothing.

use crate::engine::roles::{Detect, RoleRule};
use crate::engine::source::{DedupKey, SectionScan, SourceConfig, StatusPolicy, TableKind, TableProfile};
use crate::engine::types::Role;

const RULES: &[RoleRule] = &[
    RoleRule::new(Role::EntityId, Detect::any(&["model id"])),
    RoleRule::new(Role::Identity, Detect::any(&["model"]).excluding(&["model id"])),
    RoleRule::new(Role::Deprecated, Detect::any(&["deprecat"])),
    RoleRule::new(Role::Shutdown, Detect::any(&["shutdown", "end of life", "eol", "discontinu"])),
];

pub static SOURCE: SourceConfig = SourceConfig {
    name: "Vertex AI",
    slug: "vertex",
    url: "https://docs.cloud.google.com/vertex-ai/generative-ai/docs/deprecations/partner-models",
    profiles: &[TableProfile {
        label: "partner models",
        kind: TableKind::Records,
        detect: Detect::ANY,
        rules: RULES,
        status: StatusPolicy::defaulting_to("deprecated"),
    }],
    vocabulary: &[],
    replacement_separator: " / ",
    dedup: DedupKey::NameAndId,
    sections: Some(SectionScan {
        keywords: &["deprecat", "shutdown"],
        status: StatusPolicy::defaulting_to("deprecated"),
    }),
};
