// src/specs/openai.rs
//! OpenAI deprecations page.
//!
//! Tables come in two shapes, both with the shutdown date first:
//! `Shutdown date | Model / system | Recommended replacement` and
//! `Shutdown date | Deprecated model | Deprecated model price | Recommended replacement`.
//! Neither states a status.

use crate::engine::roles::{Detect, RoleRule};
use crate::engine::source::{DedupKey, SourceConfig, StatusPolicy, TableKind, TableProfile};
use crate::engine::types::Role;

const RULES: &[RoleRule] = &[
    RoleRule::new(Role::Shutdown, Detect::any(&["shutdown", "retirement"])),
    RoleRule::new(Role::Replacement, Detect::any(&["replacement", "recommended"])),
    RoleRule::new(Role::Identity, Detect::any(&["model", "system"]).excluding(&["price", "replacement", "recommended"])),
];

pub static SOURCE: SourceConfig = SourceConfig {
    name: "OpenAI",
    slug: "openai",
    url: "https://developers.openai.com/api/docs/deprecations/",
    profiles: &[TableProfile {
        label: "shutdown",
        kind: TableKind::Records,
        detect: Detect::ANY,
        rules: RULES,
        status: StatusPolicy::defaulting_to("deprecated"),
    }],
    vocabulary: &[],
    replacement_separator: " / ",
    dedup: DedupKey::Name,
    sections: None,
};
