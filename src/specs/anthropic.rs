// src/specs/anthropic.rs
//! Anthropic model deprecations page.
//!
//! One *status* table (`API model name | Current state | Deprecated | Tentative retirement date`)
//! and several *history* tables (`Retirement Date | Deprecated Model | Recommended replacement`)
//! that only contribute replacements.

use crate::engine::roles::{Detect, RoleRule};
use crate::engine::source::{DedupKey, SourceConfig, StatusPolicy, TableKind, TableProfile};
use crate::engine::types::Role;

const STATUS_RULES: &[RoleRule] = &[
    RoleRule::new(Role::Identity, Detect::any(&["model name", "api model"])),
    RoleRule::new(Role::Status, Detect::any(&["current state", "state", "status"])),
    RoleRule::new(Role::Deprecated, Detect::any(&["deprecated"]).excluding(&["retirement", "date"])),
    RoleRule::new(Role::Shutdown, Detect::any(&["retirement", "tentative"])),
];

const HISTORY_RULES: &[RoleRule] = &[
    RoleRule::new(Role::Replacement, Detect::any(&["replacement", "recommended"])),
    RoleRule::new(Role::Identity, Detect::any(&["deprecated model", "model"])),
];

pub static SOURCE: SourceConfig = SourceConfig {
    name: "Anthropic",
    slug: "anthropic",
    url: "https://platform.claude.com/docs/en/about-claude/model-deprecations",
    profiles: &[
        TableProfile {
            label: "status",
            kind: TableKind::Records,
            detect: Detect::any(&["current state", "api model name"]),
            rules: STATUS_RULES,
            status: StatusPolicy::defaulting_to("active"),
        },
        TableProfile {
            label: "history",
            kind: TableKind::Replacements,
            detect: Detect::all(&["retirement date", "deprecated model"]),
            rules: HISTORY_RULES,
            status: StatusPolicy::defaulting_to("retired"),
        },
    ],
    vocabulary: &[
        ("active", "active"),
        ("legacy", "legacy"),
        ("deprecated", "deprecated"),
        ("retired", "retired"),
    ],
    replacement_separator: " / ",
    dedup: DedupKey::Name,
    sections: None,
};
