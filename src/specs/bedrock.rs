// src/specs/bedrock.rs
//! Amazon Bedrock model lifecycle page.
//!
//! Two table types, told apart by their headers:
//! - *legacy*: has "Legacy date" and usually "Public extended access date"; models still served.
//! - *end-of-life*: has "EOL date" and no extended-access column; every row is retired.
//!
//! Model and replacement columns are often merged vertically with `rowspan` when a model
//! has per-region dates, and a model can appear in both tables. The earliest stated
//! shutdown wins.

use crate::engine::roles::{Detect, RoleRule};
use crate::engine::source::{DedupKey, SourceConfig, StatusPolicy, TableKind, TableProfile};
use crate::engine::types::Role;

const RULES: &[RoleRule] = &[
    RoleRule::new(Role::ReplacementId, Detect::all(&["recommended", "model id"])),
    RoleRule::new(Role::Replacement, Detect::any(&["recommended"]).excluding(&["model id"])),
    RoleRule::new(Role::Identity, Detect::any(&["model version"]).excluding(&["replacement", "recommended"])),
    RoleRule::new(Role::Deprecated, Detect::any(&["legacy date"])),
    RoleRule::new(Role::Shutdown, Detect::any(&["eol", "end of life"]).excluding(&["extended"])),
];

pub static SOURCE: SourceConfig = SourceConfig {
    name: "Bedrock",
    slug: "bedrock",
    url: "https://docs.aws.amazon.com/bedrock/latest/userguide/model-lifecycle.html",
    profiles: &[
        TableProfile {
            label: "end-of-life",
            kind: TableKind::Records,
            detect: Detect::all(&["eol date"]).excluding(&["extended"]),
            rules: RULES,
            status: StatusPolicy::fixed("retired"),
        },
        TableProfile {
            label: "legacy",
            kind: TableKind::Records,
            detect: Detect::any(&["legacy date"]),
            rules: RULES,
            status: StatusPolicy { fixed: None, dated: "legacy", default: "legacy" },
        },
    ],
    vocabulary: &[],
    replacement_separator: " / ",
    dedup: DedupKey::Name,
    sections: None,
};
