// src/engine/source.rs
//! Per-vendor configuration consumed by the engine. Values are `'static` items
//! (see `crate::specs`), so one copy is shared read-only by every caller and thread.

use crate::engine::roles::{Detect, RoleRule, header_text};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableKind {
    /// Each row is one model.
    Records,
    /// Rows map a model name to its recommended replacement; merged into `Records` rows.
    Replacements,
}

/// How a row's status is decided when the table does not state it.
#[derive(Clone, Copy, Debug)]
pub struct StatusPolicy {
    /// Literal applied to every row of the table.
    pub fixed: Option<&'static str>,
    /// A date is known but the shutdown is still ahead.
    pub dated: &'static str,
    /// No date at all.
    pub default: &'static str,
}

impl StatusPolicy {
    pub const fn defaulting_to(default: &'static str) -> Self {
        StatusPolicy { fixed: None, dated: "deprecated", default }
    }

    pub const fn fixed(status: &'static str) -> Self {
        StatusPolicy { fixed: Some(status), dated: status, default: status }
    }
}

/// One kind of table a source page carries, recognized by its header row.
#[derive(Clone, Copy, Debug)]
pub struct TableProfile {
    pub label: &'static str,
    pub kind: TableKind,
    pub detect: Detect,
    /// Priority order: more specific phrases first.
    pub rules: &'static [RoleRule],
    pub status: StatusPolicy,
}

/// Which records describe the same model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DedupKey {
    Name,
    NameAndId,
}

/// Prose-section fallback for pages that describe deprecations in paragraphs.
#[derive(Clone, Copy, Debug)]
pub struct SectionScan {
    /// A section must mention one of these (lowercase) to be considered.
    pub keywords: &'static [&'static str],
    pub status: StatusPolicy,
}

#[derive(Clone, Copy, Debug)]
pub struct SourceConfig {
    /// Display name written into every record.
    pub name: &'static str,
    /// Short lowercase key, also the input file stem.
    pub slug: &'static str,
    pub url: &'static str,
    pub profiles: &'static [TableProfile],
    /// Raw status text (lowercase) → normalized status.
    pub vocabulary: &'static [(&'static str, &'static str)],
    pub replacement_separator: &'static str,
    pub dedup: DedupKey,
    pub sections: Option<SectionScan>,
}

impl SourceConfig {
    /// First profile whose discriminator accepts this header row.
    pub fn profile_for<S: AsRef<str>>(&self, headers: &[S]) -> Option<&'static TableProfile> {
        let text = header_text(headers);
        let profiles: &'static [TableProfile] = self.profiles;
        profiles.iter().find(|p| p.detect.matches(&text))
    }

    /// Map a raw status through the vocabulary; unmapped text is kept, lowercased.
    pub fn map_status(&self, raw: &str) -> String {
        let lc = raw.trim().to_lowercase();
        self.vocabulary
            .iter()
            .find(|(from, _)| *from == lc)
            .map(|(_, to)| to.to_string())
            .unwrap_or(lc)
    }
}
