// src/engine/roles.rs
//! Column role inference from free-text headers.

use std::collections::BTreeMap;

use crate::core::html::to_lower;
use crate::engine::types::Role;

/// Phrase filter over lowercase text: at least one `any` phrase (unless `any` is empty),
/// every `all` phrase, and no `none` phrase.
#[derive(Clone, Copy, Debug)]
pub struct Detect {
    pub any: &'static [&'static str],
    pub all: &'static [&'static str],
    pub none: &'static [&'static str],
}

impl Detect {
    /// Matches every header text.
    pub const ANY: Detect = Detect { any: &[], all: &[], none: &[] };

    pub const fn any(phrases: &'static [&'static str]) -> Self {
        Detect { any: phrases, all: &[], none: &[] }
    }

    pub const fn all(phrases: &'static [&'static str]) -> Self {
        Detect { any: &[], all: phrases, none: &[] }
    }

    pub const fn excluding(self, phrases: &'static [&'static str]) -> Self {
        Detect { none: phrases, ..self }
    }

    pub fn matches(&self, lc: &str) -> bool {
        (self.any.is_empty() || self.any.iter().any(|p| lc.contains(p)))
            && self.all.iter().all(|p| lc.contains(p))
            && !self.none.iter().any(|p| lc.contains(p))
    }
}

/// Assigns `role` to a header that passes `filter`.
#[derive(Clone, Copy, Debug)]
pub struct RoleRule {
    pub role: Role,
    pub filter: Detect,
}

impl RoleRule {
    pub const fn new(role: Role, filter: Detect) -> Self {
        Self { role, filter }
    }
}

/// Role → column index. A role may be missing; a column holds at most one role.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoleMap {
    slots: BTreeMap<Role, usize>,
}

impl RoleMap {
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Role, usize)>) -> Self {
        Self { slots: pairs.into_iter().collect() }
    }

    pub fn get(&self, role: Role) -> Option<usize> {
        self.slots.get(&role).copied()
    }

    pub fn identity(&self) -> Option<usize> {
        self.get(Role::Identity)
    }

    pub fn contains(&self, role: Role) -> bool {
        self.slots.contains_key(&role)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Walk headers left to right; each header takes the first rule (in priority order)
/// that matches it and whose role is still free. The first matching header wins a role.
pub fn infer_roles<S: AsRef<str>>(headers: &[S], rules: &[RoleRule]) -> RoleMap {
    let mut map = RoleMap::default();
    for (i, header) in headers.iter().enumerate() {
        let lc = to_lower(header.as_ref());
        let hit = rules
            .iter()
            .find(|rule| !map.contains(rule.role) && rule.filter.matches(&lc));
        if let Some(rule) = hit {
            map.slots.insert(rule.role, i);
        }
    }
    map
}

/// Header row joined into one lowercase string, for table-type detection.
pub fn header_text<S: AsRef<str>>(headers: &[S]) -> String {
    let joined = headers.iter().map(|h| h.as_ref()).collect::<Vec<_>>().join(" ");
    to_lower(&joined)
}
