// src/core/html.rs
//! Low-level HTML string scanning.
//!
//! Deliberately naive: no DOM, just case-insensitive tag blocks over the raw text.
//! Lowercasing is ASCII-only so byte offsets in the lowered copy line up with the original.

use super::sanitize::{normalize_entities, normalize_hyphens, normalize_ws};

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

#[inline]
fn ends_tag_name(b: Option<&u8>) -> bool {
    matches!(b, Some(c) if c.is_ascii_whitespace() || *c == b'>' || *c == b'/')
}

/// Offset of the next `<name` opener at or after `from` in an already-lowered document.
/// `<th` never matches `<thead>`.
pub fn find_open_tag(lc: &str, name: &str, from: usize) -> Option<usize> {
    let pat = format!("<{name}");
    let mut pos = from;
    loop {
        let at = lc.get(pos..)?.find(&pat)? + pos;
        let after = at + pat.len();
        if ends_tag_name(lc.as_bytes().get(after)) {
            return Some(at);
        }
        pos = after;
    }
}

/// Offset of the next `</name>` at or after `from` in an already-lowered document.
pub fn find_close_tag(lc: &str, name: &str, from: usize) -> Option<usize> {
    let pat = format!("</{name}");
    let mut pos = from;
    loop {
        let at = lc.get(pos..)?.find(&pat)? + pos;
        let after = at + pat.len();
        if ends_tag_name(lc.as_bytes().get(after)) {
            return Some(at);
        }
        pos = after;
    }
}

/// End (exclusive) of the tag starting at `at`.
fn tag_end(lc: &str, at: usize) -> usize {
    lc[at..].find('>').map(|g| at + g + 1).unwrap_or(lc.len())
}

/// `(start, end)` of the block opened at `start`, skipping over nested blocks of the same tag.
/// An unclosed block runs to the end of the document.
fn balanced_from(lc: &str, name: &str, start: usize) -> (usize, usize) {
    let mut depth = 0usize;
    let mut pos = start;
    loop {
        let Some(close) = find_close_tag(lc, name, pos) else {
            return (start, lc.len());
        };
        match find_open_tag(lc, name, pos) {
            Some(open) if open < close => {
                depth += 1;
                pos = open + name.len() + 1;
            }
            _ => {
                let end = tag_end(lc, close);
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return (start, end);
                }
                pos = end;
            }
        }
    }
}

/// Find the next complete `<name …> … </name>` block from `from` onwards, case-insensitive.
pub fn next_block_ci(s: &str, name: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let start = find_open_tag(&lc, name, from)?;
    Some(balanced_from(&lc, name, start))
}

/// Every top-level `name` block in document order. Blocks nested inside another are not
/// returned separately.
pub fn blocks_ci<'a>(s: &'a str, name: &str) -> Vec<&'a str> {
    let lc = to_lower(s);
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some(start) = find_open_tag(&lc, name, pos) {
        let (b_s, b_e) = balanced_from(&lc, name, start);
        out.push(&s[b_s..b_e]);
        pos = b_e;
    }
    out
}

/// `(start, end)` of every block of any of `names` in an already-lowered document,
/// nested ones included, ordered by where they open. One pass with a stack per name;
/// unclosed blocks run to the end of the document.
pub fn block_spans(lc: &str, names: &[&str]) -> Vec<(usize, usize)> {
    let bytes = lc.as_bytes();
    let mut open: Vec<Vec<usize>> = vec![Vec::new(); names.len()];
    let mut found: Vec<(usize, usize)> = Vec::new();
    let mut pos = 0usize;
    while let Some(rel) = lc.get(pos..).and_then(|rest| rest.find('<')) {
        let at = pos + rel;
        let closing = bytes.get(at + 1) == Some(&b'/');
        let name_at = if closing { at + 2 } else { at + 1 };
        let hit = names.iter().position(|name| {
            lc.get(name_at..).is_some_and(|rest| rest.starts_with(name))
                && ends_tag_name(bytes.get(name_at + name.len()))
        });
        match hit {
            Some(i) if closing => {
                let end = tag_end(lc, at);
                // stray closers are ignored
                if let Some(start) = open[i].pop() {
                    found.push((start, end));
                }
                pos = end;
            }
            Some(i) => {
                open[i].push(at);
                pos = at + 1;
            }
            None => pos = at + 1,
        }
    }
    found.extend(open.into_iter().flatten().map(|start| (start, lc.len())));
    found.sort_unstable();
    found
}

/// The opening tag of a block, `<` through `>`.
pub fn open_tag(block: &str) -> &str {
    match block.find('>') {
        Some(g) => &block[..=g],
        None => block,
    }
}

/// Read an attribute value from an opening tag. Quoted or bare values both work.
pub fn attr(open_tag: &str, name: &str) -> Option<String> {
    let lc = to_lower(open_tag);
    let pat = format!("{name}=");
    let mut pos = 0usize;
    let at = loop {
        let at = lc.get(pos..)?.find(&pat)? + pos;
        let boundary = at == 0 || lc.as_bytes()[at - 1].is_ascii_whitespace();
        if boundary { break at; }
        pos = at + pat.len();
    };
    let val = open_tag[at + pat.len()..].trim_start();
    let (quote, start_off) = match val.as_bytes().first() {
        Some(b'"') => (Some('"'), 1),
        Some(b'\'') => (Some('\''), 1),
        _ => (None, 0),
    };
    let end = match quote {
        Some(q) => val[start_off..].find(q).map(|e| start_off + e),
        None => val.find(|c: char| c.is_ascii_whitespace() || c == '>' || c == '/'),
    }
    .unwrap_or(val.len());
    Some(val[start_off..end].to_string())
}

/// Remove all tags `<...>`, then collapse whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&out)
}

/// Visible text of a markup fragment: tags stripped, entities decoded, hyphens unified.
pub fn text_of(fragment: &str) -> String {
    let stripped = strip_tags(fragment);
    normalize_ws(&normalize_hyphens(&normalize_entities(&stripped)))
}
