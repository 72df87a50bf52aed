// src/engine/markup.rs
//! Pulls tables and prose sections out of a documentation page.

use crate::core::html::{self, attr, find_close_tag, find_open_tag, open_tag, text_of, to_lower};
use crate::engine::types::RawCell;

/// A table as written: header texts plus body rows of raw cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MarkupTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<RawCell>>,
}

/// Top-level `<table>` blocks in discovery order.
pub fn tables(doc: &str) -> Vec<&str> {
    html::blocks_ci(doc, "table")
}

/// Header row is the first `<tr>`. `None` when there is no header cell at all.
pub fn read_table(table: &str) -> Option<MarkupTable> {
    let mut rows = row_blocks(table).into_iter().map(read_row);
    let headers: Vec<String> = rows.next()?.into_iter().map(|c| c.text).collect();
    if headers.is_empty() {
        return None;
    }
    Some(MarkupTable { headers, rows: rows.collect() })
}

fn span(open: &str, name: &str) -> usize {
    attr(open, name)
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(1)
}

/// `<tr>` blocks of a table. A row ends at its close tag, the next row, or the table end,
/// so pages that never close their rows still split correctly.
fn row_blocks(table: &str) -> Vec<&str> {
    let lc = to_lower(table);
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some(start) = find_open_tag(&lc, "tr", pos) {
        let body = start + "<tr".len();
        let next = find_open_tag(&lc, "tr", body);
        let close = find_close_tag(&lc, "tr", body)
            .filter(|&c| next.is_none_or(|n| c < n))
            .map(|c| lc[c..].find('>').map(|g| c + g + 1).unwrap_or(lc.len()));
        let end = close.or(next).unwrap_or(lc.len());
        out.push(&table[start..end]);
        pos = end;
    }
    out
}

/// Cells of one `<tr>` block. A cell ends at its close tag, the next cell, or the row end.
fn read_row(tr: &str) -> Vec<RawCell> {
    let lc = to_lower(tr);
    let inner_start = tr.find('>').map(|g| g + 1).unwrap_or(tr.len());
    let row_end = find_close_tag(&lc, "tr", inner_start).unwrap_or(tr.len());

    let next_cell = |from: usize| -> Option<usize> {
        let td = find_open_tag(&lc, "td", from);
        let th = find_open_tag(&lc, "th", from);
        match (td, th) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
        .filter(|&at| at < row_end)
    };

    let mut cells = Vec::new();
    let mut pos = inner_start;
    while let Some(at) = next_cell(pos) {
        let open = open_tag(&tr[at..row_end]);
        let content_start = at + open.len();
        let following = next_cell(content_start).unwrap_or(row_end);
        let close = ["td", "th"]
            .iter()
            .filter_map(|name| find_close_tag(&lc, name, content_start))
            .min()
            .unwrap_or(row_end);
        let content_end = close.min(following);

        cells.push(RawCell {
            text: text_of(&tr[content_start..content_end]),
            row_span: span(open, "rowspan"),
            col_span: span(open, "colspan"),
        });
        pos = content_end.max(content_start);
    }
    cells
}

/// A heading and the prose under it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub heading: String,
    /// `<code>` text inside the heading, if any.
    pub code: Option<String>,
    pub text: String,
}

const SECTION_TAGS: [&str; 3] = ["section", "div", "article"];
const HEADING_TAGS: [&str; 3] = ["h2", "h3", "h4"];

/// Blocks that own a heading and do not wrap another such block.
pub fn sections(doc: &str) -> Vec<Section> {
    let lc = to_lower(doc);
    let headings = html::block_spans(&lc, &HEADING_TAGS);

    // Section blocks paired with the first heading that opens inside them, by start.
    let headed: Vec<((usize, usize), (usize, usize))> = html::block_spans(&lc, &SECTION_TAGS)
        .into_iter()
        .filter_map(|(s, e)| {
            let i = headings.partition_point(|&(hs, _)| hs <= s);
            let &(hs, he) = headings.get(i).filter(|&&(hs, _)| hs < e)?;
            Some(((s, e), (hs, he.min(e))))
        })
        .collect();

    let mut out = Vec::new();
    for (k, &((s, e), (hs, he))) in headed.iter().enumerate() {
        // Skip wrappers: the innermost headed block speaks for itself.
        if headed.get(k + 1).is_some_and(|&((next, _), _)| next < e) {
            continue;
        }
        let heading_block = &doc[hs..he];
        let heading = text_of(heading_block);
        if heading.is_empty() {
            continue;
        }
        let code = html::next_block_ci(heading_block, "code", 0)
            .map(|(cs, ce)| text_of(&heading_block[cs..ce]))
            .filter(|c| !c.is_empty());
        out.push(Section { heading, code, text: text_of(&doc[s..e]) });
    }
    out
}
