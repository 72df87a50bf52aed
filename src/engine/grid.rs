// src/engine/grid.rs
//! Cell matrix builder: turns rows of raw cells into a rectangular grid of text,
//! filling in cells that an earlier row's `rowspan` covers.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::core::sanitize::normalize_ws;
use crate::engine::types::RawCell;

pub type Grid = Vec<Vec<String>>;

/// Spans the builder refuses to guess at. Rows are 0-based, counted after the header.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("row {row}, column {col}: rowspan=0 has no fixed extent")]
    UnboundedRowSpan { row: usize, col: usize },
    #[error("row {row}, column {col}: cell spans {rows} rows and {cols} columns")]
    BlockSpan { row: usize, col: usize, rows: usize, cols: usize },
    #[error("row {row}: {extra} cell(s) left over after filling spanned columns")]
    SpanConflict { row: usize, extra: usize },
}

struct Pending {
    text: String,
    remaining: usize,
}

/// Build a `width`-column grid from `rows`.
///
/// Short rows are padded with empty strings. A same-row `colspan` occupies one column
/// and the next raw cell goes to the following column; the value is not duplicated.
pub fn build_grid(rows: &[Vec<RawCell>], width: usize) -> Result<Grid, GridError> {
    let mut pending: BTreeMap<usize, Pending> = BTreeMap::new();
    let mut out = Vec::with_capacity(rows.len());

    for (r, raw) in rows.iter().enumerate() {
        let mut cells = raw.iter();
        let mut row = Vec::with_capacity(width);
        let mut used_pending = false;

        for col in 0..width {
            if let Some(span) = pending.get_mut(&col) {
                row.push(span.text.clone());
                span.remaining -= 1;
                let done = span.remaining == 0;
                if done {
                    pending.remove(&col);
                }
                used_pending = true;
                continue;
            }

            let Some(cell) = cells.next() else {
                row.push(s!());
                continue;
            };
            if cell.row_span == 0 {
                return Err(GridError::UnboundedRowSpan { row: r, col });
            }
            if cell.row_span > 1 && cell.col_span > 1 {
                return Err(GridError::BlockSpan { row: r, col, rows: cell.row_span, cols: cell.col_span });
            }

            let text = normalize_ws(&cell.text);
            if cell.row_span > 1 {
                pending.insert(col, Pending { text: text.clone(), remaining: cell.row_span - 1 });
            }
            row.push(text);
        }

        let extra = cells.count();
        if extra > 0 && used_pending {
            return Err(GridError::SpanConflict { row: r, extra });
        }
        out.push(row);
    }

    Ok(out)
}
