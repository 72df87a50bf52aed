// src/engine/mod.rs
//! # Extraction engine
//!
//! Turns one vendor page into an ordered set of `NormalizedRecord`s.
//!
//! ```text
//! markup ─→ grid ─┬→ synth ─→ merge
//!          roles ─┘   ↑
//!          dates ─────┘
//! ```
//!
//! - `markup` finds tables/sections in the raw HTML.
//! - `grid` resolves `rowspan` into a rectangular grid.
//! - `roles` maps free-text headers to column roles using a source's rules.
//! - `dates` reads dates out of cells and prose.
//! - `synth` builds one record per row and derives status from an explicit `today`.
//! - `merge` links replacements and collapses duplicates.
//!
//! The engine is source-agnostic; everything vendor-specific is a `SourceConfig`
//! (see `crate::specs`). Pure and single-threaded: no I/O, no clock, no shared state.
pub mod dates;
pub mod engine;
pub mod grid;
pub mod markup;
pub mod merge;
pub mod roles;
pub mod source;
pub mod synth;
pub mod types;

pub use engine::{RawTable, extract};
pub use types::{DateValue, NormalizedRecord, RawCell, Role};
