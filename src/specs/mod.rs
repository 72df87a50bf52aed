// src/specs/mod.rs
//! # Vendor "specs"
//!
//! One module per documentation page. Each spec is a `SourceConfig`: *where the ground
//! truth lives in the page* (which tables matter, how their headers are phrased) and
//! *how that vendor words status*. No parsing code lives here; the engine reads every
//! page the same way.
//!
//! ## Conventions
//! - Header phrases are lowercase substrings; list the specific phrase before the generic
//!   one ("recommended model id" before "recommended").
//! - A table whose headers name no model is ignored, so a page's decorative tables need
//!   no special handling.
//! - `slug` doubles as the input file stem (`<input_dir>/<slug>.html`).
use crate::engine::source::SourceConfig;

pub mod anthropic;
pub mod bedrock;
pub mod gemini;
pub mod openai;
pub mod vertex;

/// Every built-in source, in reporting order.
pub static ALL: [&SourceConfig; 5] = [
    &openai::SOURCE,
    &anthropic::SOURCE,
    &vertex::SOURCE,
    &bedrock::SOURCE,
    &gemini::SOURCE,
];

pub fn by_slug(slug: &str) -> Option<&'static SourceConfig> {
    ALL.iter().copied().find(|s| s.slug.eq_ignore_ascii_case(slug.trim()))
}
