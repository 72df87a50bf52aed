// src/config/consts.rs

// Local cache
pub const LOG_FILE: &str = ".store/debug.log";

// Input: one already-fetched page per source, `<slug>.html`
pub const DEFAULT_INPUT_DIR: &str = "pages";
pub const PAGE_EXT: &str = "html";

// Export
pub const DEFAULT_OUT_DIR: &str = "data";
pub const DEFAULT_RECORDS_FILE: &str = "deprecations.json";

// Concurrency
pub const WORKERS: usize = 4;
