// src/config/options.rs
use std::path::PathBuf;

use chrono::{Local, NaiveDate};

use super::consts::*;
use crate::engine::source::SourceConfig;
use crate::specs;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceSelector {
    All,
    /// Slugs, matched case-insensitively.
    Only(Vec<String>),
}

impl SourceSelector {
    /// Resolve to built-in sources in registry order. Unknown slugs are returned as `Err`.
    pub fn resolve(&self) -> Result<Vec<&'static SourceConfig>, Vec<String>> {
        match self {
            SourceSelector::All => Ok(specs::ALL.to_vec()),
            SourceSelector::Only(slugs) => {
                let unknown: Vec<String> = slugs
                    .iter()
                    .filter(|s| specs::by_slug(s).is_none())
                    .cloned()
                    .collect();
                if !unknown.is_empty() {
                    return Err(unknown);
                }
                Ok(specs::ALL
                    .iter()
                    .copied()
                    .filter(|src| slugs.iter().any(|s| src.slug.eq_ignore_ascii_case(s.trim())))
                    .collect())
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub sources: SourceSelector,
    /// Directory holding `<slug>.html` per source.
    pub input_dir: PathBuf,
    /// JSON file the merged records are written to.
    pub out: PathBuf,
    /// Reference date for status derivation.
    pub today: NaiveDate,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            sources: SourceSelector::All,
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            out: PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_RECORDS_FILE),
            today: Local::now().date_naive(),
        }
    }
}

impl RunOptions {
    pub fn input_path(&self, source: &SourceConfig) -> PathBuf {
        self.input_dir.join(join!(source.slug, ".", PAGE_EXT))
    }
}
