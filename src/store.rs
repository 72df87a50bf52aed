// src/store.rs
use std::{fs, io, path::{Path, PathBuf}};

use thiserror::Error;

use crate::engine::NormalizedRecord;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    fn io(path: &Path, source: io::Error) -> Self {
        StoreError::Io { path: path.to_path_buf(), source }
    }
    fn json(path: &Path, source: serde_json::Error) -> Self {
        StoreError::Json { path: path.to_path_buf(), source }
    }
}

/// Write records as a pretty-printed JSON array, creating parent directories.
pub fn save_records(path: &Path, records: &[NormalizedRecord]) -> Result<(), StoreError> {
    // Ensure parent directories exist
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }
    }

    let mut text = serde_json::to_string_pretty(records).map_err(|e| StoreError::json(path, e))?;
    text.push('\n');
    fs::write(path, text).map_err(|e| StoreError::io(path, e))?;

    logd!("store: wrote {} records to {}", records.len(), path.display());
    Ok(())
}

pub fn load_records(path: &Path) -> Result<Vec<NormalizedRecord>, StoreError> {
    let text = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| StoreError::json(path, e))
}
