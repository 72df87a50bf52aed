// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("unknown source(s): {}", .0.join(", "))]
    UnknownSources(Vec<String>),

    #[error("no sources selected")]
    NothingSelected,

    #[error("{source_name}: cannot read {}: {err}", .path.display())]
    Input {
        source_name: String,
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}
