//! Error types for tb-catalog

use std::path::PathBuf;

use thiserror::Error;

use crate::Issue;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog file {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate part id: {0}")]
    DuplicatePart(String),

    #[error("Duplicate build: {0}")]
    DuplicateBuild(String),

    #[error("Catalog failed validation with {} issue(s)", .0.len())]
    Integrity(Vec<Issue>),
}
