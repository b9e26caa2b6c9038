use std::path::PathBuf;

use thiserror::Error;

/// Raw text could not be turned into a table.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error("header line has no column names")]
    MissingHeader,
    #[error("malformed record: {0}")]
    Csv(#[from] csv::Error),
}

/// A source's header does not fit the shape of the aggregate.
#[derive(Debug, Error)]
pub enum SchemaMismatchError {
    #[error("source '{source_id}' has no '{column}' column to anchor on")]
    MissingAnchor { source_id: String, column: String },
    #[error("source '{source_id}' header {found:?} differs from {expected:?}")]
    HeaderMismatch {
        source_id: String,
        expected: Vec<String>,
        found: Vec<String>,
    },
}

/// Catalog listing or record fetch failed.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("no record file for '{id}' at {}", path.display())]
    NotFound { id: String, path: PathBuf },
    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
