//! Error types for catalog loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a recipe catalog.
///
/// None of these are shown to the user verbatim; the UI replaces them with
/// [`LOAD_FAILED_MESSAGE`](crate::view::LOAD_FAILED_MESSAGE).
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The payload is not a JSON array of recipes.
    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
}
