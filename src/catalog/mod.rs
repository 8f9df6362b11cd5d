//! Catalog asset loading.
//!
//! The promotion catalog ships with the deployment as a static JSON
//! file mapping ids to scent records. It is read and parsed once per
//! process instance (the `validate` handler owns the cache) and is
//! never reloaded — a bad asset is a fatal error, not a fallback.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::Catalog;

/// Failure to produce a usable catalog from the static asset.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The asset file could not be read.
    #[error("failed to read catalog from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The asset file is not valid catalog JSON.
    #[error("catalog at {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read and parse the catalog asset at `path`.
pub fn load(path: &Path) -> Result<Catalog, CatalogError> {
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CatalogError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}
