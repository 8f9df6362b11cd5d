//! Environment-provided configuration.
//!
//! The hosting platform supplies two optional values; empty strings
//! count as unset, matching how the frontend deployment leaves the
//! variables defined but blank until signing is switched on.

use std::path::PathBuf;

/// Environment variable holding the optional HMAC secret.
pub const SECRET_ENV: &str = "SOFKA_SECRET";

/// Environment variable overriding the catalog asset location.
pub const CATALOG_PATH_ENV: &str = "CATALOG_PATH";

/// Default catalog asset path, relative to the deployed unit.
pub const DEFAULT_CATALOG_PATH: &str = "data/catalog.json";

/// The configured HMAC secret, if signing is enabled.
pub fn hmac_secret() -> Option<String> {
    std::env::var(SECRET_ENV).ok().filter(|value| !value.is_empty())
}

/// Where to read the catalog asset from.
pub fn catalog_path() -> PathBuf {
    std::env::var(CATALOG_PATH_ENV)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH))
}
