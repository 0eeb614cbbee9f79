#![deny(unsafe_code)]

//! Catalog source resolution.

use std::path::PathBuf;

/// File name the catalog ships under when no other source is configured.
pub const DEFAULT_CATALOG_FILE: &str = "Course-Subject.json";

/// Environment variable that overrides the default catalog location.
pub const CATALOG_PATH_ENV: &str = "COURSE_CATALOG_PATH";

/// Resolves the catalog source: an explicit path wins, then the
/// `COURSE_CATALOG_PATH` environment variable, then the default file name
/// relative to the working directory.
pub fn resolve_catalog_path(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }
    if let Ok(path) = std::env::var(CATALOG_PATH_ENV) {
        return PathBuf::from(path);
    }
    PathBuf::from(DEFAULT_CATALOG_FILE)
}
