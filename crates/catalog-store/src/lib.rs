#![deny(unsafe_code)]

pub mod error;
pub mod paths;
pub mod store;

pub use crate::error::CatalogError;
pub use crate::paths::{DEFAULT_CATALOG_FILE, resolve_catalog_path};
pub use crate::store::CatalogStore;
