//! devcon store - catalog persistence
//!
//! Provides:
//! - Catalog documents in XML (`<Commands><Items><Command .../>`), YAML and JSON
//! - Format selection by file extension
//! - Validated parsing into a core `CommandCatalog`
//! - Atomic saving
//! - `FileCatalog`, a file-backed `CatalogSource` / `CatalogSink`

pub mod atomic;
pub mod catalog;
pub mod errors;

// Re-export key types
pub use catalog::{
    parse_catalog_file, parse_catalog_str, render_catalog, save_catalog_file, CatalogFormat,
    FileCatalog,
};
pub use errors::Result;
