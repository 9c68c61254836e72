//! Catalog files
//!
//! Provides:
//! - Document shapes for each on-disk format
//! - Format detection by extension
//! - Parser with validation
//! - Atomic writer
//! - File-backed catalog source and sink

pub mod document;
pub mod file;
pub mod format;
pub mod parser;
pub mod writer;

pub use document::{CatalogDocument, CommandsXml};
pub use file::FileCatalog;
pub use format::CatalogFormat;
pub use parser::{parse_catalog_file, parse_catalog_str};
pub use writer::{render_catalog, save_catalog_file};
