use std::path::{Path, PathBuf};

use devcon_core::{CatalogSink, CatalogSource, CommandCatalog, Result};

use super::parser::parse_catalog_file;
use super::writer::save_catalog_file;

/// A catalog stored in a single file
///
/// The format follows the file extension (`.xml`, `.yaml`/`.yml`, `.json`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileCatalog {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<CommandCatalog> {
        parse_catalog_file(&self.path)
    }
}

impl CatalogSink for FileCatalog {
    fn save(&self, catalog: &CommandCatalog) -> Result<()> {
        save_catalog_file(catalog, &self.path)
    }
}
