//! Catalog parser with validation
//!
//! Decodes a catalog document and validates schema version and command
//! names. Duplicate names are legal (first wins) but reported.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use devcon_core::{log_op_end, log_op_error, log_op_start, Command, CommandCatalog};

use super::document::{CatalogDocument, CommandsXml, SCHEMA_VERSION};
use super::format::CatalogFormat;
use crate::errors::{catalog_malformed, catalog_missing, Result};

/// Parse a catalog file, choosing the format from its extension
pub fn parse_catalog_file(path: &Path) -> Result<CommandCatalog> {
    let started = log_op_start!("catalog_load", path = %path.display());

    let result = read_and_parse(path);
    match &result {
        Ok(catalog) => log_op_end!("catalog_load", started, catalog_len = catalog.len()),
        Err(err) => log_op_error!("catalog_load", started, err.clone()),
    }
    result
}

fn read_and_parse(path: &Path) -> Result<CommandCatalog> {
    let format = CatalogFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => catalog_missing(path),
        _ => catalog_malformed(
            &path.display().to_string(),
            format!("Failed to read catalog file: {}", e),
        ),
    })?;

    parse_catalog_str(&content, format, &path.display().to_string())
}

/// Parse catalog text in a known format
///
/// `origin` names the source in error messages.
pub fn parse_catalog_str(content: &str, format: CatalogFormat, origin: &str) -> Result<CommandCatalog> {
    let commands = decode(content, format, origin)?;

    let catalog = CommandCatalog::new(commands).map_err(|e| {
        catalog_malformed(origin, e.message().to_string()).with_source(e)
    })?;

    let duplicates = catalog.duplicate_names();
    if !duplicates.is_empty() {
        tracing::warn!(
            component = module_path!(),
            op = "catalog_load",
            origin,
            duplicates = ?duplicates,
            "duplicate command names; lookup uses the first of each"
        );
    }

    Ok(catalog)
}

fn decode(content: &str, format: CatalogFormat, origin: &str) -> Result<Vec<Command>> {
    match format {
        CatalogFormat::Xml => {
            let doc: CommandsXml = quick_xml::de::from_str(content)
                .map_err(|e| catalog_malformed(origin, format!("XML parse error: {}", e)))?;
            Ok(doc.items.commands.into_iter().map(Command::from).collect())
        }
        CatalogFormat::Yaml => {
            let doc: CatalogDocument = serde_yaml::from_str(content)
                .map_err(|e| catalog_malformed(origin, format!("YAML parse error: {}", e)))?;
            check_schema_version(&doc, origin)?;
            Ok(doc.commands)
        }
        CatalogFormat::Json => {
            let doc: CatalogDocument = serde_json::from_str(content)
                .map_err(|e| catalog_malformed(origin, format!("JSON parse error: {}", e)))?;
            check_schema_version(&doc, origin)?;
            Ok(doc.commands)
        }
    }
}

fn check_schema_version(doc: &CatalogDocument, origin: &str) -> Result<()> {
    if doc.schema_version != SCHEMA_VERSION {
        return Err(catalog_malformed(
            origin,
            format!(
                "Unsupported schema_version: {}. Expected {}",
                doc.schema_version, SCHEMA_VERSION
            ),
        ));
    }
    Ok(())
}
