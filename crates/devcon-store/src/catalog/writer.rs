//! Catalog serialization

use std::path::Path;

use devcon_core::{log_op_end, log_op_error, log_op_start, CommandCatalog};
use serde::Serialize;

use super::document::{CatalogDocument, CommandXml, CommandsXml, ItemsXml};
use super::format::CatalogFormat;
use crate::atomic::atomic_write;
use crate::errors::{catalog_unwritable, serialization_error, Result};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

/// Render a catalog as text in `format`, preserving order
pub fn render_catalog(catalog: &CommandCatalog, format: CatalogFormat) -> Result<String> {
    match format {
        CatalogFormat::Xml => {
            let doc = CommandsXml {
                items: ItemsXml {
                    commands: catalog.iter().map(CommandXml::from).collect(),
                },
            };
            let mut body = String::new();
            let mut ser = quick_xml::se::Serializer::new(&mut body);
            ser.indent(' ', 2);
            doc.serialize(ser)
                .map_err(|e| serialization_error("catalog_render_xml", e))?;
            Ok(format!("{}\n{}\n", XML_DECLARATION, body))
        }
        CatalogFormat::Yaml => {
            let doc = CatalogDocument::new(catalog.commands().to_vec());
            serde_yaml::to_string(&doc).map_err(|e| serialization_error("catalog_render_yaml", e))
        }
        CatalogFormat::Json => {
            let doc = CatalogDocument::new(catalog.commands().to_vec());
            serde_json::to_string_pretty(&doc)
                .map(|mut s| {
                    s.push('\n');
                    s
                })
                .map_err(|e| serialization_error("catalog_render_json", e))
        }
    }
}

/// Save a catalog to `path`, choosing the format from its extension
///
/// The in-memory catalog is never touched, whatever the outcome.
pub fn save_catalog_file(catalog: &CommandCatalog, path: &Path) -> Result<()> {
    let started = log_op_start!("catalog_save", path = %path.display(), catalog_len = catalog.len());

    let result = write_catalog(catalog, path);
    match &result {
        Ok(()) => log_op_end!("catalog_save", started),
        Err(err) => log_op_error!("catalog_save", started, err.clone()),
    }
    result
}

fn write_catalog(catalog: &CommandCatalog, path: &Path) -> Result<()> {
    let unwritable = |e: devcon_core::ExError| catalog_unwritable(path, e.message().to_string()).with_source(e);

    let format = CatalogFormat::from_path(path).map_err(unwritable)?;
    let text = render_catalog(catalog, format).map_err(unwritable)?;
    atomic_write(path, text.as_bytes()).map_err(unwritable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use devcon_core::Command;

    fn catalog() -> CommandCatalog {
        CommandCatalog::new(vec![
            Command::new("spawn", "spawn enemy", "goblin"),
            Command::new("say", "chat line", "\"hi\" & <bye>"),
        ])
        .unwrap()
    }

    #[test]
    fn test_xml_uses_attribute_layout() {
        let xml = render_catalog(&catalog(), CatalogFormat::Xml).unwrap();
        assert!(xml.starts_with(XML_DECLARATION));
        assert!(xml.contains("<Commands>"));
        assert!(xml.contains("<Items>"));
        assert!(xml.contains(r#"<Command name="spawn" desc="spawn enemy" defaultArg="goblin""#));
    }

    #[test]
    fn test_xml_escapes_special_characters() {
        let xml = render_catalog(&catalog(), CatalogFormat::Xml).unwrap();
        assert!(!xml.contains("<bye>"));
        let back = super::super::parse_catalog_str(&xml, CatalogFormat::Xml, "inline").unwrap();
        assert_eq!(back, catalog());
    }

    #[test]
    fn test_yaml_and_json_carry_schema_version() {
        let yaml = render_catalog(&catalog(), CatalogFormat::Yaml).unwrap();
        assert!(yaml.contains("schema_version: 0"));
        let json = render_catalog(&catalog(), CatalogFormat::Json).unwrap();
        assert!(json.contains("\"schema_version\": 0"));
    }
}
