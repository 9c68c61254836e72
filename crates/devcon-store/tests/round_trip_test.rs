// Integration tests for save/load round trips
// Save(Load(X)) must reproduce X's records in order, in every format

use std::fs;
use std::path::PathBuf;

use devcon_core::{CatalogSink, CatalogSource, Command, CommandCatalog, ExErrorKind};
use devcon_store::FileCatalog;
use tempfile::TempDir;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

#[test]
fn test_round_trip_preserves_records_in_every_format() {
    // Given: A catalog loaded from the XML fixture
    let original = FileCatalog::new(fixtures_dir().join("commands.xml"))
        .load()
        .unwrap();
    let temp_dir = TempDir::new().unwrap();

    for ext in ["xml", "yaml", "json"] {
        // When: We save it and load it back
        let target = FileCatalog::new(temp_dir.path().join(format!("Commands.{}", ext)));
        target.save(&original).unwrap();
        let reloaded = target.load().unwrap();

        // Then: Every record and the order survive
        assert_eq!(reloaded, original, "round trip through {} changed the catalog", ext);
    }
}

#[test]
fn test_round_trip_keeps_awkward_text() {
    // Given: Descriptions and defaults with markup characters and spaces
    let catalog = CommandCatalog::new(vec![
        Command::new("say", "say <something> & \"quote\"", "hello world"),
        Command::new("tp", "", "  10 20  "),
    ])
    .unwrap();
    let temp_dir = TempDir::new().unwrap();

    for ext in ["xml", "yaml", "json"] {
        let target = FileCatalog::new(temp_dir.path().join(format!("awkward.{}", ext)));
        target.save(&catalog).unwrap();
        assert_eq!(target.load().unwrap(), catalog, "format {}", ext);
    }
}

#[test]
fn test_saved_file_is_stable() {
    // Given: A catalog saved once
    let catalog = FileCatalog::new(fixtures_dir().join("commands.yaml"))
        .load()
        .unwrap();
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("first.xml");
    let second = temp_dir.path().join("second.xml");

    // When: We load the saved file and save it again
    devcon_store::save_catalog_file(&catalog, &first).unwrap();
    let reloaded = devcon_store::parse_catalog_file(&first).unwrap();
    devcon_store::save_catalog_file(&reloaded, &second).unwrap();

    // Then: Both files are byte-for-byte identical
    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_save_to_unsupported_extension_is_catalog_save() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = CommandCatalog::empty();

    let err = devcon_store::save_catalog_file(&catalog, &temp_dir.path().join("Commands.ini"))
        .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::CatalogSave);
    assert_eq!(
        err.source_error().map(|e| e.kind()),
        Some(ExErrorKind::UnsupportedFormat)
    );
}

#[test]
fn test_save_to_unwritable_destination_is_catalog_save() {
    // Given: A destination whose parent is a regular file
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, b"not a directory").unwrap();
    let catalog = CommandCatalog::new(vec![Command::new("spawn", "", "")]).unwrap();

    // When: We save beneath it
    let err = devcon_store::save_catalog_file(&catalog, &blocker.join("Commands.xml"))
        .unwrap_err();

    // Then: Save fails and the in-memory catalog is untouched
    assert_eq!(err.kind(), ExErrorKind::CatalogSave);
    assert_eq!(catalog.len(), 1);
}
