//! Atomic write primitives
//!
//! Uses temp→rename pattern to ensure no partial writes

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{io_error, Result};

fn temp_path_for(target_path: &Path) -> PathBuf {
    let mut name = target_path
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(".tmp");
    target_path.with_file_name(name)
}

/// Atomically write bytes to a file
///
/// Uses temp file + rename to ensure atomic write
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    // Create parent directory if it doesn't exist
    if let Some(parent) = target_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_error("create_catalog_dir", e))?;
    }

    // Create temp file next to the target so the rename stays on one filesystem
    let temp_path = temp_path_for(target_path);

    fs::write(&temp_path, content).map_err(|e| io_error("write_catalog_temp", e))?;

    if let Err(e) = fs::rename(&temp_path, target_path) {
        fs::remove_file(&temp_path).ok();
        return Err(io_error("rename_catalog_temp", e));
    }

    Ok(())
}
