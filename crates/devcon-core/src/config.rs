//! Console configuration
//!
//! Loaded from TOML. Every key is optional:
//!
//! ```toml
//! log_capacity = 500          # omit for an unbounded log
//! catalog_path = "Commands.xml"
//! diagnostics = true          # log unknown commands to the console
//! profile = "development"     # or "production"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{ConsoleError, Result};
use crate::logging_facility::Profile;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Maximum retained log entries; `None` keeps everything
    pub log_capacity: Option<usize>,

    /// Catalog file loaded at startup
    pub catalog_path: Option<PathBuf>,

    /// Record a warning in the console log for unknown commands
    pub diagnostics: bool,

    /// Logging profile used by hosts that let the console install logging
    pub profile: Profile,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            log_capacity: None,
            catalog_path: None,
            diagnostics: true,
            profile: Profile::Development,
        }
    }
}

impl ConsoleConfig {
    /// Parse a configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the text is not valid TOML or has wrongly
    /// typed keys.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            ConsoleError::InvalidConfig {
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Read a configuration file
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConsoleError::InvalidConfig {
            reason: format!("Failed to read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ExErrorKind;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ConsoleConfig::from_toml_str("").unwrap();
        assert_eq!(config, ConsoleConfig::default());
        assert!(config.log_capacity.is_none());
        assert!(config.diagnostics);
    }

    #[test]
    fn test_all_keys() {
        let config = ConsoleConfig::from_toml_str(
            r#"
log_capacity = 100
catalog_path = "cmds/Commands.xml"
diagnostics = false
profile = "production"
"#,
        )
        .unwrap();
        assert_eq!(config.log_capacity, Some(100));
        assert_eq!(config.catalog_path, Some(PathBuf::from("cmds/Commands.xml")));
        assert!(!config.diagnostics);
        assert_eq!(config.profile, Profile::Production);
    }

    #[test]
    fn test_wrong_type_is_invalid_input() {
        let err = ConsoleConfig::from_toml_str("log_capacity = \"lots\"").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    }

    #[test]
    fn test_missing_file_is_invalid_input() {
        let err = ConsoleConfig::load(Path::new("/nonexistent/devcon.toml")).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
        assert!(err.message().contains("devcon.toml"));
    }
}
