use std::path::Path;

use crate::errors::{unsupported_format, Result};

/// On-disk catalog encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    /// `<Commands><Items><Command name desc defaultArg/></Items></Commands>`
    Xml,
    Yaml,
    Json,
}

impl CatalogFormat {
    /// Detect format from file extension (case-insensitive)
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedFormat` for a missing or unknown extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("xml") => Ok(CatalogFormat::Xml),
            Some("yaml") | Some("yml") => Ok(CatalogFormat::Yaml),
            Some("json") => Ok(CatalogFormat::Json),
            _ => Err(unsupported_format(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devcon_core::ExErrorKind;

    #[test]
    fn test_detects_known_extensions() {
        assert_eq!(
            CatalogFormat::from_path(Path::new("Resources/Commands.xml")).unwrap(),
            CatalogFormat::Xml
        );
        assert_eq!(
            CatalogFormat::from_path(Path::new("cmds.YML")).unwrap(),
            CatalogFormat::Yaml
        );
        assert_eq!(
            CatalogFormat::from_path(Path::new("cmds.json")).unwrap(),
            CatalogFormat::Json
        );
    }

    #[test]
    fn test_rejects_unknown_extension() {
        for path in ["cmds.txt", "cmds"] {
            let err = CatalogFormat::from_path(Path::new(path)).unwrap_err();
            assert_eq!(err.kind(), ExErrorKind::UnsupportedFormat);
        }
    }
}
