use thiserror::Error;

/// Result type alias using the structured error facility
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable for programmatic handling,
/// testing, and display in the console itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Catalog
    /// Catalog source absent or malformed
    CatalogLoad,
    /// Catalog destination unwritable
    CatalogSave,
    /// A catalog record violates the command naming rules
    InvalidCommand,
    /// File extension does not name a known catalog format
    UnsupportedFormat,

    // Configuration
    InvalidInput,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::CatalogLoad => "ERR_CATALOG_LOAD",
            ExErrorKind::CatalogSave => "ERR_CATALOG_SAVE",
            ExErrorKind::InvalidCommand => "ERR_INVALID_COMMAND",
            ExErrorKind::UnsupportedFormat => "ERR_UNSUPPORTED_FORMAT",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus the context
/// needed to show the failure to an operator.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity context (a command name or a catalog path)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " ({})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain error taxonomy for console operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConsoleError {
    /// Catalog file does not exist or cannot be opened
    #[error("Catalog source not found: {path}")]
    CatalogSourceMissing { path: String },

    /// Catalog file exists but could not be decoded
    #[error("Catalog source is malformed: {path}: {reason}")]
    CatalogMalformed { path: String, reason: String },

    /// Catalog destination could not be written
    #[error("Catalog destination is not writable: {path}: {reason}")]
    CatalogUnwritable { path: String, reason: String },

    /// A command record has an unusable name
    #[error("Invalid command name {name:?}: {reason}")]
    InvalidCommandName { name: String, reason: String },

    /// File extension does not select a catalog format
    #[error("Unsupported catalog format: {path}")]
    UnsupportedFormat { path: String },

    /// Configuration could not be read or decoded
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl From<ConsoleError> for ExError {
    fn from(err: ConsoleError) -> Self {
        let message = err.to_string();
        match err {
            ConsoleError::CatalogSourceMissing { path } => ExError::new(ExErrorKind::CatalogLoad)
                .with_op("catalog_load")
                .with_entity_id(path)
                .with_message(message),

            ConsoleError::CatalogMalformed { path, .. } => ExError::new(ExErrorKind::CatalogLoad)
                .with_op("catalog_load")
                .with_entity_id(path)
                .with_message(message),

            ConsoleError::CatalogUnwritable { path, .. } => {
                ExError::new(ExErrorKind::CatalogSave)
                    .with_op("catalog_save")
                    .with_entity_id(path)
                    .with_message(message)
            }

            ConsoleError::InvalidCommandName { name, .. } => {
                ExError::new(ExErrorKind::InvalidCommand)
                    .with_entity_id(name)
                    .with_message(message)
            }

            ConsoleError::UnsupportedFormat { path } => {
                ExError::new(ExErrorKind::UnsupportedFormat)
                    .with_entity_id(path)
                    .with_message(message)
            }

            ConsoleError::InvalidConfig { .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("config_load")
                .with_message(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_kind_codes() {
        let cases = [
            (ExErrorKind::CatalogLoad, "ERR_CATALOG_LOAD"),
            (ExErrorKind::CatalogSave, "ERR_CATALOG_SAVE"),
            (ExErrorKind::InvalidCommand, "ERR_INVALID_COMMAND"),
            (ExErrorKind::UnsupportedFormat, "ERR_UNSUPPORTED_FORMAT"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_source_chain_is_exposed() {
        use std::error::Error;

        let root = ExError::new(ExErrorKind::Io).with_message("permission denied");
        let err = ExError::new(ExErrorKind::CatalogSave).with_source(root);
        assert_eq!(err.source_error().map(|e| e.kind()), Some(ExErrorKind::Io));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_display_includes_code_and_entity() {
        let err: ExError = ConsoleError::CatalogSourceMissing {
            path: "Commands.xml".to_string(),
        }
        .into();
        let shown = err.to_string();
        assert!(shown.starts_with("[ERR_CATALOG_LOAD]"));
        assert!(shown.contains("Commands.xml"));
    }
}
