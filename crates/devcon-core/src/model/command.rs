use serde::{Deserialize, Serialize};

use crate::errors::ConsoleError;
use crate::parser::SENTINEL;

/// A named console command and its operator-facing metadata
///
/// Commands are plain values: once loaded they are never mutated, and their
/// identity is `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    /// Identifier typed after the sentinel (non-empty, no whitespace)
    pub name: String,

    /// Free-text description shown in the command list
    #[serde(default)]
    pub description: String,

    /// Suggested argument string used to pre-fill the input line
    #[serde(default)]
    pub default_arg: String,
}

impl Command {
    /// Create a new command
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        default_arg: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            default_arg: default_arg.into(),
        }
    }

    /// Check the naming rules
    ///
    /// # Errors
    ///
    /// Returns `InvalidCommandName` if the name is empty or contains whitespace.
    pub fn validate(&self) -> Result<(), ConsoleError> {
        if self.name.is_empty() {
            return Err(ConsoleError::InvalidCommandName {
                name: self.name.clone(),
                reason: "name cannot be empty".to_string(),
            });
        }
        if self.name.chars().any(char::is_whitespace) {
            return Err(ConsoleError::InvalidCommandName {
                name: self.name.clone(),
                reason: "name cannot contain whitespace".to_string(),
            });
        }
        Ok(())
    }

    /// Input line that invokes this command with its default argument
    pub fn invocation_template(&self) -> String {
        format!("{}{} {}", SENTINEL, self.name, self.default_arg)
    }
}
