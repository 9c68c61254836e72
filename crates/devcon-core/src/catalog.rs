//! Command catalog
//!
//! The catalog is the ordered set of commands known to the console. It is
//! built wholesale (from a [`CatalogSource`] at startup) and replaced as a
//! whole on reload; it is never edited entry by entry while in use.

use std::collections::HashSet;

use crate::errors::{ExError, Result};
use crate::model::Command;

/// Ordered sequence of known commands
///
/// Names should be unique. When they are not, lookup resolves to the first
/// entry in sequence order and later duplicates are unreachable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandCatalog {
    commands: Vec<Command>,
}

impl CommandCatalog {
    /// Build a catalog from commands in display order
    ///
    /// # Errors
    ///
    /// Returns `InvalidCommand` if any command has an empty name or a name
    /// containing whitespace.
    pub fn new(commands: Vec<Command>) -> Result<Self> {
        for cmd in &commands {
            cmd.validate().map_err(ExError::from)?;
        }
        Ok(Self { commands })
    }

    /// A catalog with no commands
    pub fn empty() -> Self {
        Self::default()
    }

    /// Find a command by exact name (first match wins)
    pub fn find_by_name(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|cmd| cmd.name == name)
    }

    /// Command at a display position
    pub fn get(&self, index: usize) -> Option<&Command> {
        self.commands.get(index)
    }

    /// All commands in sequence order
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Names that appear more than once, each reported once in order of
    /// first appearance
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for cmd in &self.commands {
            let name = cmd.name.as_str();
            if !seen.insert(name) && reported.insert(name) {
                duplicates.push(name);
            }
        }
        duplicates
    }

    /// Numbered lines for a command list panel
    pub fn listing(&self) -> Vec<String> {
        self.commands
            .iter()
            .enumerate()
            .map(|(i, cmd)| {
                format!(
                    "{}. {} ({}, default: {})",
                    i, cmd.name, cmd.description, cmd.default_arg
                )
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a CommandCatalog {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

/// Somewhere a catalog can be loaded from
pub trait CatalogSource {
    /// Human-readable location, used in diagnostics
    fn describe(&self) -> String;

    /// Load the complete catalog
    ///
    /// # Errors
    ///
    /// Returns `CatalogLoad` if the source is absent or malformed.
    fn load(&self) -> Result<CommandCatalog>;
}

/// Somewhere a catalog can be written to
pub trait CatalogSink {
    /// Write the complete catalog, preserving order
    ///
    /// # Errors
    ///
    /// Returns `CatalogSave` if the destination cannot be written.
    fn save(&self, catalog: &CommandCatalog) -> Result<()>;
}

/// A fixed in-memory catalog, mostly useful to hosts that build their
/// command list in code
impl CatalogSource for CommandCatalog {
    fn describe(&self) -> String {
        format!("in-memory catalog ({} commands)", self.len())
    }

    fn load(&self) -> Result<CommandCatalog> {
        Ok(self.clone())
    }
}
