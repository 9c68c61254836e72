//! Catalog document schemas
//!
//! XML is the `<Commands><Items><Command .../></Items></Commands>` layout
//! with the three fields as attributes. YAML and JSON share a versioned
//! document.

use devcon_core::Command;
use serde::{Deserialize, Serialize};

/// Current schema version for YAML/JSON catalogs
pub const SCHEMA_VERSION: u32 = 0;

/// Root element `<Commands>`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "Commands")]
pub struct CommandsXml {
    #[serde(rename = "Items", default)]
    pub items: ItemsXml,
}

/// `<Items>` wrapper around the command elements
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemsXml {
    #[serde(rename = "Command", default)]
    pub commands: Vec<CommandXml>,
}

/// `<Command name="..." desc="..." defaultArg="..."/>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandXml {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@desc", default)]
    pub desc: String,
    #[serde(rename = "@defaultArg", default)]
    pub default_arg: String,
}

impl From<CommandXml> for Command {
    fn from(record: CommandXml) -> Self {
        Command::new(record.name, record.desc, record.default_arg)
    }
}

impl From<&Command> for CommandXml {
    fn from(cmd: &Command) -> Self {
        Self {
            name: cmd.name.clone(),
            desc: cmd.description.clone(),
            default_arg: cmd.default_arg.clone(),
        }
    }
}

/// YAML/JSON catalog document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    /// Commands in display order
    #[serde(default)]
    pub commands: Vec<Command>,
}

impl CatalogDocument {
    pub fn new(commands: Vec<Command>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            commands,
        }
    }
}
