//! devcon core - embeddable developer console
//!
//! This crate provides the parts of the console with real logic:
//! - A command catalog with first-wins lookup
//! - An input parser for `@name arg...` lines
//! - A dispatcher fanning matched commands out to subscribers
//! - A thread-safe log sink with a pending-updates flag, fed by `tracing`
//!
//! Rendering and catalog files live in other crates; this one only exposes
//! state for them to read and the `submit` entry point.

pub mod catalog;
pub mod config;
pub mod dispatcher;
pub mod errors;
pub mod log_sink;
pub mod logging_facility;
pub mod manager;
pub mod model;
pub mod parser;

// Re-export commonly used types
pub use catalog::{CatalogSink, CatalogSource, CommandCatalog};
pub use config::ConsoleConfig;
pub use devcon_core_types::{schema, Severity, Style};
pub use dispatcher::{DispatchedCommand, Dispatcher, SubmitOutcome, SubscriptionId};
pub use errors::{ConsoleError, ExError, ExErrorKind, Result};
pub use log_sink::LogSink;
pub use manager::CommandManager;
pub use model::{Command, LogEntry};
pub use parser::{parse, ParseOutcome, ParsedInvocation};
