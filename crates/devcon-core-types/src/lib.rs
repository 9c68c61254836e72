//! Core types shared across devcon facilities
//!
//! This crate provides vocabulary used by the console core, the logging
//! facility and the catalog store:
//!
//! - **Severity**: the five-way log classification and its style tags
//! - **Schema constants**: Canonical field keys and event names

pub mod schema;
pub mod severity;

pub use severity::{Severity, Style};
