//! Structured logging facility for devcon
//!
//! This module provides a canonical logging facility with:
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - A [`SinkLayer`] that mirrors the host's `tracing` events into a
//!   console [`LogSink`](crate::log_sink::LogSink)
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use devcon_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```
//!
//! # Logging Macros
//!
//! - `let started = log_op_start!(op, ...)` - Log operation start
//! - `log_op_end!(op, started, ...)` - Log operation end with its duration
//! - `log_op_error!(op, started, err, ...)` - Log operation error

pub mod init;
pub mod macros;
pub mod sink_layer;
pub mod test_capture;
mod visitor;

pub use init::{init, init_with_sink, Profile};
pub use sink_layer::SinkLayer;
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
