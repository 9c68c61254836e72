//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_MESSAGE: &str = "message";

// Console-specific fields
pub const FIELD_COMMAND: &str = "command";
pub const FIELD_ARG_COUNT: &str = "arg_count";
pub const FIELD_CATALOG_LEN: &str = "catalog_len";
pub const FIELD_PATH: &str = "path";

/// Overrides the level-derived severity when captured by the console sink
pub const FIELD_SEVERITY: &str = "severity";
/// Appended verbatim after the message (stack traces and the like)
pub const FIELD_CONTEXT: &str = "context";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

/// Targets whose debug and info events are console bookkeeping
pub const CONSOLE_TARGETS: &[&str] = &["devcon_core", "devcon_store"];

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_UNMATCHED: &str = "unmatched";

/// Fields that describe the event itself rather than its payload
pub const STRUCTURAL_FIELDS: &[&str] = &[
    FIELD_MESSAGE,
    FIELD_SEVERITY,
    FIELD_CONTEXT,
    FIELD_COMPONENT,
    FIELD_OP,
    FIELD_EVENT,
    FIELD_DURATION_MS,
    FIELD_ERR_KIND,
    FIELD_ERR_CODE,
];

/// True if `target` is one of the console's own modules
pub fn is_console_target(target: &str) -> bool {
    CONSOLE_TARGETS.iter().any(|prefix| {
        target == *prefix
            || target
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with("::"))
    })
}
