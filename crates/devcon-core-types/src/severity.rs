//! Log severity classification
//!
//! Mirrors the host's five-way log classification. The variant order is the
//! host's numeric order and must not change.

use serde::{Deserialize, Serialize};

/// Severity of a captured log message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Assert,
    Warning,
    Log,
    Exception,
}

/// Presentation style tag attached to a log entry
///
/// The style only tells a renderer how to colour the line; it never changes
/// the message itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Red,
    Yellow,
    White,
}

impl Severity {
    /// All severities in host order
    pub const ALL: [Severity; 5] = [
        Severity::Error,
        Severity::Assert,
        Severity::Warning,
        Severity::Log,
        Severity::Exception,
    ];

    /// Style tag used when rendering entries of this severity
    pub fn style(&self) -> Style {
        match self {
            Severity::Error | Severity::Assert | Severity::Exception => Style::Red,
            Severity::Warning => Style::Yellow,
            Severity::Log => Style::White,
        }
    }

    /// Stable lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Assert => "assert",
            Severity::Warning => "warning",
            Severity::Log => "log",
            Severity::Exception => "exception",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(Severity::Error),
            "assert" => Ok(Severity::Assert),
            "warning" | "warn" => Ok(Severity::Warning),
            "log" | "info" => Ok(Severity::Log),
            "exception" => Ok(Severity::Exception),
            other => Err(format!("unknown severity: {}", other)),
        }
    }
}

impl Style {
    /// Colour name understood by rich-text renderers
    pub fn color_name(&self) -> &'static str {
        match self {
            Style::Red => "red",
            Style::Yellow => "yellow",
            Style::White => "white",
        }
    }
}
