use chrono::{DateTime, Utc};
use devcon_core_types::{Severity, Style};
use serde::{Deserialize, Serialize};

/// One captured log line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Arrival index, unique for the lifetime of the sink
    pub seq: u64,

    /// Host classification of the message
    pub severity: Severity,

    /// Formatted message (message followed by any context)
    pub text: String,

    /// Time the sink accepted the entry
    pub received_at: DateTime<Utc>,
}

impl LogEntry {
    /// Format a raw message for display
    ///
    /// A non-empty context (typically a stack trace) goes on the lines
    /// following the message.
    pub fn format_text(message: &str, context: Option<&str>) -> String {
        match context {
            Some(ctx) if !ctx.is_empty() => format!("{}\n{}", message, ctx),
            _ => message.to_string(),
        }
    }

    /// Style tag derived from the severity
    pub fn style(&self) -> Style {
        self.severity.style()
    }

    /// Rich-text form, e.g. `<color=yellow>low health</color>`
    pub fn markup(&self) -> String {
        format!("<color={}>{}</color>", self.style().color_name(), self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(severity: Severity, text: &str) -> LogEntry {
        LogEntry {
            seq: 0,
            severity,
            text: text.to_string(),
            received_at: Utc::now(),
        }
    }

    #[test]
    fn test_markup_wraps_text_in_style_color() {
        assert_eq!(
            entry(Severity::Warning, "low health").markup(),
            "<color=yellow>low health</color>"
        );
        assert_eq!(
            entry(Severity::Exception, "boom").markup(),
            "<color=red>boom</color>"
        );
    }

    #[test]
    fn test_format_text_appends_context() {
        assert_eq!(LogEntry::format_text("null ref", None), "null ref");
        assert_eq!(LogEntry::format_text("null ref", Some("")), "null ref");
        assert_eq!(
            LogEntry::format_text("null ref", Some("at Player.Update()")),
            "null ref\nat Player.Update()"
        );
    }
}
