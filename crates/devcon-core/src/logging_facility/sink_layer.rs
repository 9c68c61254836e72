//! Bridge from `tracing` events to a console log sink
//!
//! Debug and info events from the console's own crates are bookkeeping and
//! are not captured; their warnings and errors are.
//!
//! Severity comes from the event level (`ERROR` → Error, `WARN` → Warning,
//! everything else → Log) unless the event carries an explicit `severity`
//! field:
//!
//! ```
//! # use std::sync::Arc;
//! # use devcon_core::log_sink::LogSink;
//! # use devcon_core::logging_facility::SinkLayer;
//! # use tracing_subscriber::layer::SubscriberExt;
//! let sink = Arc::new(LogSink::new());
//! let subscriber = tracing_subscriber::registry().with(SinkLayer::new(sink.clone()));
//! tracing::subscriber::with_default(subscriber, || {
//!     tracing::error!(severity = "exception", context = "at Player.Update()", "null ref");
//! });
//! assert_eq!(sink.entries()[0].text, "null ref\nat Player.Update()");
//! ```

use std::sync::Arc;

use devcon_core_types::schema::{
    is_console_target, FIELD_CONTEXT, FIELD_MESSAGE, FIELD_SEVERITY, STRUCTURAL_FIELDS,
};
use devcon_core_types::Severity;
use tracing::{Level, Metadata, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

use super::visitor::FieldVisitor;
use crate::log_sink::LogSink;

/// Layer that ingests every event it sees into a [`LogSink`]
#[derive(Debug, Clone)]
pub struct SinkLayer {
    sink: Arc<LogSink>,
}

impl SinkLayer {
    pub fn new(sink: Arc<LogSink>) -> Self {
        Self { sink }
    }
}

/// Default severity for a `tracing` level
pub fn severity_for_level(level: &Level) -> Severity {
    match *level {
        Level::ERROR => Severity::Error,
        Level::WARN => Severity::Warning,
        _ => Severity::Log,
    }
}

fn is_bookkeeping(metadata: &Metadata<'_>) -> bool {
    *metadata.level() > Level::WARN && is_console_target(metadata.target())
}

fn render_message(visitor: &FieldVisitor) -> String {
    let mut text = visitor.get(FIELD_MESSAGE).unwrap_or_default().to_string();
    for (key, value) in &visitor.fields {
        if STRUCTURAL_FIELDS.contains(&key.as_str()) {
            continue;
        }
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(key);
        text.push('=');
        text.push_str(value);
    }
    text
}

impl<S> Layer<S> for SinkLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        if is_bookkeeping(event.metadata()) {
            return;
        }

        let mut visitor = FieldVisitor::new();
        event.record(&mut visitor);

        let severity = visitor
            .get(FIELD_SEVERITY)
            .and_then(|s| s.parse::<Severity>().ok())
            .unwrap_or_else(|| severity_for_level(event.metadata().level()));
        let message = render_message(&visitor);

        self.sink
            .ingest_with_context(severity, &message, visitor.get(FIELD_CONTEXT));
    }
}
