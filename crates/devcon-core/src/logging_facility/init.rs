//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility.

use std::io;
use std::sync::{Arc, Once};

use serde::{Deserialize, Serialize};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, util::SubscriberInitExt, EnvFilter, Layer};

use super::sink_layer::SinkLayer;
use crate::log_sink::LogSink;

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Human-readable output for development
    #[default]
    Development,
    /// JSON structured output for production
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

impl Profile {
    fn default_directive(&self) -> &'static str {
        match self {
            Profile::Development => "devcon=debug",
            Profile::Production => "devcon=info",
            Profile::Test => "trace",
        }
    }
}

/// Sink filter when `RUST_LOG` is unset: every target, `info` and up
const SINK_DEFAULT_DIRECTIVE: &str = "info";

static INIT_ONCE: Once = Once::new();

fn env_filter_or(directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
}

/// Initialize the logging facility
///
/// This function should be called once at application startup.
/// It sets up the tracing subscriber based on the selected profile.
/// Terminal output goes to stderr so it never mixes with a host's own
/// stdout.
///
/// # Profiles
///
/// - **Development**: Human-readable logs, `devcon=debug`
/// - **Production**: JSON structured logs, `devcon=info`
/// - **Test**: Bare registry; test capture is installed separately
///
/// `RUST_LOG` replaces the profile's directive.
///
/// # Example
///
/// ```
/// use devcon_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    install(profile, None);
}

/// Initialize the logging facility and mirror the host's events into `sink`
///
/// The sink has its own filter, independent of the profile's: `RUST_LOG`
/// when set, otherwise `info` for every target, so the host's crates are
/// captured and not only the console's.
///
/// Returns false if a global subscriber was already installed, in which
/// case `sink` receives nothing from this call.
pub fn init_with_sink(profile: Profile, sink: Arc<LogSink>) -> bool {
    install(profile, Some(SinkLayer::new(sink)))
}

fn install(profile: Profile, sink_layer: Option<SinkLayer>) -> bool {
    let mut installed = false;
    INIT_ONCE.call_once(|| {
        let registry = tracing_subscriber::registry().with(
            sink_layer.map(|layer| layer.with_filter(env_filter_or(SINK_DEFAULT_DIRECTIVE))),
        );
        let terminal_filter = env_filter_or(profile.default_directive());
        let result = match profile {
            Profile::Development => registry
                .with(
                    fmt::layer()
                        .with_writer(io::stderr)
                        .with_filter(terminal_filter),
                )
                .try_init(),
            Profile::Production => registry
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(io::stderr)
                        .with_filter(terminal_filter),
                )
                .try_init(),
            // Test capture is initialized separately via init_test_capture()
            Profile::Test => registry.try_init(),
        };
        installed = result.is_ok();
    });
    installed
}
