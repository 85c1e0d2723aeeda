//! Tracing and logging (shared setup).

/// Environment-driven configuration.
pub mod config;

/// Tracing subscriber installation (filters, output format).
pub mod tracing;

pub use config::{ConfigError, LogFormat, ObservabilityConfig};

/// Initialize process-wide observability from the environment.
///
/// Falls back to defaults (and says so once the subscriber is up) when the
/// environment holds an invalid value. Safe to call multiple times; subsequent
/// calls become no-ops.
pub fn init() {
    match ObservabilityConfig::from_env() {
        Ok(config) => {
            tracing::init(&config);
        }
        Err(err) => {
            if tracing::init(&ObservabilityConfig::default()) {
                ::tracing::warn!(error = %err, "invalid observability config; using defaults");
            }
        }
    }
}
