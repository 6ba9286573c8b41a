//! # Structured Logging Module
//!
//! Environment-aware structured logging for embedding applications that do
//! not bring their own `tracing` subscriber. Library code only emits events
//! through `tracing`; calling this initializer is optional.

use std::sync::OnceLock;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize console logging with environment-specific configuration.
///
/// Level selection: `RUST_LOG` wins when set, otherwise the level derives
/// from `STREAMLINE_ENV` (`production` => `info`, anything else => `debug`).
/// Set `STREAMLINE_LOG_FORMAT=json` for machine-readable output.
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = get_environment();
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level(&environment)));

        let json_output = std::env::var("STREAMLINE_LOG_FORMAT")
            .map(|format| format.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        // A subscriber may already be installed by the embedding application.
        let result = if json_output {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_target(true))
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_target(true))
                .try_init()
        };

        if result.is_ok() {
            tracing::debug!(environment = %environment, "streamline logging initialized");
        }
    });
}

fn get_environment() -> String {
    std::env::var("STREAMLINE_ENV").unwrap_or_else(|_| "development".to_string())
}

fn default_level(environment: &str) -> &'static str {
    match environment {
        "production" => "info",
        _ => "debug",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_per_environment() {
        assert_eq!(default_level("production"), "info");
        assert_eq!(default_level("development"), "debug");
        assert_eq!(default_level("test"), "debug");
    }

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging();
        init_logging();
    }
}
