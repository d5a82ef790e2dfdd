//! Tracing setup: structured logging with span definitions.

pub mod spans;

use std::sync::Once;

use tracing_subscriber::EnvFilter;

use barn_core::config::ObservabilityConfig;

/// Environment variable holding per-target filter directives.
/// Format: `BARN_LOG=barn_schedule=debug,barn_insights=info`
pub const LOG_ENV_VAR: &str = "BARN_LOG";

static INIT: Once = Once::new();

/// Filter from `BARN_LOG`, falling back to the configured level.
pub fn resolve_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// Initialize the global tracing subscriber.
///
/// Idempotent: only the first call installs a subscriber. A subscriber that
/// was already installed elsewhere is left in place.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = resolve_filter(config);
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);

        let installed = if config.json_output {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
        if let Err(e) = installed {
            tracing::debug!(error = %e, "tracing subscriber already installed");
        }
    });
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .with_test_writer()
        .try_init();
}
