//! Tracing subscriber initialization.
//!
//! Composes env-filter, optional console fmt layer, and the optional TUI log
//! sink layer into one registry. Console output must be disabled while the
//! TUI owns the terminal; the sink layer carries runtime logs there instead.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Registry};

use crate::config::ObservabilityConfig;
use crate::error::ObservabilityError;
use crate::tui_log_layer;

/// Initialize tracing with the given configuration.
///
/// Returns an error if a global subscriber is already installed.
pub fn init(config: ObservabilityConfig) -> Result<(), ObservabilityError> {
    let env_filter = config
        .log_level
        .as_ref()
        .map(|level| tracing_subscriber::EnvFilter::new(level.as_str()))
        .unwrap_or_else(|| {
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
        });

    // Build layers separately, then compose once to avoid type mismatch
    let fmt_layer = config
        .enable_console
        .then_some(tracing_subscriber::fmt::layer());

    // Optional TUI log sink (runtime logs for debug traces screen)
    let tui_layer = tui_log_layer::tui_log_layer(config.log_sink.clone());

    let subscriber = Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .with(tui_layer);

    subscriber
        .try_init()
        .map_err(|e| ObservabilityError::InitFailed(e.to_string()))?;

    tracing::debug!(service.name = %config.service_name, "tracing initialized");

    Ok(())
}

/// Initialize from environment variables (see [ObservabilityConfig::from_env]).
pub fn init_from_env() -> Result<(), ObservabilityError> {
    init(ObservabilityConfig::from_env())
}
