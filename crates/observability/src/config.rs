//! Configuration for observability/telemetry

use std::sync::Arc;

/// Sink for runtime log lines (e.g. TUI debug traces). Called from the tracing layer; must not block.
pub type LogSink = Arc<dyn Fn(String) + Send + Sync>;

/// Observability configuration
#[derive(Clone)]
pub struct ObservabilityConfig {
    /// Service name, used as the default tracing target prefix
    pub service_name: String,

    /// Enable console/fmt output. Turn off while the TUI owns the terminal.
    pub enable_console: bool,

    /// Log level filter (e.g., "info", "debug", "trace")
    /// Defaults to "info" if not set
    pub log_level: Option<String>,

    /// Optional sink for each formatted log line (e.g. TUI debug traces).
    pub log_sink: Option<LogSink>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: "moodsync".to_string(),
            enable_console: true,
            log_level: None,
            log_sink: None,
        }
    }
}

impl std::fmt::Debug for ObservabilityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservabilityConfig")
            .field("service_name", &self.service_name)
            .field("enable_console", &self.enable_console)
            .field("log_level", &self.log_level)
            .field("log_sink", &self.log_sink.as_ref().map(|_| "Some(LogSink)"))
            .finish()
    }
}

impl ObservabilityConfig {
    /// Create a new configuration with service name
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    /// Enable or disable console output
    pub fn with_console(mut self, enable: bool) -> Self {
        self.enable_console = enable;
        self
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Sink for runtime log lines (e.g. TUI debug traces). Must not block.
    pub fn with_log_sink(mut self, sink: LogSink) -> Self {
        self.log_sink = Some(sink);
        self
    }

    /// Build from environment variables
    ///
    /// Reads:
    /// - `SERVICE_NAME` → service_name
    /// - `RUST_LOG` → log_level
    pub fn from_env() -> Self {
        let service_name =
            std::env::var("SERVICE_NAME").unwrap_or_else(|_| "moodsync".to_string());
        let log_level = std::env::var("RUST_LOG").ok();

        Self {
            service_name,
            enable_console: true,
            log_level,
            log_sink: None,
        }
    }
}
