//! MoodSync observability — tracing setup for the CLI and TUI.
//!
//! # Features
//!
//! - env-filter driven log levels (`RUST_LOG`, default "info")
//! - Optional console (fmt) output — disabled while the TUI owns the terminal
//! - Optional log sink layer that forwards each formatted line to the TUI
//!   debug traces screen
//!
//! # Quick Start
//!
//! ```no_run
//! use moodsync_observability::{init, ObservabilityConfig};
//!
//! let config = ObservabilityConfig::new("moodsync").with_log_level("info");
//! init(config)?;
//!
//! tracing::info!("service started");
//! # Ok::<(), moodsync_observability::ObservabilityError>(())
//! ```

pub mod config;
pub mod error;
pub mod telemetry;
pub mod tui_log_layer;

pub use config::{LogSink, ObservabilityConfig};
pub use error::ObservabilityError;
pub use telemetry::{init, init_from_env};
