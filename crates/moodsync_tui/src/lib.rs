//! moodsync-tui — TUI for MoodSync.
//!
//! Theming in `theme`; state and view in [state] and [view]; engine/auth
//! wiring types in [auth_flow]; run with [run::run_tui].

pub mod auth_flow;
pub mod run;
pub mod runtime_events;
pub mod state;
pub mod theme;
pub mod view;

pub use auth_flow::{AuthOutcome, AuthRequest};
pub use run::{run_tui, TuiChannels};
pub use state::{Panel, Screen, TuiState};
pub use view::draw as draw_view;
