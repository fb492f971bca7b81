//! Wiring types between the TUI thread and the async auth task.
//!
//! The TUI never performs HTTP itself; the login form sends an [AuthRequest]
//! over a channel and the auth task answers with an [AuthOutcome].

/// Requests the TUI sends to the auth task.
#[derive(Debug, Clone)]
pub enum AuthRequest {
    Login { email: String, password: String },
    Logout,
}

/// Results the auth task sends back.
#[derive(Debug, Clone)]
pub enum AuthOutcome {
    /// Token stored; the main screen may render.
    LoggedIn,
    /// The auth message string, shown verbatim on the login form.
    Failed(String),
    /// Token cleared; back to the login screen.
    LoggedOut,
}
