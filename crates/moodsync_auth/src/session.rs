//! Session gate: a purely client-side presence check over the token store.
//!
//! No expiry, no server-side validation. The UI maps [Access::LoginRequired]
//! to the login view and [Access::Granted] to the protected view.

use crate::error::Result;
use crate::token::TokenStore;

/// Outcome of the gate check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Granted { token: String },
    LoginRequired,
}

impl Access {
    pub fn is_granted(&self) -> bool {
        matches!(self, Access::Granted { .. })
    }
}

/// The explicit auth-context value handed to views, with a single
/// read/write/clear contract over the underlying store.
#[derive(Clone, Debug)]
pub struct SessionGate {
    store: TokenStore,
}

impl SessionGate {
    pub fn new(store: TokenStore) -> Self {
        Self { store }
    }

    /// Token present → granted; absent → login required. The only branch.
    pub fn check(&self) -> Access {
        match self.store.load() {
            Some(token) => Access::Granted { token },
            None => Access::LoginRequired,
        }
    }

    /// Persist a freshly issued token.
    pub fn establish(&self, token: &str) -> Result<()> {
        self.store.save(token)
    }

    /// Delete the stored token.
    pub fn logout(&self) -> Result<()> {
        self.store.clear()
    }
}
