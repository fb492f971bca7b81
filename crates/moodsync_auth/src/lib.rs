//! moodsync-auth — credential service client, token store, session gate.
//!
//! Two HTTP calls against the external auth service ([AuthClient::register],
//! [AuthClient::login]), an opaque bearer token persisted as a single file
//! ([TokenStore]), and a purely client-side presence check ([SessionGate]).
//! No retries, no validation, no expiry handling — the caller interprets the
//! returned token/message.

pub mod client;
pub mod config;
pub mod error;
pub mod session;
pub mod token;
pub mod types;

pub use client::AuthClient;
pub use config::AuthConfig;
pub use error::{AuthError, Result};
pub use session::{Access, SessionGate};
pub use token::TokenStore;
pub use types::{LoginResponse, RegisterResponse, UserProfile};
