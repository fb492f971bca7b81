//! Token store: one file, one opaque string.
//!
//! Presence/absence of the file is the entire access-control check; the token
//! is opaque bearer data for the external service. All reads and writes go
//! through this type — there is no other session state.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AuthError, Result};

/// Persistent store for the session token.
#[derive(Clone, Debug)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Store at the default location, `~/.moodsync/token`.
    pub fn new() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| AuthError::Config("home directory not found".to_string()))?;
        Ok(Self::at(
            home.join(moodsync_constant::app::DATA_DIR)
                .join(moodsync_constant::app::TOKEN_FILE),
        ))
    }

    /// Store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored token, or `None` when absent or empty.
    pub fn load(&self) -> Option<String> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    pub fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;
        Ok(())
    }

    /// Remove the stored token. Missing file is not an error.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
