//! Session state persisted between CLI invocations.
//!
//! Favorites and cart lines are the only session-scoped state; pricing is
//! always derived fresh. The state lives in a small JSON file, the CLI's
//! stand-in for the app's on-device store.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use mapleshop_cart::SelectionSet;
use mapleshop_core::CartLine;

/// Errors reading or writing the session file.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session file I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("session file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The persisted session: favorites plus cart lines.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionState {
    /// Favorited product ids.
    #[serde(default)]
    pub favorites: SelectionSet,
    /// Cart lines with their quantities.
    #[serde(default)]
    pub cart: Vec<CartLine>,
}

impl SessionState {
    /// Load session state, starting a fresh session if the file does not
    /// exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the file exists but cannot be read or
    /// parsed.
    pub fn load(path: &Path) -> Result<Self, SessionError> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let state = serde_json::from_str(&contents)?;
                debug!(path = %path.display(), "session loaded");
                Ok(state)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no session file, starting fresh");
                Ok(Self::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Write session state back to disk.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), SessionError> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        debug!(path = %path.display(), "session saved");
        Ok(())
    }
}
