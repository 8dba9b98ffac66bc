//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `MAPLESHOP_CATALOG` - Path to a JSON catalog file (default: built-in
//!   seed catalog)
//! - `MAPLESHOP_SESSION` - Path to the session state file (default:
//!   `.mapleshop-session.json` in the working directory)
//! - `MAPLESHOP_VERIFIED` - Whether a verified user session is active
//!   (`true`/`false`, default `true`). This stands in for the external
//!   identity provider's signal; set it to `false` to simulate a signed-out
//!   user.
//!
//! Log filtering follows the standard `RUST_LOG` variable.

use std::env;
use std::path::PathBuf;

use mapleshop_cart::IdentityGate;
use thiserror::Error;

/// Default session file, relative to the working directory.
const DEFAULT_SESSION_FILE: &str = ".mapleshop-session.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// JSON catalog file; `None` means the built-in seed catalog.
    pub catalog_path: Option<PathBuf>,
    /// Where favorites and cart lines persist between invocations.
    pub session_path: PathBuf,
    /// The identity provider's "verified user active" signal.
    pub verified: bool,
}

impl CliConfig {
    /// Load configuration from the environment.
    ///
    /// A `.env` file in the working directory is honored if present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] if `MAPLESHOP_VERIFIED` is
    /// set to something other than a boolean.
    pub fn load() -> Result<Self, ConfigError> {
        // Missing .env is fine
        dotenvy::dotenv().ok();

        let catalog_path = env::var_os("MAPLESHOP_CATALOG").map(PathBuf::from);
        let session_path = env::var_os("MAPLESHOP_SESSION")
            .map_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE), PathBuf::from);
        let verified = match env::var("MAPLESHOP_VERIFIED") {
            Ok(value) => parse_bool(&value).ok_or_else(|| {
                ConfigError::InvalidEnvVar("MAPLESHOP_VERIFIED".to_owned(), value)
            })?,
            Err(_) => true,
        };

        Ok(Self {
            catalog_path,
            session_path,
            verified,
        })
    }
}

impl IdentityGate for CliConfig {
    fn verified_user_active(&self) -> bool {
        self.verified
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
