//! Credential loading.
//!
//! Credentials live in a dotenv-style file at `~/.gh-secrets` and are read
//! once at startup into an immutable struct. Values already present in the
//! process environment take precedence over the dotfile.

use crate::error::{Error, Result};

/// Dotfile name, resolved against the home directory.
pub const CREDENTIALS_FILE: &str = ".gh-secrets";

const USERNAME_VAR: &str = "GH_USERNAME";
const TOKEN_VAR: &str = "GH_PERSONAL_ACCESS_TOKEN";

/// Basic-auth credentials for the remote API.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub token: String,
}

impl Credentials {
    /// Load credentials from `~/.gh-secrets` and the process environment.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingCredential` when either variable is absent
    /// from both sources, and `Error::Dotenv` if the dotfile exists but
    /// cannot be parsed.
    pub fn load() -> Result<Self> {
        if let Some(path) = dirs::home_dir().map(|home| home.join(CREDENTIALS_FILE)) {
            if path.exists() {
                dotenvy::from_path(&path)?;
            }
        }

        let username =
            std::env::var(USERNAME_VAR).map_err(|_| Error::MissingCredential(USERNAME_VAR))?;
        let token = std::env::var(TOKEN_VAR).map_err(|_| Error::MissingCredential(TOKEN_VAR))?;

        Ok(Self { username, token })
    }
}
