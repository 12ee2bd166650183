//! Command-line interface.

pub mod delete;
pub mod list;
pub mod output;
pub mod set;
pub mod set_all;
pub mod show;

use clap::{ArgAction, Parser, Subcommand};

use crate::core::api::ApiClient;
use crate::core::config::Credentials;
use crate::error::Result;

/// gh-secrets - manage encrypted GitHub Actions secrets.
#[derive(Parser)]
#[command(
    name = "gh-secrets",
    about = "Manage encrypted GitHub Actions secrets for a repository or organization",
    version,
    disable_version_flag = true,
    after_help = "Examples:\n  \
        gh-secrets list https://github.com/acme\n  \
        gh-secrets show API_KEY https://github.com/acme/widgets\n  \
        gh-secrets set API_KEY s3cret https://github.com/acme/widgets\n  \
        gh-secrets setAll secrets.env https://github.com/acme/widgets\n  \
        gh-secrets delete API_KEY https://github.com/acme/widgets"
)]
pub struct Cli {
    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// List all secrets in a repository/organization without revealing their values
    List {
        /// Target URL (https://github.com/<owner> or https://github.com/<owner>/<repository>)
        url: String,
    },

    /// Get a single secret without revealing its encrypted value
    Show {
        /// Secret name (e.g., API_KEY)
        name: String,
        /// Target URL
        url: String,
    },

    /// Create or update a secret with a locally encrypted value
    Set {
        /// Secret name (e.g., API_KEY)
        name: String,
        /// Plaintext value, encrypted locally before submission
        value: String,
        /// Target URL
        url: String,
    },

    /// Create or update a batch of secrets from a dotenv-style file
    #[command(name = "setAll", alias = "set-all")]
    SetAll {
        /// Path to a KEY=value file
        file: String,
        /// Target URL
        url: String,
    },

    /// Delete a secret by name
    Delete {
        /// Secret name
        name: String,
        /// Target URL
        url: String,
    },
}

/// Execute a command.
///
/// Credentials are loaded once here and threaded through the API client;
/// nothing reads the process environment after this point.
pub async fn execute(command: Command) -> Result<()> {
    let credentials = Credentials::load()?;
    let client = ApiClient::new(credentials);

    match command {
        Command::List { url } => list::execute(&client, &url).await,
        Command::Show { name, url } => show::execute(&client, &name, &url).await,
        Command::Set { name, value, url } => set::execute(&client, &name, &value, &url).await,
        Command::SetAll { file, url } => set_all::execute(&client, &file, &url).await,
        Command::Delete { name, url } => delete::execute(&client, &name, &url).await,
    }
}
