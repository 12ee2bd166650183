//! gh-secrets - manage encrypted GitHub Actions secrets from the command line.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gh_secrets::cli::output;
use gh_secrets::cli::{execute, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("GH_SECRETS_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("gh_secrets=debug")
        } else {
            EnvFilter::new("gh_secrets=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command).await {
        let suggestion = match &e {
            gh_secrets::error::Error::MissingCredential(_) => {
                Some("add GH_USERNAME and GH_PERSONAL_ACCESS_TOKEN to ~/.gh-secrets")
            }
            gh_secrets::error::Error::MalformedUrl(_) => {
                Some("expected https://github.com/<owner> or https://github.com/<owner>/<repository>")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
