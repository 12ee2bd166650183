//! SetAll command - batch set from a dotenv-style file.

use std::path::Path;

use tokio::task::JoinSet;
use tracing::info;

use crate::cli::{output, set};
use crate::core::api::ApiClient;
use crate::core::env;
use crate::core::target::Target;
use crate::error::{Error, Result};

/// Run one independent set sequence per KEY=value pair in `file`.
///
/// Sequences are spawned as concurrent tasks; a failing line never blocks
/// the others. Each outcome is joined individually and a summary line is
/// printed at the end.
///
/// # Errors
///
/// Returns `Error::BatchFileNotFound` before any parsing or network call
/// when the file does not exist.
pub async fn execute(client: &ApiClient, file: &str, url: &str) -> Result<()> {
    let path = Path::new(file);
    if !path.exists() {
        return Err(Error::BatchFileNotFound(file.to_string()));
    }

    let target = Target::parse(url)?;
    let pairs = env::read(path)?;
    info!("dispatching {} secrets from {}", pairs.len(), file);

    let mut tasks = JoinSet::new();
    for (name, value) in pairs {
        let client = client.clone();
        let target = target.clone();
        tasks.spawn(async move {
            let stored = set::apply(&client, &target, &name, &value).await;
            (name, stored)
        });
    }

    let mut stored = 0usize;
    let mut failed = 0usize;
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((_, Ok(true))) => stored += 1,
            // Remote failure: the envelope was already printed by the sequence.
            Ok((_, Ok(false))) => failed += 1,
            Ok((name, Err(e))) => {
                failed += 1;
                output::error(&format!("{}: {}", name, e));
            }
            Err(e) => {
                failed += 1;
                output::error(&format!("set task failed: {}", e));
            }
        }
    }

    output::batch_summary(stored, failed);
    Ok(())
}
