//! Set command - fetch the target's public key, seal the value, submit it.

use tracing::info;

use crate::cli::output;
use crate::core::api::{ApiClient, PublicKey};
use crate::core::crypto;
use crate::core::target::Target;
use crate::error::Result;

/// Resolve the target and run one set sequence.
pub async fn execute(client: &ApiClient, name: &str, value: &str, url: &str) -> Result<()> {
    let target = Target::parse(url)?;
    apply(client, &target, name, value).await.map(|_| ())
}

/// One set sequence against an already-resolved target.
///
/// Returns `Ok(true)` when the secret was stored. Remote (`ko`) failures at
/// either step print the labeled envelope and return `Ok(false)`; the
/// sequence stops there, without retrying.
pub async fn apply(client: &ApiClient, target: &Target, name: &str, value: &str) -> Result<bool> {
    let key_res = client.fetch_public_key(target).await?;
    if !key_res.is_ok() {
        output::error_label("Error on get public key:");
        output::json(&key_res)?;
        return Ok(false);
    }

    let public_key: PublicKey = key_res.parse()?;
    let encrypted = crypto::seal(value, &public_key.key)?;
    info!("sealed {} for {}", name, target.path_slice());

    let put_res = client
        .put_secret(target, name, &encrypted, &public_key.key_id)
        .await?;
    if !put_res.is_ok() {
        output::error_label("Error on set secret:");
        output::json(&put_res)?;
        return Ok(false);
    }

    output::set_ok(name);
    Ok(true)
}
