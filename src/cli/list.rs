//! List command - enumerate secrets for a target.

use crate::cli::output;
use crate::core::api::ApiClient;
use crate::core::target::Target;
use crate::error::Result;

/// List all secrets for the target without revealing their values.
pub async fn execute(client: &ApiClient, url: &str) -> Result<()> {
    let target = Target::parse(url)?;
    let res = client.list_secrets(&target).await?;

    if !res.is_ok() {
        output::error_label("Error on get secrets:");
    }
    output::json(&res)
}
