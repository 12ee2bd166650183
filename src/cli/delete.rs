//! Delete command - remove a secret by name.

use crate::cli::output;
use crate::core::api::ApiClient;
use crate::core::target::Target;
use crate::error::Result;

/// Delete one secret for the target.
pub async fn execute(client: &ApiClient, name: &str, url: &str) -> Result<()> {
    let target = Target::parse(url)?;
    let res = client.delete_secret(&target, name).await?;

    if res.is_ok() {
        output::delete_ok(name);
    } else {
        output::error_label("Error on delete:");
        output::json(&res)?;
    }
    Ok(())
}
