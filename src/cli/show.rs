//! Show command - fetch a single secret's metadata.

use crate::cli::output;
use crate::core::api::ApiClient;
use crate::core::target::Target;
use crate::error::Result;

/// Show one secret for the target; the value stays encrypted server-side.
pub async fn execute(client: &ApiClient, name: &str, url: &str) -> Result<()> {
    let target = Target::parse(url)?;
    let res = client.fetch_secret(&target, name).await?;

    if !res.is_ok() {
        output::error_label("Error on get secret:");
    }
    output::json(&res)
}
