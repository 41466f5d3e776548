//! Health command implementation.

use crate::client::FactLensClient;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the health command.
pub async fn execute_health(client: &FactLensClient, formatter: &Formatter) -> Result<()> {
    let health = client.health().await?;
    println!("{}", formatter.format_health(client.base_url(), &health)?);
    Ok(())
}
