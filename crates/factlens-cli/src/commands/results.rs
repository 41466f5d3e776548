//! Results command implementation.

use crate::cli::ResultsArgs;
use crate::client::FactLensClient;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the results command.
pub async fn execute_results(
    args: ResultsArgs,
    client: &FactLensClient,
    formatter: &Formatter,
) -> Result<()> {
    if args.clear {
        client.clear().await?;
        println!("{}", formatter.success("Cleared the latest result"));
        return Ok(());
    }

    match client.latest().await? {
        Some(result) => println!("{}", formatter.format_result(&result)?),
        None => println!("{}", formatter.info("No fact-check result available")),
    }

    Ok(())
}
