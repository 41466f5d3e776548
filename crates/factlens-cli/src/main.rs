//! FactLens CLI - Fact-check content against a FactLens server.

use anyhow::Context;
use clap::Parser;
use factlens_cli::commands;
use factlens_cli::{Cli, Command, FactLensClient, Formatter};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let formatter = Formatter::new(cli.format.into(), !cli.no_color);

    if let Err(e) = run(cli, &formatter).await {
        eprintln!("{}", formatter.error(&format!("{:#}", e)));
        std::process::exit(1);
    }
}

async fn run(cli: Cli, formatter: &Formatter) -> anyhow::Result<()> {
    let client = FactLensClient::new(&cli.server);

    match cli.command {
        Command::Check(args) => commands::execute_check(args, &client, formatter)
            .await
            .context("Fact-check failed")?,
        Command::Results(args) => commands::execute_results(args, &client, formatter)
            .await
            .with_context(|| format!("Could not reach results on {}", client.base_url()))?,
        Command::Health => commands::execute_health(&client, formatter)
            .await
            .with_context(|| format!("Health check against {} failed", client.base_url()))?,
    }

    Ok(())
}
