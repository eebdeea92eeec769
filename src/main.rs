use anyhow::Context;
use clap::Parser;

use clipformat::bootstrap::tracing::init_tracing_subscriber;
use clipformat::bootstrap::{load_or_default, wire_desktop_helper};
use clipformat::cli::{execute, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing_subscriber(cli.verbose).context("Failed to initialize tracing")?;

    let config = load_or_default(cli.config.clone())?;
    // A CLI write must outlive the process.
    let hold_until_replaced = matches!(cli.command, Commands::Set { .. });
    let helper = wire_desktop_helper(&config, hold_until_replaced).await?;

    execute(&helper, cli.command, &mut std::io::stdout()).await
}
