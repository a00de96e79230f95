//! lead-inbox - extract leads from the forwarded email inbox

use anyhow::Context;
use clap::{Parser, Subcommand};
use lead_inbox::{Inbox, InboxConfig, ParseOutcome};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "lead-inbox")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Inbox file, overriding the configuration
    #[arg(short, long, global = true, env = "LEAD_INBOX_PATH")]
    inbox: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the leads currently in the inbox
    Parse,

    /// Print the leads, then clear the inbox
    Drain,

    /// Truncate the inbox
    Clear,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => InboxConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => {
            let mut config = InboxConfig::default();
            config.apply_env();
            config
        }
    };
    if let Some(inbox) = cli.inbox {
        config.inbox_path = inbox;
    }
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let inbox = Inbox::open(&config.inbox_path).await?;

    match cli.command {
        Command::Parse => print_outcome(&inbox.parse().await?, cli.pretty)?,
        Command::Drain => print_outcome(&inbox.drain().await?, cli.pretty)?,
        Command::Clear => inbox.clear().await?,
    }

    Ok(())
}

fn print_outcome(outcome: &ParseOutcome, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(&outcome.leads)?
    } else {
        serde_json::to_string(&outcome.leads)?
    };
    println!("{json}");
    Ok(())
}
