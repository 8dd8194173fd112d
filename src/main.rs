//! deal-agent - one-pass product availability monitor.
//!
//! Each invocation checks every configured target once and exits;
//! scheduling repeated passes is the caller's job (cron or similar).

use anyhow::Result;
use clap::{Parser, Subcommand};
use deal_agent::commands::RunCommand;
use deal_agent::config::Config;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "deal-agent",
    version,
    about = "One-pass stock availability monitor with Telegram alerts"
)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check every configured target once
    #[command(alias = "r")]
    Run {
        /// Print notifications instead of sending them
        #[arg(long)]
        dry_run: bool,
    },

    /// List configured targets
    Targets,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // A missing or malformed config is fatal; nothing runs without it.
    let config = Config::load(cli.config.as_deref())?.with_env();

    match cli.command {
        Commands::Run { dry_run } => {
            let report = RunCommand::new(config).dry_run(dry_run).execute().await?;
            println!("{}", report.summary());
        }

        Commands::Targets => {
            println!("Configured targets:\n");
            println!("{:<20} {}", "Name", "URL");
            println!("{:-<20} {:-<40}", "", "");

            for target in &config.targets {
                println!("{:<20} {}", target.name, target.url);
            }
        }
    }

    Ok(())
}
