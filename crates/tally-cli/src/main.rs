//! Tally CLI - Budget tracker with savings suggestions
//!
//! Usage:
//!   tally serve --port 3000           Start web server
//!   tally optimize --file tx.json     Print savings suggestions
//!   tally summary --file tx.csv       Print totals by category
//!   tally quote                       Print today's quote

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Serve {
            port,
            host,
            static_dir,
            no_demo_data,
            month,
        } => commands::cmd_serve(&host, port, static_dir.as_deref(), no_demo_data, month).await,
        Commands::Optimize { file, month } => commands::cmd_optimize(&file, month),
        Commands::Summary { file, json } => commands::cmd_summary(&file, json),
        Commands::Quote => commands::cmd_quote(),
    }
}
