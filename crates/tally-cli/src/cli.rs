//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tally - Track spending and get savings suggestions
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Budget tracker with rule-based savings suggestions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Directory containing static files to serve (e.g., ui/dist)
        #[arg(long)]
        static_dir: Option<PathBuf>,

        /// Start with an empty store instead of the demo account
        #[arg(long)]
        no_demo_data: bool,

        /// Pin the month the optimizer sees (0 = January, 11 = December)
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=11))]
        month: Option<u32>,
    },

    /// Print budget optimization suggestions for a transaction file
    Optimize {
        /// JSON or CSV file of transactions
        #[arg(short, long)]
        file: PathBuf,

        /// Month to evaluate (0 = January, 11 = December; defaults to now)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(0..=11))]
        month: Option<u32>,
    },

    /// Print totals and the category breakdown for a transaction file
    Summary {
        /// JSON or CSV file of transactions
        #[arg(short, long)]
        file: PathBuf,

        /// Print the full analytics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print today's financial quote
    Quote,
}
