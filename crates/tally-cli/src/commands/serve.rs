//! Server command implementation

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tally_core::{auth, MemoryStore, Store};
use tally_server::ServerConfig;

/// Parse a comma-separated origin list, dropping blanks
pub fn parse_origins(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

pub async fn cmd_serve(
    host: &str,
    port: u16,
    static_dir: Option<&Path>,
    no_demo_data: bool,
    month: Option<u32>,
) -> Result<()> {
    println!("🚀 Starting Tally web server...");
    println!("   Listening: http://{}:{}", host, port);
    if let Some(dir) = static_dir {
        println!("   Static files: {}", dir.display());
    }

    let store = if no_demo_data {
        MemoryStore::new()
    } else {
        println!(
            "   👤 Demo account: {} / {}",
            auth::DEMO_EMAIL,
            auth::DEMO_PASSWORD
        );
        MemoryStore::with_demo_data().context("Failed to seed demo data")?
    };
    println!("   ⚠️  Data is kept in memory and lost on restart");

    let allowed_origins = parse_origins(&std::env::var("TALLY_ALLOWED_ORIGINS").unwrap_or_default());
    if !allowed_origins.is_empty() {
        println!(
            "   🌐 CORS origins: {} (TALLY_ALLOWED_ORIGINS)",
            allowed_origins.join(", ")
        );
    }
    println!();

    let config = ServerConfig {
        allowed_origins,
        month_override: month,
    };

    let store: Arc<dyn Store> = Arc::new(store);
    let static_dir = static_dir.map(|p| p.to_string_lossy().into_owned());

    tally_server::serve_with_config(store, host, port, static_dir.as_deref(), config).await
}
