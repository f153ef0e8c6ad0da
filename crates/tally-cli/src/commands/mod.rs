//! CLI command implementations
//!
//! - `serve` - Web server command
//! - `report` - Suggestions and summaries for a transaction file
//! - `quote` - Quote of the day

pub mod quote;
pub mod report;
pub mod serve;

// Re-export command functions for main.rs
pub use quote::*;
pub use report::*;
pub use serve::*;
