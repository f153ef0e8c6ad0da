//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod admin;
pub mod analytics;
pub mod auth;
pub mod optimize;
pub mod quotes;
pub mod transactions;

// Re-export all handlers for use in router
pub use admin::*;
pub use analytics::*;
pub use auth::*;
pub use optimize::*;
pub use quotes::*;
pub use transactions::*;
