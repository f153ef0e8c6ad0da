//! Tally Core Library
//!
//! Shared functionality for the Tally budget tracker:
//! - Transaction and user models
//! - Rule-based budget optimization suggestions
//! - Spending analytics (totals, categories, monthly and daily series)
//! - Bearer token rules for login and signup
//! - Storage traits with an in-memory implementation
//! - CSV/JSON transaction import for the CLI

pub mod admin;
pub mod analytics;
pub mod auth;
pub mod error;
pub mod import;
pub mod models;
pub mod optimizer;
pub mod quotes;
pub mod store;

pub use admin::AdminStats;
pub use analytics::{Analytics, CategoryTotal, Summary};
pub use error::{Error, Result};
pub use models::{
    NewTransaction, NewUser, Session, Transaction, TransactionType, User, UserProfile,
};
pub use optimizer::{
    generate_suggestions, BudgetOptimizer, BudgetReport, OptimizationContext, SectionKind,
};
pub use quotes::{quote_for_date, Quote};
pub use store::{MemoryStore, Store, TransactionStore, UserStore};
