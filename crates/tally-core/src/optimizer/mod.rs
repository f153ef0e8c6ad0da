//! Budget Optimizer - rule-based savings suggestions
//!
//! Given a user's transactions (newest first) and the current month, the
//! optimizer produces a multi-section text report:
//!
//! - **Balance tier** - deficit, low savings, excellent, or positive
//! - **Top category** - tips for the biggest expense category
//! - **Pattern alerts** - many small purchases or several large ones
//! - **Seasonal** - holiday tips in December and January
//! - **Quick wins** - when expenses exceed 80% of income
//! - **Reinforcement** - when there is money left over
//!
//! The engine is a pure function of its inputs. The month is passed in
//! rather than read from the clock so reports are reproducible.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tally_core::optimizer::{BudgetOptimizer, OptimizationContext};
//!
//! let ctx = OptimizationContext::new(&transactions, 11);
//! let report = BudgetOptimizer::new().analyze(&ctx)?;
//! println!("{}", report.render());
//! ```

pub mod engine;
pub mod rules;
pub mod types;

pub use engine::{generate_suggestions, BudgetOptimizer, OptimizationContext};
pub use rules::{BalanceTier, CategoryAdvice};
pub use types::{BudgetReport, PatternCounts, Section, SectionKind};
