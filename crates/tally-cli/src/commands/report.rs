//! Optimize and summary commands

use std::path::Path;

use anyhow::{Context, Result};
use tally_core::analytics::Analytics;
use tally_core::import::load_transactions;
use tally_core::models::Transaction;
use tally_core::optimizer::{BudgetOptimizer, OptimizationContext};
use tracing::debug;

/// Load a transaction file, newest date first
///
/// The optimizer reads its recent-activity window from the front of the
/// list, so files in any order get the same treatment as the API.
fn load_newest_first(file: &Path) -> Result<Vec<Transaction>> {
    let mut transactions = load_transactions(file)
        .with_context(|| format!("Failed to load transactions from {}", file.display()))?;
    transactions.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(transactions)
}

/// Build the suggestion report for a file
pub fn optimize_report(file: &Path, month: Option<u32>) -> Result<String> {
    let transactions = load_newest_first(file)?;
    let ctx = match month {
        Some(month) => OptimizationContext::new(&transactions, month),
        None => OptimizationContext::current(&transactions),
    };
    let report = BudgetOptimizer::new()
        .analyze(&ctx)
        .context("Failed to generate optimization suggestions")?;

    debug!(
        month = ctx.current_month,
        sections = report.sections.len(),
        tier = report.tier.as_str(),
        "Built report"
    );

    Ok(report.render())
}

pub fn cmd_optimize(file: &Path, month: Option<u32>) -> Result<()> {
    println!("{}", optimize_report(file, month)?);
    Ok(())
}

pub fn cmd_summary(file: &Path, json: bool) -> Result<()> {
    let transactions = load_newest_first(file)?;
    let analytics = Analytics::from_transactions(&transactions);

    if json {
        println!("{}", serde_json::to_string_pretty(&analytics)?);
        return Ok(());
    }

    let summary = &analytics.summary;

    println!("📊 Summary ({} transactions)", summary.transaction_count);
    println!();
    println!("   Income:       ${:>12.2}", summary.total_income);
    println!("   Expenses:     ${:>12.2}", summary.total_expenses);
    println!("   Balance:      ${:>12.2}", summary.balance);
    println!("   Savings rate:  {:>12.1}%", summary.savings_rate);

    if analytics.categories.is_empty() {
        return Ok(());
    }

    println!();
    println!("   {:<20} {:>12} {:>7}", "Category", "Amount", "Share");
    println!("   {}", "─".repeat(41));
    for cat in &analytics.categories {
        println!(
            "   {:<20} {:>12.2} {:>6.1}%",
            cat.category,
            cat.amount,
            cat.percentage_of(summary.total_expenses)
        );
    }

    Ok(())
}
