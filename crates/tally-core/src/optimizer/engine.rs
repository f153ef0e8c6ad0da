//! Suggestion engine - turns a list of transactions into a text report

use chrono::Datelike;

use crate::analytics::{expenses_by_category, summarize, CategoryTotal, Summary};
use crate::error::{Error, Result};
use crate::models::Transaction;

use super::rules::{self, BalanceTier};
use super::types::{BudgetReport, PatternCounts, Section, SectionKind};

/// Inputs to one engine run
///
/// `transactions` are expected newest first; the pattern alerts only look
/// at the first [`rules::RECENT_WINDOW`] entries and do not re-sort.
pub struct OptimizationContext<'a> {
    pub transactions: &'a [Transaction],
    /// Zero-based month (0 = January, 11 = December)
    pub current_month: u32,
}

impl<'a> OptimizationContext<'a> {
    pub fn new(transactions: &'a [Transaction], current_month: u32) -> Self {
        Self {
            transactions,
            current_month,
        }
    }

    /// Context using the local clock's current month
    pub fn current(transactions: &'a [Transaction]) -> Self {
        Self::new(transactions, chrono::Local::now().month0())
    }
}

/// Rule-based budget optimizer
///
/// Stateless; one instance can serve any number of concurrent callers.
#[derive(Debug, Default, Clone, Copy)]
pub struct BudgetOptimizer;

impl BudgetOptimizer {
    pub fn new() -> Self {
        Self
    }

    /// Run every rule and collect the resulting sections
    pub fn analyze(&self, ctx: &OptimizationContext<'_>) -> Result<BudgetReport> {
        if ctx.transactions.is_empty() {
            return Err(Error::EmptyInput);
        }

        let summary = summarize(ctx.transactions);
        if ![summary.total_income, summary.total_expenses, summary.balance]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(Error::Internal("transaction totals overflowed".to_string()));
        }
        let top_category = expenses_by_category(ctx.transactions).into_iter().next();
        let tier = BalanceTier::classify(summary.balance, summary.savings_rate);
        let patterns = count_patterns(ctx.transactions);

        let mut sections = vec![
            Section::from_static(SectionKind::Header, rules::HEADER),
            Section::from_static(SectionKind::BalanceTier, tier.lines()),
        ];

        if let Some(top) = &top_category {
            sections.push(top_category_section(top, &summary));
        }

        if patterns.small > rules::SMALL_EXPENSE_ALERT_COUNT {
            sections.push(Section::from_static(
                SectionKind::SmallExpenses,
                rules::SMALL_EXPENSE_ALERT,
            ));
        }

        if patterns.large > rules::LARGE_EXPENSE_ALERT_COUNT {
            sections.push(Section::from_static(
                SectionKind::LargePurchases,
                rules::LARGE_PURCHASE_ALERT,
            ));
        }

        if rules::is_holiday_month(ctx.current_month) {
            sections.push(Section::from_static(
                SectionKind::Seasonal,
                rules::HOLIDAY_TIPS,
            ));
        }

        if summary
            .expense_ratio()
            .is_some_and(|ratio| ratio > rules::QUICK_WINS_EXPENSE_RATIO)
        {
            sections.push(Section::from_static(
                SectionKind::QuickWins,
                rules::QUICK_WINS,
            ));
        }

        if summary.balance > 0.0 {
            sections.push(reinforcement_section(summary.balance));
        }

        sections.push(Section::from_static(
            SectionKind::NextSteps,
            rules::NEXT_STEPS,
        ));

        tracing::debug!(
            transactions = ctx.transactions.len(),
            tier = tier.as_str(),
            sections = sections.len(),
            small = patterns.small,
            large = patterns.large,
            "Budget optimization complete"
        );

        Ok(BudgetReport {
            summary,
            tier,
            top_category,
            patterns,
            sections,
        })
    }
}

/// Generate the report text for `transactions` in the given zero-based month
pub fn generate_suggestions(transactions: &[Transaction], current_month: u32) -> Result<String> {
    let ctx = OptimizationContext::new(transactions, current_month);
    Ok(BudgetOptimizer::new().analyze(&ctx)?.render())
}

fn count_patterns(transactions: &[Transaction]) -> PatternCounts {
    transactions
        .iter()
        .take(rules::RECENT_WINDOW)
        .filter(|t| t.is_expense())
        .fold(PatternCounts::default(), |mut counts, t| {
            if t.amount < rules::SMALL_EXPENSE_LIMIT {
                counts.small += 1;
            }
            if t.amount > rules::LARGE_EXPENSE_LIMIT {
                counts.large += 1;
            }
            counts
        })
}

/// Round ties away from zero; `{:.N}` alone rounds exact ties to even
fn round_half_away(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let rounded = (value * factor).round() / factor;
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}

fn top_category_section(top: &CategoryTotal, summary: &Summary) -> Section {
    let mut lines = vec![format!(
        "💰 Your biggest expense: {} ({:.1}% of spending)",
        top.category,
        round_half_away(top.percentage_of(summary.total_expenses), 1)
    )];

    match rules::advice_for(&top.category) {
        Some(advice) => {
            lines.push(advice.title.to_string());
            lines.extend(advice.tips.iter().map(|tip| tip.to_string()));
        }
        None => lines.extend(rules::generic_advice(&top.category)),
    }

    lines.push(String::new());
    Section::new(SectionKind::TopCategory, lines)
}

fn reinforcement_section(balance: f64) -> Section {
    let mut lines = vec![format!(
        "🎉 You're saving ${:.2} this period!",
        round_half_away(balance, 2)
    )];
    if balance > rules::INVEST_SURPLUS_BALANCE {
        lines.extend(rules::INVEST_SURPLUS.iter().map(|l| l.to_string()));
    }
    lines.push(rules::KEEP_IT_UP.to_string());
    Section::new(SectionKind::Reinforcement, lines)
}
