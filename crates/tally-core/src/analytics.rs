//! Aggregate analytics over a user's transactions
//!
//! Everything here is a linear pass over an in-memory slice. The suggestion
//! engine builds on [`summarize`] and [`expenses_by_category`].

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::Transaction;

/// Number of most recent spending days kept by [`daily_spending`]
pub const DAILY_SPENDING_DAYS: usize = 30;

/// Income, expenses, and what is left over
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
    /// Percentage of income retained; 0 when there is no income
    pub savings_rate: f64,
    pub transaction_count: usize,
}

impl Summary {
    /// Expenses as a fraction of income, or `None` without income
    pub fn expense_ratio(&self) -> Option<f64> {
        if self.total_income > 0.0 {
            Some(self.total_expenses / self.total_income)
        } else {
            None
        }
    }
}

/// Total spent in a single category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

impl CategoryTotal {
    /// Share of `total_expenses` in percent; 0 when nothing was spent or
    /// the share is not a finite number
    pub fn percentage_of(&self, total_expenses: f64) -> f64 {
        if total_expenses <= 0.0 {
            return 0.0;
        }
        let share = self.amount / total_expenses * 100.0;
        if share.is_finite() {
            share
        } else {
            0.0
        }
    }
}

/// Income and expenses for one calendar month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTotals {
    /// Display label, e.g. "Jun 2024"
    pub label: String,
    pub year: i32,
    /// 1-based month number
    pub month: u32,
    pub income: f64,
    pub expenses: f64,
}

/// Expenses recorded on a single day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySpending {
    pub date: NaiveDate,
    pub amount: f64,
}

/// Everything the analytics page shows, computed in one go
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub summary: Summary,
    pub categories: Vec<CategoryTotal>,
    pub monthly: Vec<MonthlyTotals>,
    pub daily: Vec<DailySpending>,
    pub average_daily_spending: f64,
    pub category_count: usize,
}

impl Analytics {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let summary = summarize(transactions);
        let categories = expenses_by_category(transactions);
        let daily = daily_spending(transactions);
        let average_daily_spending = summary.total_expenses / daily.len().max(1) as f64;

        Self {
            summary,
            category_count: categories.len(),
            categories,
            monthly: monthly_totals(transactions),
            daily,
            average_daily_spending,
        }
    }
}

/// Sum income and expenses and derive balance and savings rate
pub fn summarize(transactions: &[Transaction]) -> Summary {
    let mut total_income = 0.0;
    let mut total_expenses = 0.0;

    for tx in transactions {
        if tx.is_income() {
            total_income += tx.amount;
        } else {
            total_expenses += tx.amount;
        }
    }

    let balance = total_income - total_expenses;
    let savings_rate = if total_income > 0.0 {
        balance / total_income * 100.0
    } else {
        0.0
    };

    Summary {
        total_income,
        total_expenses,
        balance,
        savings_rate,
        transaction_count: transactions.len(),
    }
}

/// Expense totals per category, largest first
///
/// Categories are keyed exactly as stored (case-sensitive). Equal totals
/// keep the order in which the category first appeared.
pub fn expenses_by_category(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for tx in transactions.iter().filter(|t| t.is_expense()) {
        match index.get(tx.category.as_str()) {
            Some(&i) => totals[i].amount += tx.amount,
            None => {
                index.insert(tx.category.as_str(), totals.len());
                totals.push(CategoryTotal {
                    category: tx.category.clone(),
                    amount: tx.amount,
                });
            }
        }
    }

    // sort_by is stable, which is what keeps ties in first-seen order
    totals.sort_by(|a, b| {
        b.amount
            .partial_cmp(&a.amount)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    totals
}

/// Income vs expenses per calendar month, oldest first
pub fn monthly_totals(transactions: &[Transaction]) -> Vec<MonthlyTotals> {
    let mut months: BTreeMap<(i32, u32), MonthlyTotals> = BTreeMap::new();

    for tx in transactions {
        let key = (tx.date.year(), tx.date.month());
        let entry = months.entry(key).or_insert_with(|| MonthlyTotals {
            label: tx.date.format("%b %Y").to_string(),
            year: key.0,
            month: key.1,
            income: 0.0,
            expenses: 0.0,
        });
        if tx.is_income() {
            entry.income += tx.amount;
        } else {
            entry.expenses += tx.amount;
        }
    }

    months.into_values().collect()
}

/// Expenses per day for the most recent [`DAILY_SPENDING_DAYS`] days with spending
pub fn daily_spending(transactions: &[Transaction]) -> Vec<DailySpending> {
    let mut days: BTreeMap<NaiveDate, f64> = BTreeMap::new();

    for tx in transactions.iter().filter(|t| t.is_expense()) {
        *days.entry(tx.date).or_insert(0.0) += tx.amount;
    }

    let skip = days.len().saturating_sub(DAILY_SPENDING_DAYS);
    days.into_iter()
        .skip(skip)
        .map(|(date, amount)| DailySpending { date, amount })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionType;

    fn tx(kind: TransactionType, amount: f64, category: &str, date: &str) -> Transaction {
        Transaction {
            id: format!("{}-{}-{}", category, amount, date),
            transaction_type: kind,
            amount,
            category: category.to_string(),
            description: String::new(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        }
    }

    #[test]
    fn test_percentage_of_non_finite_is_zero() {
        let total = CategoryTotal {
            category: "Food".into(),
            amount: f64::INFINITY,
        };
        assert_eq!(total.percentage_of(f64::INFINITY), 0.0);
        assert_eq!(total.percentage_of(0.0), 0.0);

        let half = CategoryTotal {
            category: "Food".into(),
            amount: 50.0,
        };
        assert_eq!(half.percentage_of(200.0), 25.0);
    }

    #[test]
    fn test_summarize_totals() {
        let txs = vec![
            tx(TransactionType::Income, 5000.0, "Salary", "2024-06-01"),
            tx(TransactionType::Expense, 1200.0, "Bills", "2024-06-02"),
            tx(TransactionType::Expense, 300.0, "Food", "2024-06-03"),
        ];
        let summary = summarize(&txs);

        assert_eq!(summary.total_income, 5000.0);
        assert_eq!(summary.total_expenses, 1500.0);
        assert_eq!(summary.balance, 3500.0);
        assert!((summary.savings_rate - 70.0).abs() < 1e-9);
        assert_eq!(summary.transaction_count, 3);
    }

    #[test]
    fn test_summarize_without_income_has_zero_savings_rate() {
        let txs = vec![tx(TransactionType::Expense, 40.0, "Food", "2024-06-01")];
        let summary = summarize(&txs);

        assert_eq!(summary.savings_rate, 0.0);
        assert_eq!(summary.expense_ratio(), None);
        assert_eq!(summary.balance, -40.0);
    }

    #[test]
    fn test_expenses_by_category_sorted_with_stable_ties() {
        let txs = vec![
            tx(TransactionType::Expense, 50.0, "Shopping", "2024-06-01"),
            tx(TransactionType::Expense, 80.0, "Food", "2024-06-02"),
            tx(TransactionType::Income, 999.0, "Salary", "2024-06-02"),
            tx(TransactionType::Expense, 30.0, "Fun", "2024-06-03"),
            tx(TransactionType::Expense, 30.0, "Food", "2024-06-04"),
            tx(TransactionType::Expense, 60.0, "Fun", "2024-06-05"),
            tx(TransactionType::Expense, 40.0, "Shopping", "2024-06-06"),
        ];
        let categories = expenses_by_category(&txs);
        let names: Vec<&str> = categories.iter().map(|c| c.category.as_str()).collect();

        // Food 110, then Shopping 90 and Fun 90 tied in first-seen order
        assert_eq!(names, vec!["Food", "Shopping", "Fun"]);
        assert_eq!(categories[0].amount, 110.0);
    }

    #[test]
    fn test_expenses_by_category_is_case_sensitive() {
        let txs = vec![
            tx(TransactionType::Expense, 10.0, "food", "2024-06-01"),
            tx(TransactionType::Expense, 10.0, "Food", "2024-06-01"),
        ];
        assert_eq!(expenses_by_category(&txs).len(), 2);
    }

    #[test]
    fn test_percentage_of_zero_total() {
        let total = CategoryTotal {
            category: "Food".into(),
            amount: 0.0,
        };
        assert_eq!(total.percentage_of(0.0), 0.0);
    }

    #[test]
    fn test_monthly_totals_chronological() {
        let txs = vec![
            tx(TransactionType::Expense, 20.0, "Food", "2024-07-03"),
            tx(TransactionType::Income, 100.0, "Salary", "2023-12-31"),
            tx(TransactionType::Expense, 5.0, "Food", "2024-07-09"),
        ];
        let months = monthly_totals(&txs);

        assert_eq!(months.len(), 2);
        assert_eq!(months[0].label, "Dec 2023");
        assert_eq!(months[0].income, 100.0);
        assert_eq!(months[1].label, "Jul 2024");
        assert_eq!(months[1].expenses, 25.0);
    }

    #[test]
    fn test_daily_spending_keeps_last_thirty_days() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let txs: Vec<Transaction> = (0..40)
            .map(|i| {
                let date = start + chrono::Duration::days(i);
                tx(
                    TransactionType::Expense,
                    1.0,
                    "Food",
                    &date.format("%Y-%m-%d").to_string(),
                )
            })
            .collect();
        let daily = daily_spending(&txs);

        assert_eq!(daily.len(), DAILY_SPENDING_DAYS);
        assert_eq!(daily[0].date, start + chrono::Duration::days(10));
        assert_eq!(
            daily.last().unwrap().date,
            start + chrono::Duration::days(39)
        );
    }

    #[test]
    fn test_analytics_average_daily_spending() {
        let txs = vec![
            tx(TransactionType::Expense, 30.0, "Food", "2024-06-01"),
            tx(TransactionType::Expense, 10.0, "Food", "2024-06-01"),
            tx(TransactionType::Expense, 20.0, "Bills", "2024-06-02"),
        ];
        let analytics = Analytics::from_transactions(&txs);

        assert_eq!(analytics.daily.len(), 2);
        assert_eq!(analytics.average_daily_spending, 30.0);
        assert_eq!(analytics.category_count, 2);
    }

    #[test]
    fn test_analytics_empty() {
        let analytics = Analytics::from_transactions(&[]);
        assert_eq!(analytics.average_daily_spending, 0.0);
        assert!(analytics.monthly.is_empty());
    }
}
