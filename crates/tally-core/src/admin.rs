//! Platform-wide statistics for the admin dashboard
//!
//! The numbers are fixed sample data, not derived from the store.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_users: u64,
    pub active_users: u64,
    pub total_transactions: u64,
    pub total_volume: f64,
    pub user_growth: Vec<UserGrowthPoint>,
    pub transaction_growth: Vec<TransactionGrowthPoint>,
    pub user_engagement: Vec<UserEngagement>,
}

/// Cumulative users at the end of a month ("YYYY-MM")
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserGrowthPoint {
    pub date: String,
    pub users: u64,
}

/// Transactions recorded on a day ("YYYY-MM-DD")
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionGrowthPoint {
    pub date: String,
    pub transactions: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEngagement {
    pub name: String,
    pub email: String,
    pub transactions: u64,
    pub last_active: String,
}

impl AdminStats {
    pub fn sample() -> Self {
        let user_growth = [
            ("2024-01", 100),
            ("2024-02", 250),
            ("2024-03", 450),
            ("2024-04", 680),
            ("2024-05", 920),
            ("2024-06", 1247),
        ]
        .into_iter()
        .map(|(date, users)| UserGrowthPoint {
            date: date.to_string(),
            users,
        })
        .collect();

        let transaction_growth = [
            ("2024-06-01", 45),
            ("2024-06-02", 52),
            ("2024-06-03", 38),
            ("2024-06-04", 67),
            ("2024-06-05", 71),
            ("2024-06-06", 59),
            ("2024-06-07", 83),
        ]
        .into_iter()
        .map(|(date, transactions)| TransactionGrowthPoint {
            date: date.to_string(),
            transactions,
        })
        .collect();

        let user_engagement = [
            ("John Doe", "john@example.com", 45, "2024-06-07"),
            ("Jane Smith", "jane@example.com", 32, "2024-06-06"),
            ("Mike Johnson", "mike@example.com", 28, "2024-06-05"),
            ("Sarah Wilson", "sarah@example.com", 19, "2024-06-04"),
            ("Tom Brown", "tom@example.com", 15, "2024-06-03"),
            ("Lisa Davis", "lisa@example.com", 12, "2024-06-02"),
            ("Chris Miller", "chris@example.com", 8, "2024-06-01"),
            ("Amy Taylor", "amy@example.com", 6, "2024-05-30"),
        ]
        .into_iter()
        .map(|(name, email, transactions, last_active)| UserEngagement {
            name: name.to_string(),
            email: email.to_string(),
            transactions,
            last_active: last_active.to_string(),
        })
        .collect();

        Self {
            total_users: 1247,
            active_users: 892,
            total_transactions: 15634,
            total_volume: 2_847_392.0,
            user_growth,
            transaction_growth,
            user_engagement,
        }
    }
}
