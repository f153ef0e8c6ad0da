//! Thresholds and advice text used by the suggestion engine

/// Savings rate (percent) below which the low-savings warning fires
pub const LOW_SAVINGS_RATE: f64 = 10.0;

/// Savings rate (percent) at or above which savings count as excellent
pub const TARGET_SAVINGS_RATE: f64 = 20.0;

/// How many leading transactions the pattern alerts look at
pub const RECENT_WINDOW: usize = 20;

/// Expenses strictly below this amount count as small
pub const SMALL_EXPENSE_LIMIT: f64 = 25.0;

/// Expenses strictly above this amount count as large
pub const LARGE_EXPENSE_LIMIT: f64 = 200.0;

/// Small expenses in the window needed (exclusive) for the alert
pub const SMALL_EXPENSE_ALERT_COUNT: usize = 8;

/// Large expenses in the window needed (exclusive) for the alert
pub const LARGE_EXPENSE_ALERT_COUNT: usize = 3;

/// Expense-to-income ratio above which quick wins are suggested
pub const QUICK_WINS_EXPENSE_RATIO: f64 = 0.8;

/// Balance above which investing the surplus is suggested
pub const INVEST_SURPLUS_BALANCE: f64 = 500.0;

/// Zero-based months that get holiday tips (December, January)
pub const HOLIDAY_MONTHS: [u32; 2] = [11, 0];

pub const HEADER: &[&str] = &["💡 AI-Powered Budget Optimization\n"];

pub const SMALL_EXPENSE_ALERT: &[&str] = &[
    "☕ Small Expense Alert:",
    "• You have many small purchases that add up",
    "• Track daily spending like coffee, snacks, apps",
    "• Consider a 'small purchase' weekly budget\n",
];

pub const LARGE_PURCHASE_ALERT: &[&str] = &[
    "💳 Large Purchase Pattern:",
    "• You have several large expenses",
    "• Plan major purchases in advance",
    "• Research and compare before buying\n",
];

pub const HOLIDAY_TIPS: &[&str] = &[
    "🎄 Holiday Season Tips:",
    "• Set a holiday spending budget",
    "• Start saving for next year's holidays",
    "• Look for post-holiday sales\n",
];

pub const QUICK_WINS: &[&str] = &[
    "⚡ Quick Wins to Try This Week:",
    "• Cancel one unused subscription",
    "• Cook dinner at home 3 extra times",
    "• Find one free activity instead of paid entertainment",
    "• Use coupons for your next grocery trip\n",
];

pub const INVEST_SURPLUS: &[&str] = &[
    "• Consider investing this surplus",
    "• Build an emergency fund (3-6 months expenses)",
];

pub const KEEP_IT_UP: &str = "• Keep up the excellent work!\n";

pub const NEXT_STEPS: &[&str] = &[
    "📈 Next Steps:",
    "• Review your spending weekly",
    "• Set monthly budgets for each category",
    "• Track progress and celebrate small wins",
    "• Consider using the 50/30/20 rule: 50% needs, 30% wants, 20% savings",
];

/// Overall health of the balance, evaluated in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceTier {
    /// Spending more than earning
    Deficit,
    LowSavings,
    Excellent,
    Positive,
}

impl BalanceTier {
    pub fn classify(balance: f64, savings_rate: f64) -> Self {
        if balance < 0.0 {
            Self::Deficit
        } else if savings_rate < LOW_SAVINGS_RATE {
            Self::LowSavings
        } else if savings_rate >= TARGET_SAVINGS_RATE {
            Self::Excellent
        } else {
            Self::Positive
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deficit => "deficit",
            Self::LowSavings => "low_savings",
            Self::Excellent => "excellent",
            Self::Positive => "positive",
        }
    }

    pub fn lines(&self) -> &'static [&'static str] {
        match self {
            Self::Deficit => &[
                "🚨 URGENT: You're spending more than you earn!",
                "• Immediately reduce non-essential expenses",
                "• Consider additional income sources",
                "• Review all subscriptions and memberships\n",
            ],
            Self::LowSavings => &[
                "⚠️ Your savings rate is below recommended 20%",
                "• Try to save at least 10-20% of your income",
                "• Automate savings to make it easier\n",
            ],
            Self::Excellent => &[
                "🌟 Excellent! You're saving over 20% of income",
                "• Consider investing your surplus",
                "• Look into retirement accounts (401k, IRA)\n",
            ],
            Self::Positive => &[
                "✅ Good job maintaining a positive balance!",
                "• Aim to increase savings rate to 20%\n",
            ],
        }
    }
}

/// Tips for one of the recognized spending categories
#[derive(Debug)]
pub struct CategoryAdvice {
    /// Lower-case category name this advice applies to
    pub key: &'static str,
    pub title: &'static str,
    pub tips: [&'static str; 4],
}

pub const CATEGORY_ADVICE: [CategoryAdvice; 5] = [
    CategoryAdvice {
        key: "food",
        title: "🍽️ Food Optimization Tips:",
        tips: [
            "• Meal plan and prep on weekends",
            "• Cook at home 5+ days per week",
            "• Use grocery store apps for discounts",
            "• Buy generic brands for 20-30% savings",
        ],
    },
    CategoryAdvice {
        key: "entertainment",
        title: "🎬 Entertainment Budget Tips:",
        tips: [
            "• Set a monthly entertainment budget",
            "• Look for free community events",
            "• Share streaming subscriptions with family",
            "• Take advantage of happy hours and matinee prices",
        ],
    },
    CategoryAdvice {
        key: "shopping",
        title: "🛍️ Smart Shopping Strategies:",
        tips: [
            "• Use the 24-hour rule before purchases",
            "• Compare prices across multiple stores",
            "• Shop with a list to avoid impulse buys",
            "• Consider buying used or refurbished items",
        ],
    },
    CategoryAdvice {
        key: "transportation",
        title: "🚗 Transportation Savings:",
        tips: [
            "• Combine errands into single trips",
            "• Consider carpooling or public transport",
            "• Maintain your vehicle for better fuel efficiency",
            "• Walk or bike for short distances",
        ],
    },
    CategoryAdvice {
        key: "bills",
        title: "📄 Bill Optimization:",
        tips: [
            "• Review and cancel unused subscriptions",
            "• Negotiate with service providers",
            "• Switch to more affordable plans",
            "• Bundle services for discounts",
        ],
    },
];

/// Look up advice by exact, case-insensitive category name
pub fn advice_for(category: &str) -> Option<&'static CategoryAdvice> {
    let key = category.to_lowercase();
    CATEGORY_ADVICE.iter().find(|advice| advice.key == key)
}

/// Advice lines for a category outside the recognized set
pub fn generic_advice(category: &str) -> Vec<String> {
    vec![
        format!("• Try to reduce {} expenses by 10-15%", category),
        "• Look for alternatives or better deals".to_string(),
    ]
}

pub fn is_holiday_month(month0: u32) -> bool {
    HOLIDAY_MONTHS.contains(&month0)
}
