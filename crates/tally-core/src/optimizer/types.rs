//! Core types for the suggestion engine

use serde::Serialize;
use std::fmt;

use crate::analytics::{CategoryTotal, Summary};

use super::rules::BalanceTier;

/// The blocks a report can contain, in the order they are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Header,
    BalanceTier,
    TopCategory,
    SmallExpenses,
    LargePurchases,
    Seasonal,
    QuickWins,
    Reinforcement,
    NextSteps,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Header => "header",
            SectionKind::BalanceTier => "balance_tier",
            SectionKind::TopCategory => "top_category",
            SectionKind::SmallExpenses => "small_expenses",
            SectionKind::LargePurchases => "large_purchases",
            SectionKind::Seasonal => "seasonal",
            SectionKind::QuickWins => "quick_wins",
            SectionKind::Reinforcement => "reinforcement",
            SectionKind::NextSteps => "next_steps",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One block of report text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    pub lines: Vec<String>,
}

impl Section {
    pub fn new(kind: SectionKind, lines: Vec<String>) -> Self {
        Self { kind, lines }
    }

    pub fn from_static(kind: SectionKind, lines: &[&str]) -> Self {
        Self::new(kind, lines.iter().map(|l| l.to_string()).collect())
    }
}

/// Small and large expense counts inside the recent window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PatternCounts {
    pub small: usize,
    pub large: usize,
}

/// Output of a single engine run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetReport {
    pub summary: Summary,
    pub tier: BalanceTier,
    pub top_category: Option<CategoryTotal>,
    pub patterns: PatternCounts,
    pub sections: Vec<Section>,
}

impl BudgetReport {
    pub fn has_section(&self, kind: SectionKind) -> bool {
        self.sections.iter().any(|s| s.kind == kind)
    }

    /// Newline-joined report text
    pub fn render(&self) -> String {
        self.sections
            .iter()
            .flat_map(|s| s.lines.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for BudgetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
