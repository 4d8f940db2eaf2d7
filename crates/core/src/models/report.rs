use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use super::transaction::EntryKind;

/// Dashboard totals for a whole ledger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Sum of all income amounts
    pub total_income: f64,

    /// Sum of all expense amounts
    pub total_expense: f64,

    /// total_income - total_expense (negative when overspent)
    pub balance: f64,

    /// Newest transactions, at most `EngineSettings::recent_limit`
    pub recent_transactions: Vec<RecentTransaction>,
}

/// A transaction as shown in the "recent activity" list: amount already
/// normalized and category already resolved to a display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentTransaction {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub category: String,
    pub date: DateTime<Utc>,
}

/// One calendar month of the trailing rollup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBucket {
    pub year: i32,

    /// 1-based calendar month
    pub month: u32,

    /// Display name of the month
    pub label: String,

    pub income: f64,
    pub expenses: f64,

    /// income - expenses
    pub balance: f64,
}

/// Total expense filed under one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAmount {
    pub name: String,
    pub amount: f64,
}

/// Income and expense attributed to one category name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotals {
    pub income: f64,
    pub expense: f64,
}

/// Statistics for the transactions inside a [`super::range::StatisticsRange`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeStatistics {
    pub total_income: f64,
    pub total_expense: f64,

    /// Keyed by category display name (or the uncategorized label).
    /// A `BTreeMap` so serialization order is stable between calls.
    pub by_category: BTreeMap<String, CategoryTotals>,
}

/// Everything the dashboard page needs, computed from a single snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    #[serde(flatten)]
    pub summary: Summary,

    #[serde(rename = "monthlyData")]
    pub monthly: Vec<MonthlyBucket>,

    #[serde(rename = "categoryData")]
    pub categories: Vec<CategoryAmount>,
}
