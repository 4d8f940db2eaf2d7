use chrono::{DateTime, Utc};

use crate::models::category::Category;
use crate::models::range::StatisticsRange;
use crate::models::report::RangeStatistics;
use crate::models::settings::EngineSettings;
use crate::models::transaction::{EntryKind, Transaction};
use crate::services::normalization::{normalize_amount, CategoryIndex};

/// Income/expense statistics over a date range, broken down by category.
///
/// Transactions whose category was deleted still count towards the totals
/// and are filed under the uncategorized label, so removing a category
/// never rewrites history.
pub struct StatisticsService {
    uncategorized_label: String,
}

impl StatisticsService {
    pub fn new() -> Self {
        Self::from_settings(&EngineSettings::default())
    }

    pub fn from_settings(settings: &EngineSettings) -> Self {
        Self {
            uncategorized_label: settings.uncategorized_label.clone(),
        }
    }

    /// `now` anchors relative windows and is ignored for explicit ranges.
    pub fn range_statistics(
        &self,
        transactions: &[Transaction],
        categories: &[Category],
        range: &StatisticsRange,
        now: DateTime<Utc>,
    ) -> RangeStatistics {
        let index = CategoryIndex::new(categories, &self.uncategorized_label);
        let mut stats = RangeStatistics::default();

        for transaction in transactions.iter().filter(|t| range.contains(t.date, now)) {
            let amount = normalize_amount(&transaction.amount);
            let entry = stats
                .by_category
                .entry(index.category_name(transaction.category).to_string())
                .or_default();

            match transaction.kind {
                EntryKind::Income => {
                    stats.total_income += amount;
                    entry.income += amount;
                }
                EntryKind::Expense => {
                    stats.total_expense += amount;
                    entry.expense += amount;
                }
            }
        }

        stats
    }
}

impl Default for StatisticsService {
    fn default() -> Self {
        Self::new()
    }
}
