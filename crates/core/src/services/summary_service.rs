use crate::models::category::Category;
use crate::models::report::{RecentTransaction, Summary};
use crate::models::settings::EngineSettings;
use crate::models::transaction::{EntryKind, Transaction};
use crate::services::normalization::{normalize_amount, CategoryIndex};

/// Computes dashboard totals and the recent-activity list.
///
/// Pure business logic, no I/O. Input order is trusted: the caller hands
/// transactions over newest first (see [`sort_newest_first`]).
pub struct SummaryService {
    recent_limit: usize,
    uncategorized_label: String,
}

impl SummaryService {
    pub fn new() -> Self {
        Self::from_settings(&EngineSettings::default())
    }

    pub fn from_settings(settings: &EngineSettings) -> Self {
        Self {
            recent_limit: settings.recent_limit,
            uncategorized_label: settings.uncategorized_label.clone(),
        }
    }

    /// Totals over the whole ledger plus the first `recent_limit` entries.
    ///
    /// An empty ledger yields zeros and an empty list.
    pub fn summarize(&self, transactions: &[Transaction], categories: &[Category]) -> Summary {
        let mut total_income = 0.0;
        let mut total_expense = 0.0;

        for transaction in transactions {
            let amount = normalize_amount(&transaction.amount);
            match transaction.kind {
                EntryKind::Income => total_income += amount,
                EntryKind::Expense => total_expense += amount,
            }
        }

        let index = CategoryIndex::new(categories, &self.uncategorized_label);
        let recent_transactions = transactions
            .iter()
            .take(self.recent_limit)
            .map(|t| RecentTransaction {
                id: t.id,
                description: t.description.clone(),
                amount: normalize_amount(&t.amount),
                kind: t.kind,
                category: index.category_name(t.category).to_string(),
                date: t.date,
            })
            .collect();

        Summary {
            total_income,
            total_expense,
            balance: total_income - total_expense,
            recent_transactions,
        }
    }
}

impl Default for SummaryService {
    fn default() -> Self {
        Self::new()
    }
}

/// Order a snapshot newest first. Stable, so same-date entries keep the
/// order storage returned them in.
pub fn sort_newest_first(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| b.date.cmp(&a.date));
}
