use std::collections::HashMap;
use uuid::Uuid;

use crate::models::category::Category;
use crate::models::report::CategoryAmount;
use crate::models::transaction::{EntryKind, Transaction};
use crate::services::normalization::normalize_amount;

/// Expense totals per category, for the dashboard pie chart.
pub struct DistributionService;

impl DistributionService {
    pub fn new() -> Self {
        Self
    }

    /// One entry per category with a nonzero expense total, in the order
    /// the categories were given.
    ///
    /// Income never contributes, whatever its category. Transactions whose
    /// category reference is missing or dangling match no category.
    pub fn category_distribution(
        &self,
        transactions: &[Transaction],
        categories: &[Category],
    ) -> Vec<CategoryAmount> {
        let mut spent: HashMap<Uuid, f64> = HashMap::new();
        for transaction in transactions {
            if transaction.kind != EntryKind::Expense {
                continue;
            }
            if let Some(id) = transaction.category {
                *spent.entry(id).or_insert(0.0) += normalize_amount(&transaction.amount);
            }
        }

        categories
            .iter()
            .filter_map(|category| {
                let amount = spent.get(&category.id).copied().unwrap_or(0.0);
                (amount > 0.0).then(|| CategoryAmount {
                    name: category.name.clone(),
                    amount,
                })
            })
            .collect()
    }
}

impl Default for DistributionService {
    fn default() -> Self {
        Self::new()
    }
}
