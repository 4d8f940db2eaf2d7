use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::category::Category;
use crate::models::transaction::Transaction;

use super::traits::{CategorySource, TransactionSource};

/// A ledger held entirely in memory, shared by any number of users.
///
/// Serves as both collaborator sources. Useful for fixtures, exports and
/// embedding the engine without a database.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryLedger {
    #[serde(default)]
    pub transactions: Vec<Transaction>,

    #[serde(default)]
    pub categories: Vec<Category>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a `{ "transactions": [...], "categories": [...] }` document.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn add_transaction(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    pub fn add_category(&mut self, category: Category) {
        self.categories.push(category);
    }

    /// Delete a category. Transactions keep their (now dangling) reference,
    /// the same way the storage layer behaves.
    pub fn remove_category(&mut self, id: Uuid) -> Option<Category> {
        let idx = self.categories.iter().position(|c| c.id == id)?;
        Some(self.categories.remove(idx))
    }
}

#[async_trait]
impl TransactionSource for InMemoryLedger {
    fn name(&self) -> &str {
        "InMemoryLedger"
    }

    async fn transactions_for(&self, user: Uuid) -> Result<Vec<Transaction>, CoreError> {
        Ok(self
            .transactions
            .iter()
            .filter(|t| t.owner == user)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CategorySource for InMemoryLedger {
    fn name(&self) -> &str {
        "InMemoryLedger"
    }

    async fn categories_for(&self, user: Uuid) -> Result<Vec<Category>, CoreError> {
        Ok(self
            .categories
            .iter()
            .filter(|c| c.owner == user)
            .cloned()
            .collect())
    }
}
