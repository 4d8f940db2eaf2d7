use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::category::Category;
use crate::models::transaction::Transaction;

/// Storage-side access to a user's transactions.
///
/// Implementations own persistence and authorization. Whatever they return
/// is treated as one user's complete ledger; errors are handed back to the
/// caller as-is.
#[async_trait]
pub trait TransactionSource: Send + Sync {
    /// Human-readable name of this source (for logs).
    fn name(&self) -> &str;

    /// All transactions owned by `user`, in any order.
    async fn transactions_for(&self, user: Uuid) -> Result<Vec<Transaction>, CoreError>;
}

/// Storage-side access to a user's categories.
#[async_trait]
pub trait CategorySource: Send + Sync {
    fn name(&self) -> &str;

    /// All categories owned by `user`.
    async fn categories_for(&self, user: Uuid) -> Result<Vec<Category>, CoreError>;
}

/// Supplies the current instant. Injected so rollups and relative ranges
/// are reproducible.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
