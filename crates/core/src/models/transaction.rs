use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of money flow. Shared by transactions and categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Money coming in (salary, refunds, ...)
    Income,
    /// Money going out
    Expense,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::Income => write!(f, "income"),
            EntryKind::Expense => write!(f, "expense"),
        }
    }
}

/// The amount exactly as the storage layer handed it over.
///
/// Older records were written by clients that sent amounts as strings, and
/// some rows have no amount at all. Nothing here is validated; see
/// [`crate::services::normalization::normalize_amount`] for how each shape
/// is read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredAmount {
    Number(f64),
    Text(String),
    #[default]
    Missing,
    Other(serde_json::Value),
}

impl From<f64> for StoredAmount {
    fn from(value: f64) -> Self {
        StoredAmount::Number(value)
    }
}

impl From<&str> for StoredAmount {
    fn from(value: &str) -> Self {
        StoredAmount::Text(value.to_string())
    }
}

/// A single income or expense entry in a user's ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: Uuid,

    /// Free-text description
    pub description: String,

    /// Raw stored amount (coerced to a number only during aggregation)
    #[serde(default)]
    pub amount: StoredAmount,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: EntryKind,

    /// Category reference. May point at a category that no longer exists.
    #[serde(default)]
    pub category: Option<Uuid>,

    /// When the transaction happened
    pub date: DateTime<Utc>,

    /// Owning user
    pub owner: Uuid,
}

impl Transaction {
    pub fn new(
        owner: Uuid,
        description: impl Into<String>,
        amount: impl Into<StoredAmount>,
        kind: EntryKind,
        category: Option<Uuid>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount: amount.into(),
            kind,
            category,
            date,
            owner,
        }
    }

    pub fn income(
        owner: Uuid,
        description: impl Into<String>,
        amount: impl Into<StoredAmount>,
        category: Option<Uuid>,
        date: DateTime<Utc>,
    ) -> Self {
        Self::new(owner, description, amount, EntryKind::Income, category, date)
    }

    pub fn expense(
        owner: Uuid,
        description: impl Into<String>,
        amount: impl Into<StoredAmount>,
        category: Option<Uuid>,
        date: DateTime<Utc>,
    ) -> Self {
        Self::new(owner, description, amount, EntryKind::Expense, category, date)
    }

    pub fn is_income(&self) -> bool {
        self.kind == EntryKind::Income
    }
}
