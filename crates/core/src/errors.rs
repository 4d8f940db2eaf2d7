use thiserror::Error;

/// Unified error type for the finance-tracker-core library.
///
/// The aggregation builders never return errors: malformed records degrade
/// to zero amounts or the uncategorized label. Only collaborators (storage,
/// auth) and configuration can fail, and their errors pass through the
/// facade untouched.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Collaborators ───────────────────────────────────────────────
    #[error("Failed to fetch transactions: {0}")]
    TransactionFetch(String),

    #[error("Failed to fetch categories: {0}")]
    CategoryFetch(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    // ── Configuration ───────────────────────────────────────────────
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
