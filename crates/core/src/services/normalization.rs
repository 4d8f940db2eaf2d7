use std::collections::HashMap;
use uuid::Uuid;

use crate::models::category::Category;
use crate::models::transaction::StoredAmount;

/// Read a stored amount as a non-negative number.
///
/// Numbers pass through, numeric strings are trimmed and parsed. Anything
/// else (null, garbage text, NaN/infinity, negatives, other JSON values)
/// reads as `0.0` so a single bad row never breaks a whole aggregate.
pub fn normalize_amount(amount: &StoredAmount) -> f64 {
    let value = match amount {
        StoredAmount::Number(n) => Some(*n),
        StoredAmount::Text(s) => s.trim().parse::<f64>().ok(),
        StoredAmount::Missing => return 0.0,
        StoredAmount::Other(_) => None,
    };

    match value {
        Some(n) if n.is_finite() && n >= 0.0 => n,
        _ => {
            tracing::debug!(?amount, "malformed transaction amount read as zero");
            0.0
        }
    }
}

/// Id → category lookup over one user's categories.
///
/// Lookups are fallible: a transaction may still point at a category that
/// has since been deleted.
#[derive(Debug)]
pub struct CategoryIndex<'a> {
    by_id: HashMap<Uuid, &'a Category>,
    fallback: &'a str,
}

impl<'a> CategoryIndex<'a> {
    pub fn new(categories: &'a [Category], fallback: &'a str) -> Self {
        Self {
            by_id: categories.iter().map(|c| (c.id, c)).collect(),
            fallback,
        }
    }

    pub fn resolve(&self, reference: Option<Uuid>) -> Option<&'a Category> {
        reference.and_then(|id| self.by_id.get(&id).copied())
    }

    /// Display name for a reference, or the uncategorized label.
    pub fn category_name(&self, reference: Option<Uuid>) -> &'a str {
        self.resolve(reference)
            .map(|c| c.name.as_str())
            .unwrap_or(self.fallback)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
