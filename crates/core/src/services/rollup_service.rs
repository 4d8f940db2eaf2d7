use chrono::{DateTime, Datelike, Utc};

use crate::models::report::MonthlyBucket;
use crate::models::settings::{EngineSettings, MAX_ROLLUP_MONTHS};
use crate::models::transaction::{EntryKind, Transaction};
use crate::services::normalization::normalize_amount;

/// Buckets a ledger into a trailing window of calendar months.
///
/// The window always has exactly `window` entries, oldest first, ending at
/// the month that contains `now`. Months without activity are zero-filled.
pub struct RollupService {
    settings: EngineSettings,
}

impl RollupService {
    pub fn new() -> Self {
        Self::from_settings(&EngineSettings::default())
    }

    /// The window is clamped to `1..=MAX_ROLLUP_MONTHS`, so unvalidated
    /// settings still yield a non-empty rollup.
    pub fn from_settings(settings: &EngineSettings) -> Self {
        let mut settings = settings.clone();
        settings.rollup_months = settings.rollup_months.clamp(1, MAX_ROLLUP_MONTHS);
        Self { settings }
    }

    pub fn window(&self) -> u32 {
        self.settings.rollup_months
    }

    /// The (year, month) pairs of the window, oldest first.
    ///
    /// Pure month arithmetic on a running month index, so there is no
    /// day-of-month overflow (31 October minus one month is September).
    pub fn window_months(&self, now: DateTime<Utc>) -> Vec<(i32, u32)> {
        let current = now.year() * 12 + now.month0() as i32;
        (0..self.window() as i32)
            .rev()
            .map(|offset| {
                let index = current - offset;
                (index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
            })
            .collect()
    }

    pub fn monthly_rollup(&self, transactions: &[Transaction], now: DateTime<Utc>) -> Vec<MonthlyBucket> {
        let mut buckets: Vec<MonthlyBucket> = self
            .window_months(now)
            .into_iter()
            .map(|(year, month)| MonthlyBucket {
                year,
                month,
                label: self.settings.month_label(month),
                income: 0.0,
                expenses: 0.0,
                balance: 0.0,
            })
            .collect();

        for transaction in transactions {
            let (year, month) = (transaction.date.year(), transaction.date.month());
            let Some(bucket) = buckets
                .iter_mut()
                .find(|b| b.year == year && b.month == month)
            else {
                continue; // outside the window
            };

            let amount = normalize_amount(&transaction.amount);
            match transaction.kind {
                EntryKind::Income => bucket.income += amount,
                EntryKind::Expense => bucket.expenses += amount,
            }
        }

        for bucket in &mut buckets {
            bucket.balance = bucket.income - bucket.expenses;
        }

        buckets
    }
}

impl Default for RollupService {
    fn default() -> Self {
        Self::new()
    }
}
