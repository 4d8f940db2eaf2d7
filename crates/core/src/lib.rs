pub mod errors;
pub mod models;
pub mod services;
pub mod sources;

use std::sync::Arc;
use uuid::Uuid;

use errors::CoreError;
use models::{
    category::Category,
    range::StatisticsRange,
    report::{CategoryAmount, Dashboard, MonthlyBucket, RangeStatistics, Summary},
    settings::EngineSettings,
    transaction::Transaction,
};
use services::{
    distribution_service::DistributionService,
    rollup_service::RollupService,
    statistics_service::StatisticsService,
    summary_service::{sort_newest_first, SummaryService},
};
use sources::{
    clock::SystemClock,
    memory::InMemoryLedger,
    traits::{CategorySource, Clock, TransactionSource},
};

/// Main entry point for the Finance Tracker core library.
///
/// Fetches one user's ledger through the injected sources, reads the clock
/// once per call and hands the snapshot to the pure aggregation services.
/// Callers are expected to have authenticated the user already.
#[must_use]
pub struct FinanceTracker {
    transactions: Arc<dyn TransactionSource>,
    categories: Arc<dyn CategorySource>,
    clock: Arc<dyn Clock>,
    settings: EngineSettings,
    summary_service: SummaryService,
    rollup_service: RollupService,
    distribution_service: DistributionService,
    statistics_service: StatisticsService,
}

impl std::fmt::Debug for FinanceTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinanceTracker")
            .field("transactions", &self.transactions.name())
            .field("categories", &self.categories.name())
            .field("settings", &self.settings)
            .finish()
    }
}

impl FinanceTracker {
    /// Build a tracker over arbitrary collaborators with default settings.
    pub fn new(
        transactions: Arc<dyn TransactionSource>,
        categories: Arc<dyn CategorySource>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self::build(transactions, categories, clock, EngineSettings::default())
    }

    /// Build a tracker over an in-memory ledger and the system clock.
    pub fn from_ledger(ledger: InMemoryLedger) -> Self {
        let ledger = Arc::new(ledger);
        Self::new(ledger.clone(), ledger, Arc::new(SystemClock))
    }

    /// Replace the settings. They are validated first; on error the
    /// tracker is dropped and the error returned.
    pub fn with_settings(self, settings: EngineSettings) -> Result<Self, CoreError> {
        settings.validate()?;
        Ok(Self::build(
            self.transactions,
            self.categories,
            self.clock,
            settings,
        ))
    }

    /// Replace the clock (e.g. a [`sources::clock::FixedClock`] in tests).
    pub fn with_clock(self, clock: Arc<dyn Clock>) -> Self {
        Self::build(self.transactions, self.categories, clock, self.settings)
    }

    #[must_use]
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    // ── Aggregates ──────────────────────────────────────────────────

    /// Totals, balance and most recent transactions.
    pub async fn summary(&self, user: Uuid) -> Result<Summary, CoreError> {
        let (transactions, categories) = self.load(user).await?;
        let summary = self.summary_service.summarize(&transactions, &categories);
        tracing::debug!(%user, recent = summary.recent_transactions.len(), "computed summary");
        Ok(summary)
    }

    /// Trailing monthly income/expense buckets ending at the current month.
    pub async fn monthly_rollup(&self, user: Uuid) -> Result<Vec<MonthlyBucket>, CoreError> {
        let transactions = self.load_transactions(user).await?;
        let now = self.clock.now();
        let buckets = self.rollup_service.monthly_rollup(&transactions, now);
        tracing::debug!(%user, %now, buckets = buckets.len(), "computed monthly rollup");
        Ok(buckets)
    }

    /// Nonzero expense totals per category.
    pub async fn category_distribution(
        &self,
        user: Uuid,
    ) -> Result<Vec<CategoryAmount>, CoreError> {
        let (transactions, categories) = self.load(user).await?;
        let distribution = self
            .distribution_service
            .category_distribution(&transactions, &categories);
        tracing::debug!(%user, entries = distribution.len(), "computed category distribution");
        Ok(distribution)
    }

    /// Income/expense totals and per-category breakdown inside `range`.
    pub async fn statistics(
        &self,
        user: Uuid,
        range: &StatisticsRange,
    ) -> Result<RangeStatistics, CoreError> {
        let (transactions, categories) = self.load(user).await?;
        let now = self.clock.now();
        let stats = self
            .statistics_service
            .range_statistics(&transactions, &categories, range, now);
        tracing::debug!(
            %user,
            ?range,
            categories = stats.by_category.len(),
            "computed range statistics"
        );
        Ok(stats)
    }

    /// Summary, rollup and distribution from a single fetch and a single
    /// reading of the clock.
    pub async fn dashboard(&self, user: Uuid) -> Result<Dashboard, CoreError> {
        let (transactions, categories) = self.load(user).await?;
        let now = self.clock.now();

        let dashboard = Dashboard {
            summary: self.summary_service.summarize(&transactions, &categories),
            monthly: self.rollup_service.monthly_rollup(&transactions, now),
            categories: self
                .distribution_service
                .category_distribution(&transactions, &categories),
        };
        tracing::debug!(%user, %now, transactions = transactions.len(), "computed dashboard");
        Ok(dashboard)
    }

    // ── Internal ────────────────────────────────────────────────────

    async fn load_transactions(&self, user: Uuid) -> Result<Vec<Transaction>, CoreError> {
        let mut transactions = self
            .transactions
            .transactions_for(user)
            .await
            .inspect_err(|e| {
                tracing::warn!(%user, source = self.transactions.name(), "transaction fetch failed: {e}")
            })?;
        sort_newest_first(&mut transactions);
        Ok(transactions)
    }

    async fn load(&self, user: Uuid) -> Result<(Vec<Transaction>, Vec<Category>), CoreError> {
        let transactions = self.load_transactions(user).await?;
        let categories = self
            .categories
            .categories_for(user)
            .await
            .inspect_err(|e| {
                tracing::warn!(%user, source = self.categories.name(), "category fetch failed: {e}")
            })?;
        Ok((transactions, categories))
    }

    fn build(
        transactions: Arc<dyn TransactionSource>,
        categories: Arc<dyn CategorySource>,
        clock: Arc<dyn Clock>,
        settings: EngineSettings,
    ) -> Self {
        Self {
            transactions,
            categories,
            clock,
            summary_service: SummaryService::from_settings(&settings),
            rollup_service: RollupService::from_settings(&settings),
            distribution_service: DistributionService::new(),
            statistics_service: StatisticsService::from_settings(&settings),
            settings,
        }
    }
}
