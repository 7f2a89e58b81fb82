// Provider trait for dashboard data
use crate::domain::alert::AlertItem;
use crate::domain::developer::DeveloperRecord;
use crate::domain::metric::MetricSummary;
use crate::domain::team::TeamRecord;
use crate::domain::trends::{BugShare, QuarterSample, TeamComparison};
use async_trait::async_trait;

/// Supplies the collections the dashboard is built from. The view layer
/// never reaches past this trait for data.
#[async_trait]
pub trait MetricsProvider: Send + Sync {
    /// Team records, unique by name
    async fn teams(&self) -> anyhow::Result<Vec<TeamRecord>>;

    async fn developers(&self) -> anyhow::Result<Vec<DeveloperRecord>>;

    /// Quarter samples in chronological order
    async fn quarterly_trends(&self) -> anyhow::Result<Vec<QuarterSample>>;

    async fn metric_summaries(&self) -> anyhow::Result<Vec<MetricSummary>>;

    async fn alerts(&self) -> anyhow::Result<Vec<AlertItem>>;

    async fn bug_distribution(&self) -> anyhow::Result<Vec<BugShare>>;

    async fn team_comparison(&self) -> anyhow::Result<Vec<TeamComparison>>;
}
