// Dashboard service - Use case for composing dashboard views
use crate::application::metrics_provider::MetricsProvider;
use crate::application::table_service::TableService;
use crate::domain::alert::AlertPanel;
use crate::domain::dashboard::{Dashboard, DashboardView, PeriodFilter};
use crate::domain::developer::{ActivityAverages, DeveloperRecord, top_performers};
use crate::domain::metric::MetricCard;
use crate::domain::team::TeamRecord;
use crate::domain::trends::{TrendCharts, TrendSummary};
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    provider: Arc<dyn MetricsProvider>,
    team_table: TableService<TeamRecord>,
    developer_table: TableService<DeveloperRecord>,
}

impl DashboardService {
    pub fn new(
        provider: Arc<dyn MetricsProvider>,
        team_table: TableService<TeamRecord>,
        developer_table: TableService<DeveloperRecord>,
    ) -> Self {
        Self {
            provider,
            team_table,
            developer_table,
        }
    }

    pub async fn get_dashboard(
        &self,
        view: DashboardView,
        period: PeriodFilter,
    ) -> anyhow::Result<Dashboard> {
        let alerts = self.provider.alerts().await?;
        let mut dashboard = Dashboard::new(view, period, alerts.len());

        let mut cards = self.metric_cards().await?;
        if let Some(limit) = view.metric_card_limit() {
            cards.truncate(limit);
        }
        dashboard.metric_cards = cards;

        match view {
            DashboardView::Global => {
                dashboard.teams = Some(self.team_table.view(None).await?);
                dashboard.alerts = Some(AlertPanel::new(&alerts));
            }
            DashboardView::Teams => {
                dashboard.teams = Some(self.team_table.view(None).await?);
                dashboard.trends = Some(self.trend_charts().await?);
            }
            DashboardView::Individual => {
                let developers = self.provider.developers().await?;
                dashboard.developers = Some(self.developer_table.view(None).await?);
                dashboard.top_performers = Some(top_performers(&developers));
                dashboard.activity = ActivityAverages::from_developers(&developers);
            }
            DashboardView::Trends => {
                dashboard.trends = Some(self.trend_charts().await?);
                dashboard.trend_summary = Some(TrendSummary::default());
            }
        }

        tracing::debug!(
            view = view.as_str(),
            period = %period,
            cards = dashboard.metric_cards.len(),
            "composed dashboard"
        );

        Ok(dashboard)
    }

    pub async fn metric_cards(&self) -> anyhow::Result<Vec<MetricCard>> {
        let summaries = self.provider.metric_summaries().await?;
        Ok(summaries.iter().map(MetricCard::from).collect())
    }

    pub async fn alert_panel(&self) -> anyhow::Result<AlertPanel> {
        let alerts = self.provider.alerts().await?;
        Ok(AlertPanel::new(&alerts))
    }

    pub async fn trend_charts(&self) -> anyhow::Result<TrendCharts> {
        let quarters = self.provider.quarterly_trends().await?;
        let bug_shares = self.provider.bug_distribution().await?;
        let comparison = self.provider.team_comparison().await?;
        Ok(TrendCharts::new(quarters, &bug_shares, comparison))
    }
}
