// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::application::metrics_provider::MetricsProvider;
use crate::application::notification_service::NotificationService;
use crate::application::table_service::TableService;
use crate::domain::developer::DeveloperRecord;
use crate::domain::team::TeamRecord;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    pub team_table: TableService<TeamRecord>,
    pub developer_table: TableService<DeveloperRecord>,
    pub notification_service: NotificationService,
}

impl AppState {
    /// The dashboard service shares the table services, so a sort change on
    /// a table also shows up in the composed views.
    pub fn new(provider: Arc<dyn MetricsProvider>, refresh_delay: Duration) -> Self {
        let team_table = TableService::new(provider.clone());
        let developer_table = TableService::new(provider.clone());
        let dashboard_service =
            DashboardService::new(provider, team_table.clone(), developer_table.clone());

        Self {
            dashboard_service,
            team_table,
            developer_table,
            notification_service: NotificationService::new(refresh_delay),
        }
    }
}
