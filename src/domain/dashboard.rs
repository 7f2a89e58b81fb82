// Dashboard domain model
use super::alert::AlertPanel;
use super::developer::{ActivityAverages, DeveloperField, DeveloperRow, TopPerformer};
use super::metric::MetricCard;
use super::sorting::TableView;
use super::team::{TeamField, TeamRow};
use super::trends::{TrendCharts, TrendSummary};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const DASHBOARD_TITLE: &str = "Station Performance Dashboard";
pub const DASHBOARD_SUBTITLE: &str =
    "Dashboard ejecutivo para métricas de performance de equipos de desarrollo";
pub const REPORTING_YEAR: u16 = 2024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DashboardView {
    #[default]
    Global,
    Teams,
    Individual,
    Trends,
}

impl DashboardView {
    pub const ALL: [DashboardView; 4] = [
        DashboardView::Global,
        DashboardView::Teams,
        DashboardView::Individual,
        DashboardView::Trends,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DashboardView::Global => "global",
            DashboardView::Teams => "teams",
            DashboardView::Individual => "individual",
            DashboardView::Trends => "trends",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DashboardView::Global => "Global",
            DashboardView::Teams => "Por Equipo",
            DashboardView::Individual => "Individual",
            DashboardView::Trends => "Tendencias",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DashboardView::Global => "Vista general de métricas",
            DashboardView::Teams => "Performance por equipos",
            DashboardView::Individual => "Métricas individuales",
            DashboardView::Trends => "Análisis temporal",
        }
    }

    /// How many leading metric cards the view shows. `None` shows all.
    pub fn metric_card_limit(self) -> Option<usize> {
        match self {
            DashboardView::Global => None,
            DashboardView::Teams | DashboardView::Trends => Some(4),
            DashboardView::Individual => Some(3),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown dashboard view '{0}'")]
pub struct UnknownView(pub String);

impl FromStr for DashboardView {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DashboardView::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownView(s.to_string()))
    }
}

/// Reporting quarter selected in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum PeriodFilter {
    Q1,
    Q2,
    Q3,
    #[default]
    Q4,
}

impl PeriodFilter {
    pub fn label(self) -> String {
        format!("{self} {REPORTING_YEAR}")
    }
}

impl fmt::Display for PeriodFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PeriodFilter::Q1 => "Q1",
            PeriodFilter::Q2 => "Q2",
            PeriodFilter::Q3 => "Q3",
            PeriodFilter::Q4 => "Q4",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown period '{0}' (expected Q1, Q2, Q3 or Q4)")]
pub struct UnknownPeriod(pub String);

impl FromStr for PeriodFilter {
    type Err = UnknownPeriod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "Q1" => Ok(PeriodFilter::Q1),
            "Q2" => Ok(PeriodFilter::Q2),
            "Q3" => Ok(PeriodFilter::Q3),
            "Q4" => Ok(PeriodFilter::Q4),
            _ => Err(UnknownPeriod(s.to_string())),
        }
    }
}

pub type TeamTable = TableView<TeamField, TeamRow>;
pub type DeveloperTable = TableView<DeveloperField, DeveloperRow>;

/// One composed dashboard page. Sections a view does not show are absent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub view: DashboardView,
    pub view_label: &'static str,
    pub view_description: &'static str,
    pub period: PeriodFilter,
    pub period_label: String,
    pub alert_count: usize,
    pub metric_cards: Vec<MetricCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teams: Option<TeamTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developers: Option<DeveloperTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alerts: Option<AlertPanel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trends: Option<TrendCharts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_performers: Option<Vec<TopPerformer>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<ActivityAverages>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend_summary: Option<TrendSummary>,
}

impl Dashboard {
    pub fn new(view: DashboardView, period: PeriodFilter, alert_count: usize) -> Self {
        Self {
            title: DASHBOARD_TITLE,
            subtitle: DASHBOARD_SUBTITLE,
            view,
            view_label: view.label(),
            view_description: view.description(),
            period,
            period_label: period.label(),
            alert_count,
            metric_cards: Vec::new(),
            teams: None,
            developers: None,
            alerts: None,
            trends: None,
            top_performers: None,
            activity: None,
            trend_summary: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_carries_view_label_and_description() {
        let dashboard = Dashboard::new(DashboardView::Trends, PeriodFilter::Q3, 0);
        assert_eq!(dashboard.view_label, "Tendencias");
        assert_eq!(dashboard.view_description, "Análisis temporal");
        assert_eq!(DashboardView::Global.description(), "Vista general de métricas");
        assert_eq!(DashboardView::Teams.description(), "Performance por equipos");
        assert_eq!(DashboardView::Individual.description(), "Métricas individuales");
    }

    #[test]
    fn test_view_parsing() {
        for view in DashboardView::ALL {
            assert_eq!(view.as_str().parse(), Ok(view));
        }
        assert_eq!(
            "weekly".parse::<DashboardView>(),
            Err(UnknownView("weekly".to_string()))
        );
    }

    #[test]
    fn test_period_parsing_and_label() {
        assert_eq!("q3".parse(), Ok(PeriodFilter::Q3));
        assert_eq!(PeriodFilter::default(), PeriodFilter::Q4);
        assert_eq!(PeriodFilter::Q2.label(), "Q2 2024");
        assert!("Q5".parse::<PeriodFilter>().is_err());
    }

    #[test]
    fn test_metric_card_limits() {
        assert_eq!(DashboardView::Global.metric_card_limit(), None);
        assert_eq!(DashboardView::Teams.metric_card_limit(), Some(4));
        assert_eq!(DashboardView::Individual.metric_card_limit(), Some(3));
        assert_eq!(DashboardView::Trends.metric_card_limit(), Some(4));
    }
}
