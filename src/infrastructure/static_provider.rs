// Compiled-in metrics provider
use crate::application::metrics_provider::MetricsProvider;
use crate::domain::alert::{AlertItem, AlertSeverity};
use crate::domain::developer::DeveloperRecord;
use crate::domain::metric::{MetricCategory, MetricSummary, MetricValue, Trend};
use crate::domain::team::TeamRecord;
use crate::domain::trends::{BugShare, QuarterSample, TeamComparison};
use anyhow::Result;
use async_trait::async_trait;

/// Serves the fixed Q4 2024 data set. Every call returns a fresh copy of
/// the same records.
#[derive(Debug, Clone)]
pub struct StaticMetricsProvider {
    teams: Vec<TeamRecord>,
    developers: Vec<DeveloperRecord>,
    quarters: Vec<QuarterSample>,
    summaries: Vec<MetricSummary>,
    alerts: Vec<AlertItem>,
    bug_shares: Vec<BugShare>,
    comparison: Vec<TeamComparison>,
}

impl StaticMetricsProvider {
    pub fn new() -> Self {
        Self {
            teams: teams_data(),
            developers: developers_data(),
            quarters: quarterly_trends(),
            summaries: metric_summaries(),
            alerts: active_alerts(),
            bug_shares: bug_distribution(),
            comparison: team_comparison(),
        }
    }
}

impl Default for StaticMetricsProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MetricsProvider for StaticMetricsProvider {
    async fn teams(&self) -> Result<Vec<TeamRecord>> {
        Ok(self.teams.clone())
    }

    async fn developers(&self) -> Result<Vec<DeveloperRecord>> {
        Ok(self.developers.clone())
    }

    async fn quarterly_trends(&self) -> Result<Vec<QuarterSample>> {
        Ok(self.quarters.clone())
    }

    async fn metric_summaries(&self) -> Result<Vec<MetricSummary>> {
        Ok(self.summaries.clone())
    }

    async fn alerts(&self) -> Result<Vec<AlertItem>> {
        Ok(self.alerts.clone())
    }

    async fn bug_distribution(&self) -> Result<Vec<BugShare>> {
        Ok(self.bug_shares.clone())
    }

    async fn team_comparison(&self) -> Result<Vec<TeamComparison>> {
        Ok(self.comparison.clone())
    }
}

fn teams_data() -> Vec<TeamRecord> {
    vec![
        TeamRecord::new("Toolfi MX", 6.8, 18.2, 92.0, 8.9, 8.0, 2.1, 9.2),
        TeamRecord::new("Luca V2", 7.1, 16.5, 89.0, 8.6, 10.0, 2.8, 8.9),
        TeamRecord::new("ilana App", 8.9, 14.1, 85.0, 8.2, 15.0, 3.5, 8.4),
        TeamRecord::new("ilana Va", 9.2, 12.8, 82.0, 7.9, 18.0, 4.1, 8.1),
        TeamRecord::new("Station Core", 10.1, 11.5, 78.0, 7.6, 22.0, 4.8, 7.8),
    ]
}

fn developers_data() -> Vec<DeveloperRecord> {
    vec![
        DeveloperRecord::new("Carlos M.", "Toolfi MX", 12.3, 8.7, 15.2, 23, 9.4),
        DeveloperRecord::new("Ana L.", "Luca V2", 11.8, 8.2, 14.8, 21, 9.2),
        DeveloperRecord::new("Miguel R.", "ilana App", 10.9, 7.9, 13.5, 19, 8.9),
        DeveloperRecord::new("Sofia P.", "ilana Va", 10.2, 7.4, 12.8, 17, 8.7),
        DeveloperRecord::new("Diego C.", "Station Core", 9.8, 7.1, 12.1, 16, 8.5),
    ]
}

fn quarterly_trends() -> Vec<QuarterSample> {
    vec![
        QuarterSample::new("Q1 2024", 15.2, 5.8, 65.0, 6.8),
        QuarterSample::new("Q2 2024", 12.5, 8.7, 72.0, 7.4),
        QuarterSample::new("Q3 2024", 8.2, 15.3, 87.0, 8.1),
        QuarterSample::new("Q4 2024", 6.5, 18.2, 92.0, 8.7),
    ]
}

#[allow(clippy::too_many_arguments)]
fn summary(
    id: &str,
    title: &str,
    value: f64,
    unit: &str,
    trend: Trend,
    trend_value: f64,
    description: &str,
    category: MetricCategory,
) -> MetricSummary {
    MetricSummary {
        id: id.to_string(),
        title: title.to_string(),
        value: MetricValue::Number(value),
        unit: Some(unit.to_string()),
        trend,
        trend_value,
        description: description.to_string(),
        category,
    }
}

fn metric_summaries() -> Vec<MetricSummary> {
    use MetricCategory::*;
    vec![
        summary(
            "cycle-time",
            "Tiempo de Ciclo Promedio",
            8.2,
            "días",
            Trend::Down,
            -23.5,
            "Tiempo promedio desde commit hasta producción",
            Success,
        ),
        summary(
            "deployments",
            "Despliegues por Semana",
            15.3,
            "deploys",
            Trend::Up,
            28.7,
            "Frecuencia de releases a producción",
            Success,
        ),
        summary(
            "productivity",
            "Productividad Equipo",
            87.0,
            "%",
            Trend::Up,
            15.2,
            "Eficiencia general de entrega",
            Primary,
        ),
        summary(
            "quality",
            "Calidad Código",
            8.4,
            "/10",
            Trend::Up,
            12.1,
            "Score de calidad técnica",
            Primary,
        ),
        summary(
            "deviation",
            "Desviación Fechas Release",
            12.0,
            "%",
            Trend::Down,
            -18.3,
            "Varianza en fechas de entrega",
            Warning,
        ),
        summary(
            "errors",
            "Errores Post-Despliegue",
            3.2,
            "%",
            Trend::Down,
            -25.6,
            "Bugs críticos en producción",
            Success,
        ),
        summary(
            "tickets",
            "Tickets Críticos",
            2.1,
            "avg",
            Trend::Neutral,
            0.8,
            "Incidencias críticas pendientes",
            Critical,
        ),
    ]
}

fn active_alerts() -> Vec<AlertItem> {
    vec![
        AlertItem {
            id: "1".to_string(),
            severity: AlertSeverity::Critical,
            title: "Alto número de tickets críticos".to_string(),
            description:
                "Station Core tiene 4 tickets críticos pendientes, superando el umbral de 3."
                    .to_string(),
            team: Some("Station Core".to_string()),
            metric: "Tickets Críticos".to_string(),
            value: "4".to_string(),
        },
        AlertItem {
            id: "2".to_string(),
            severity: AlertSeverity::Warning,
            title: "Desviación de fechas elevada".to_string(),
            description:
                "ilana Va y Station Core superan el 15% de desviación en fechas de release."
                    .to_string(),
            team: Some("ilana Va, Station Core".to_string()),
            metric: "Desviación Release".to_string(),
            value: "18-22%".to_string(),
        },
    ]
}

fn bug_distribution() -> Vec<BugShare> {
    vec![
        BugShare::new("Toolfi MX", 15.0, "#10b981"),
        BugShare::new("Luca V2", 18.0, "#3b82f6"),
        BugShare::new("ilana App", 22.0, "#f59e0b"),
        BugShare::new("ilana Va", 25.0, "#ef4444"),
        BugShare::new("Station Core", 20.0, "#8b5cf6"),
    ]
}

fn team_comparison() -> Vec<TeamComparison> {
    vec![
        TeamComparison::new("Toolfi MX", 9.2, 18.2, 92.0),
        TeamComparison::new("Luca V2", 8.9, 16.5, 89.0),
        TeamComparison::new("ilana App", 8.4, 14.1, 85.0),
        TeamComparison::new("ilana Va", 8.1, 12.8, 82.0),
        TeamComparison::new("Station Core", 7.8, 11.5, 78.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[tokio::test]
    async fn test_team_names_are_unique() {
        let teams = StaticMetricsProvider::new().teams().await.unwrap();
        let names: HashSet<&str> = teams.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names.len(), teams.len());
    }

    #[tokio::test]
    async fn test_developers_reference_known_teams() {
        let provider = StaticMetricsProvider::new();
        let teams = provider.teams().await.unwrap();
        let developers = provider.developers().await.unwrap();

        for dev in &developers {
            assert!(
                teams.iter().any(|t| t.name == dev.team),
                "{} references unknown team {}",
                dev.name,
                dev.team
            );
        }
    }

    #[tokio::test]
    async fn test_metric_ids_are_unique() {
        let summaries = StaticMetricsProvider::new().metric_summaries().await.unwrap();
        let ids: HashSet<&str> = summaries.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(summaries.len(), 7);
        assert_eq!(ids.len(), 7);
    }

    #[tokio::test]
    async fn test_bug_distribution_totals_one_hundred() {
        let shares = StaticMetricsProvider::new().bug_distribution().await.unwrap();
        let total: f64 = shares.iter().map(|s| s.value).sum();
        assert_eq!(total, 100.0);
    }
}
