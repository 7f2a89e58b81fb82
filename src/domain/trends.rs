// Trend chart data models

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarterSample {
    pub quarter: String,
    pub cycle_time: f64,
    pub deployments: f64,
    pub productivity: f64,
    pub quality: f64,
}

impl QuarterSample {
    pub fn new(
        quarter: impl Into<String>,
        cycle_time: f64,
        deployments: f64,
        productivity: f64,
        quality: f64,
    ) -> Self {
        Self {
            quarter: quarter.into(),
            cycle_time,
            deployments,
            productivity,
            quality,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BugShare {
    pub team: String,
    pub value: f64,
    pub color: String,
}

impl BugShare {
    pub fn new(team: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        Self {
            team: team.into(),
            value,
            color: color.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamComparison {
    pub team: String,
    pub score: f64,
    pub deployments: f64,
    pub productivity: f64,
}

impl TeamComparison {
    pub fn new(team: impl Into<String>, score: f64, deployments: f64, productivity: f64) -> Self {
        Self {
            team: team.into(),
            score,
            deployments,
            productivity,
        }
    }
}

/// One plotted series: which data key it reads and how it is drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub key: &'static str,
    pub name: &'static str,
    pub color: &'static str,
    /// Appended to values in tooltips.
    pub suffix: &'static str,
}

const fn series(
    key: &'static str,
    name: &'static str,
    color: &'static str,
    suffix: &'static str,
) -> ChartSeries {
    ChartSeries {
        key,
        name,
        color,
        suffix,
    }
}

pub const QUARTERLY_SERIES: [ChartSeries; 3] = [
    series("cycleTime", "Tiempo Ciclo", "#ef4444", " días"),
    series("deployments", "Despliegues", "#10b981", ""),
    series("productivity", "Productividad", "#3b82f6", "%"),
];

pub const COMPARISON_SERIES: [ChartSeries; 3] = [
    series("score", "Score Total", "#3b82f6", ""),
    series("deployments", "Despliegues/Sem", "#10b981", ""),
    series("productivity", "Productividad %", "#f59e0b", "%"),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BugSlice {
    #[serde(flatten)]
    pub share: BugShare,
    /// Whole-number share of the total, as labelled on the pie.
    pub percent: u32,
    pub label: String,
}

/// Pie slices with their rounded percentage of the total.
pub fn bug_slices(shares: &[BugShare]) -> Vec<BugSlice> {
    let total: f64 = shares.iter().map(|s| s.value).sum();
    shares
        .iter()
        .map(|share| {
            let percent = if total > 0.0 {
                (share.value / total * 100.0).round() as u32
            } else {
                0
            };
            BugSlice {
                label: format!("{}: {}%", share.team, percent),
                percent,
                share: share.clone(),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendCharts {
    pub quarterly_title: &'static str,
    pub quarterly_series: Vec<ChartSeries>,
    pub quarters: Vec<QuarterSample>,
    pub bug_distribution_title: &'static str,
    pub bug_distribution: Vec<BugSlice>,
    pub comparison_title: &'static str,
    pub comparison_series: Vec<ChartSeries>,
    pub team_comparison: Vec<TeamComparison>,
}

impl TrendCharts {
    /// Quarters are kept in the order given.
    pub fn new(
        quarters: Vec<QuarterSample>,
        bug_shares: &[BugShare],
        team_comparison: Vec<TeamComparison>,
    ) -> Self {
        Self {
            quarterly_title: "Tendencias Trimestrales 2024",
            quarterly_series: QUARTERLY_SERIES.to_vec(),
            quarters,
            bug_distribution_title: "Distribución de Bugs por Equipo",
            bug_distribution: bug_slices(bug_shares),
            comparison_title: "Comparativa de Equipos - Score vs Despliegues vs Productividad",
            comparison_series: COMPARISON_SERIES.to_vec(),
            team_comparison,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSummary {
    pub title: &'static str,
    pub improvements: Vec<&'static str>,
    pub opportunities: Vec<&'static str>,
    pub objectives: Vec<&'static str>,
}

impl Default for TrendSummary {
    fn default() -> Self {
        Self {
            title: "Análisis de Tendencias 2024",
            improvements: vec![
                "Tiempo de ciclo reducido en 57%",
                "Despliegues incrementados 214%",
                "Productividad aumentada 41%",
            ],
            opportunities: vec![
                "Reducir desviación de fechas",
                "Mejorar calidad de código",
                "Optimizar resolución de bugs",
            ],
            objectives: vec![
                "Tiempo ciclo < 6 días",
                "20+ despliegues/semana",
                "95% productividad",
            ],
        }
    }
}
