// Team domain model
use super::rating::{MetricKind, Rating, ScoreBand, TEAM_SCORE_BANDS};
use super::sorting::{Sortable, SortValue, UnknownField};
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    pub name: String,
    pub cycle_time: f64,
    pub deployments: f64,
    pub productivity: f64,
    pub quality: f64,
    pub deviation: f64,
    pub errors: f64,
    pub score: f64,
}

impl TeamRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        cycle_time: f64,
        deployments: f64,
        productivity: f64,
        quality: f64,
        deviation: f64,
        errors: f64,
        score: f64,
    ) -> Self {
        Self {
            name: name.into(),
            cycle_time,
            deployments,
            productivity,
            quality,
            deviation,
            errors,
            score,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TeamField {
    Name,
    CycleTime,
    Deployments,
    Productivity,
    Quality,
    Deviation,
    Errors,
    #[default]
    Score,
}

impl TeamField {
    pub const ALL: [TeamField; 8] = [
        TeamField::Name,
        TeamField::CycleTime,
        TeamField::Deployments,
        TeamField::Productivity,
        TeamField::Quality,
        TeamField::Deviation,
        TeamField::Errors,
        TeamField::Score,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TeamField::Name => "name",
            TeamField::CycleTime => "cycleTime",
            TeamField::Deployments => "deployments",
            TeamField::Productivity => "productivity",
            TeamField::Quality => "quality",
            TeamField::Deviation => "deviation",
            TeamField::Errors => "errors",
            TeamField::Score => "score",
        }
    }
}

impl FromStr for TeamField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TeamField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

impl Sortable for TeamRecord {
    type Field = TeamField;

    fn sort_value(&self, field: TeamField) -> SortValue<'_> {
        match field {
            TeamField::Name => SortValue::Text(&self.name),
            TeamField::CycleTime => SortValue::Number(self.cycle_time),
            TeamField::Deployments => SortValue::Number(self.deployments),
            TeamField::Productivity => SortValue::Number(self.productivity),
            TeamField::Quality => SortValue::Number(self.quality),
            TeamField::Deviation => SortValue::Number(self.deviation),
            TeamField::Errors => SortValue::Number(self.errors),
            TeamField::Score => SortValue::Number(self.score),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRatings {
    pub cycle_time: Rating,
    pub deployments: Rating,
    pub productivity: Rating,
    pub quality: Rating,
    pub deviation: Rating,
    pub errors: Rating,
    pub score: ScoreBand,
}

/// A team table row: the record plus the rating of every rated column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamRow {
    #[serde(flatten)]
    pub team: TeamRecord,
    pub ratings: TeamRatings,
}

impl From<&TeamRecord> for TeamRow {
    fn from(team: &TeamRecord) -> Self {
        let ratings = TeamRatings {
            cycle_time: MetricKind::CycleTime.rate(team.cycle_time),
            deployments: MetricKind::Deployments.rate(team.deployments),
            productivity: MetricKind::Productivity.rate(team.productivity),
            quality: MetricKind::Quality.rate(team.quality),
            deviation: MetricKind::Deviation.rate(team.deviation),
            errors: MetricKind::Errors.rate(team.errors),
            score: TEAM_SCORE_BANDS.band(team.score),
        };
        Self {
            team: team.clone(),
            ratings,
        }
    }
}
