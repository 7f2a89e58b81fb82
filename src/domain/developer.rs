// Developer domain model
use super::rating::{DEVELOPER_SCORE_BANDS, ScoreBand};
use super::sorting::{Sortable, SortValue, UnknownField};
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperRecord {
    pub name: String,
    /// Name of the developer's team. Not checked against the team list.
    pub team: String,
    pub commits: f64,
    pub prs: f64,
    pub reviews: f64,
    pub bugs_resolved: u32,
    pub score: f64,
}

impl DeveloperRecord {
    pub fn new(
        name: impl Into<String>,
        team: impl Into<String>,
        commits: f64,
        prs: f64,
        reviews: f64,
        bugs_resolved: u32,
        score: f64,
    ) -> Self {
        Self {
            name: name.into(),
            team: team.into(),
            commits,
            prs,
            reviews,
            bugs_resolved,
            score,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DeveloperField {
    Name,
    Team,
    Commits,
    Prs,
    Reviews,
    BugsResolved,
    #[default]
    Score,
}

impl DeveloperField {
    pub const ALL: [DeveloperField; 7] = [
        DeveloperField::Name,
        DeveloperField::Team,
        DeveloperField::Commits,
        DeveloperField::Prs,
        DeveloperField::Reviews,
        DeveloperField::BugsResolved,
        DeveloperField::Score,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DeveloperField::Name => "name",
            DeveloperField::Team => "team",
            DeveloperField::Commits => "commits",
            DeveloperField::Prs => "prs",
            DeveloperField::Reviews => "reviews",
            DeveloperField::BugsResolved => "bugsResolved",
            DeveloperField::Score => "score",
        }
    }
}

impl FromStr for DeveloperField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeveloperField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

impl Sortable for DeveloperRecord {
    type Field = DeveloperField;

    fn sort_value(&self, field: DeveloperField) -> SortValue<'_> {
        match field {
            DeveloperField::Name => SortValue::Text(&self.name),
            DeveloperField::Team => SortValue::Text(&self.team),
            DeveloperField::Commits => SortValue::Number(self.commits),
            DeveloperField::Prs => SortValue::Number(self.prs),
            DeveloperField::Reviews => SortValue::Number(self.reviews),
            DeveloperField::BugsResolved => SortValue::Number(f64::from(self.bugs_resolved)),
            DeveloperField::Score => SortValue::Number(self.score),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperRow {
    #[serde(flatten)]
    pub developer: DeveloperRecord,
    pub score_band: ScoreBand,
}

impl From<&DeveloperRecord> for DeveloperRow {
    fn from(developer: &DeveloperRecord) -> Self {
        Self {
            developer: developer.clone(),
            score_band: DEVELOPER_SCORE_BANDS.band(developer.score),
        }
    }
}

/// Podium position of the first three developers of the individual view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopPerformer {
    pub rank: usize,
    pub medal: Medal,
    pub name: String,
    pub team: String,
    pub score: f64,
    pub bugs_resolved: u32,
}

/// First three developers in the order given, not re-sorted by score.
pub fn top_performers(developers: &[DeveloperRecord]) -> Vec<TopPerformer> {
    developers
        .iter()
        .zip([Medal::Gold, Medal::Silver, Medal::Bronze])
        .enumerate()
        .map(|(index, (dev, medal))| TopPerformer {
            rank: index + 1,
            medal,
            name: dev.name.clone(),
            team: dev.team.clone(),
            score: dev.score,
            bugs_resolved: dev.bugs_resolved,
        })
        .collect()
}

/// Mean weekly activity across a developer list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityAverages {
    pub commits_per_week: f64,
    pub prs_per_week: f64,
    pub reviews_per_week: f64,
    pub bugs_resolved: u32,
}

impl ActivityAverages {
    /// Rates are rounded to one decimal, bugs to the nearest integer.
    /// `None` for an empty list.
    pub fn from_developers(developers: &[DeveloperRecord]) -> Option<Self> {
        if developers.is_empty() {
            return None;
        }
        let count = developers.len() as f64;
        let mean = |f: fn(&DeveloperRecord) -> f64| {
            developers.iter().map(f).sum::<f64>() / count
        };

        Some(Self {
            commits_per_week: round_to_tenth(mean(|d: &DeveloperRecord| d.commits)),
            prs_per_week: round_to_tenth(mean(|d: &DeveloperRecord| d.prs)),
            reviews_per_week: round_to_tenth(mean(|d: &DeveloperRecord| d.reviews)),
            bugs_resolved: mean(|d: &DeveloperRecord| f64::from(d.bugs_resolved)).round() as u32,
        })
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
