// Presentation thresholds for team metrics and scores
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Rating {
    Good,
    Warning,
    Bad,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    CycleTime,
    Deployments,
    Productivity,
    Quality,
    Deviation,
    Errors,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Polarity {
    LowerIsBetter,
    HigherIsBetter,
}

#[derive(Debug, Clone, Copy)]
struct Threshold {
    polarity: Polarity,
    good: f64,
    warning: f64,
}

impl MetricKind {
    fn threshold(self) -> Threshold {
        use Polarity::*;
        let (polarity, good, warning) = match self {
            MetricKind::CycleTime => (LowerIsBetter, 7.0, 9.0),
            MetricKind::Deployments => (HigherIsBetter, 15.0, 12.0),
            MetricKind::Productivity => (HigherIsBetter, 90.0, 80.0),
            MetricKind::Quality => (HigherIsBetter, 8.5, 7.5),
            MetricKind::Deviation => (LowerIsBetter, 10.0, 15.0),
            MetricKind::Errors => (LowerIsBetter, 3.0, 4.0),
        };
        Threshold {
            polarity,
            good,
            warning,
        }
    }

    /// Both cutoffs are inclusive on the better side.
    pub fn rate(self, value: f64) -> Rating {
        let t = self.threshold();
        let within = |cutoff: f64| match t.polarity {
            Polarity::LowerIsBetter => value <= cutoff,
            Polarity::HigherIsBetter => value >= cutoff,
        };

        if within(t.good) {
            Rating::Good
        } else if within(t.warning) {
            Rating::Warning
        } else {
            Rating::Bad
        }
    }
}

/// Lower bounds (inclusive) of the excellent, good and fair score bands.
#[derive(Debug, Clone, Copy)]
pub struct ScoreBands {
    pub excellent: f64,
    pub good: f64,
    pub fair: f64,
}

pub const TEAM_SCORE_BANDS: ScoreBands = ScoreBands {
    excellent: 9.0,
    good: 8.0,
    fair: 7.0,
};

pub const DEVELOPER_SCORE_BANDS: ScoreBands = ScoreBands {
    excellent: 9.0,
    good: 8.5,
    fair: 8.0,
};

impl ScoreBands {
    pub fn band(&self, score: f64) -> ScoreBand {
        if score >= self.excellent {
            ScoreBand::Excellent
        } else if score >= self.good {
            ScoreBand::Good
        } else if score >= self.fair {
            ScoreBand::Fair
        } else {
            ScoreBand::Poor
        }
    }
}
