// Metric summary cards
use super::style::{StyleDescriptor, category_style, trend_style};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    /// Already formatted for display.
    Text(String),
}

impl MetricValue {
    pub fn display(&self) -> String {
        match self {
            MetricValue::Number(n) => format_grouped(*n),
            MetricValue::Text(s) => s.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricCategory {
    Primary,
    Success,
    Warning,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSummary {
    pub id: String,
    pub title: String,
    pub value: MetricValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub trend: Trend,
    /// Signed percentage change.
    pub trend_value: f64,
    pub description: String,
    pub category: MetricCategory,
}

/// A metric summary together with its display strings and styles.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricCard {
    #[serde(flatten)]
    pub summary: MetricSummary,
    pub display_value: String,
    pub display_trend: String,
    pub card_style: StyleDescriptor,
    pub trend_style: StyleDescriptor,
}

impl From<&MetricSummary> for MetricCard {
    fn from(summary: &MetricSummary) -> Self {
        Self {
            display_value: summary.value.display(),
            display_trend: format_trend(summary.trend_value),
            card_style: category_style(summary.category),
            trend_style: trend_style(summary.trend),
            summary: summary.clone(),
        }
    }
}

/// `+28.7%` for gains, `-23.5%` for losses, `0%` unchanged.
pub fn format_trend(trend_value: f64) -> String {
    let sign = if trend_value > 0.0 { "+" } else { "" };
    format!("{sign}{trend_value}%")
}

/// Thousands-grouped number with at most three fraction digits.
pub fn format_grouped(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    let negative = rounded < 0.0;
    let text = format!("{}", rounded.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}
