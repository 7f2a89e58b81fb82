// Style lookup tables for cards, trends and alerts
//
// Every tag maps to a descriptor through a table; adding a tag means adding
// a row.
use super::alert::AlertSeverity;
use super::metric::{MetricCategory, Trend};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Tone {
    Neutral,
    Positive,
    Caution,
    Negative,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDescriptor {
    pub tone: Tone,
    pub class: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeStyle {
    pub variant: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertStyle {
    pub container: StyleDescriptor,
    pub badge: BadgeStyle,
}

const fn style(tone: Tone, class: &'static str, icon: Option<&'static str>) -> StyleDescriptor {
    StyleDescriptor { tone, class, icon }
}

const NEUTRAL: StyleDescriptor = style(Tone::Neutral, "", None);

const CATEGORY_STYLES: &[(MetricCategory, StyleDescriptor)] = &[
    (MetricCategory::Primary, style(Tone::Neutral, "", None)),
    (MetricCategory::Success, style(Tone::Positive, "metric-card-success", None)),
    (MetricCategory::Warning, style(Tone::Caution, "metric-card-warning", None)),
    (MetricCategory::Critical, style(Tone::Negative, "metric-card-critical", None)),
];

const TREND_STYLES: &[(Trend, StyleDescriptor)] = &[
    (Trend::Up, style(Tone::Positive, "text-green-600", Some("trending-up"))),
    (Trend::Down, style(Tone::Negative, "text-red-600", Some("trending-down"))),
    (Trend::Neutral, style(Tone::Neutral, "text-gray-500", Some("minus"))),
];

const ALERT_STYLES: &[(AlertSeverity, AlertStyle)] = &[
    (
        AlertSeverity::Critical,
        AlertStyle {
            container: style(Tone::Negative, "border-red-200 bg-red-50", Some("bug")),
            badge: BadgeStyle {
                variant: "destructive",
                label: "Crítico",
            },
        },
    ),
    (
        AlertSeverity::Warning,
        AlertStyle {
            container: style(Tone::Caution, "border-yellow-200 bg-yellow-50", Some("clock")),
            badge: BadgeStyle {
                variant: "secondary",
                label: "Advertencia",
            },
        },
    ),
    (
        AlertSeverity::Info,
        AlertStyle {
            container: style(Tone::Info, "border-blue-200 bg-blue-50", Some("info")),
            badge: BadgeStyle {
                variant: "default",
                label: "Advertencia",
            },
        },
    ),
];

fn lookup<K: PartialEq + Copy, V: Copy>(table: &[(K, V)], key: K) -> Option<V> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

pub fn category_style(category: MetricCategory) -> StyleDescriptor {
    lookup(CATEGORY_STYLES, category).unwrap_or(NEUTRAL)
}

pub fn trend_style(trend: Trend) -> StyleDescriptor {
    lookup(TREND_STYLES, trend).unwrap_or(NEUTRAL)
}

pub fn alert_style(severity: AlertSeverity) -> AlertStyle {
    lookup(ALERT_STYLES, severity).unwrap_or(AlertStyle {
        container: NEUTRAL,
        badge: BadgeStyle {
            variant: "default",
            label: "",
        },
    })
}
