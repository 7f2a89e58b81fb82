// Active alerts panel
use super::style::{AlertStyle, alert_style};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AlertSeverity {
    Critical,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertItem {
    pub id: String,
    pub severity: AlertSeverity,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    pub metric: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertCard {
    #[serde(flatten)]
    pub alert: AlertItem,
    pub style: AlertStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmptyPanelMessage {
    pub title: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertPanel {
    pub count: usize,
    pub alerts: Vec<AlertCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<EmptyPanelMessage>,
}

impl AlertPanel {
    pub fn new(alerts: &[AlertItem]) -> Self {
        let cards: Vec<AlertCard> = alerts
            .iter()
            .map(|alert| AlertCard {
                style: alert_style(alert.severity),
                alert: alert.clone(),
            })
            .collect();

        let empty_message = cards.is_empty().then_some(EmptyPanelMessage {
            title: "No hay alertas activas",
            detail: "Todas las métricas están dentro de los rangos esperados",
        });

        Self {
            count: cards.len(),
            alerts: cards,
            empty_message,
        }
    }
}
