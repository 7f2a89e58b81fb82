// User-facing notifications raised by header actions
use super::dashboard::PeriodFilter;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub issued_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            issued_at: Utc::now(),
        }
    }

    pub fn refreshed() -> Self {
        Self::new(
            "Datos actualizados",
            "La información del dashboard ha sido actualizada correctamente.",
        )
    }

    pub fn exporting() -> Self {
        Self::new(
            "Exportando datos",
            "El reporte será descargado en formato PDF en unos momentos.",
        )
    }

    pub fn period_changed(period: PeriodFilter) -> Self {
        Self::new(
            "Período actualizado",
            format!("Mostrando datos para {}", period.label()),
        )
    }
}
