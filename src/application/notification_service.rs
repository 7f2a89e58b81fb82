// Notification service - Header actions that only notify
use crate::domain::dashboard::PeriodFilter;
use crate::domain::notification::Notification;
use std::time::Duration;

#[derive(Clone)]
pub struct NotificationService {
    refresh_delay: Duration,
}

impl NotificationService {
    pub fn new(refresh_delay: Duration) -> Self {
        Self { refresh_delay }
    }

    /// Simulated refresh: waits the configured delay, then reports success.
    /// Data is never reloaded.
    pub async fn refresh(&self) -> Notification {
        tokio::time::sleep(self.refresh_delay).await;
        tracing::info!("dashboard refresh acknowledged");
        Notification::refreshed()
    }

    pub fn export(&self) -> Notification {
        tracing::info!("dashboard export requested");
        Notification::exporting()
    }

    pub fn change_period(&self, period: PeriodFilter) -> Notification {
        tracing::info!(%period, "reporting period changed");
        Notification::period_changed(period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_refresh_waits_for_delay() {
        let service = NotificationService::new(Duration::from_millis(1000));
        let started = tokio::time::Instant::now();

        let notification = service.refresh().await;

        assert!(started.elapsed() >= Duration::from_millis(1000));
        assert_eq!(notification.title, "Datos actualizados");
    }

    #[test]
    fn test_export_notification() {
        let service = NotificationService::new(Duration::ZERO);
        assert_eq!(service.export().title, "Exportando datos");
        assert_eq!(
            service.change_period(PeriodFilter::Q1).description,
            "Mostrando datos para Q1 2024"
        );
    }
}
