// Main entry point - Dependency injection and server setup
use std::{net::SocketAddr, sync::Arc};

use station_dashboard::application::metrics_provider::MetricsProvider;
use station_dashboard::infrastructure::config::load_dashboard_config;
use station_dashboard::infrastructure::static_provider::StaticMetricsProvider;
use station_dashboard::presentation::app_state::AppState;
use station_dashboard::presentation::router::router;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Create provider (infrastructure layer)
    let provider: Arc<dyn MetricsProvider> = Arc::new(StaticMetricsProvider::new());

    // Create services and state (application layer)
    let state = Arc::new(AppState::new(provider, config.server.refresh_delay()));

    // Build router (presentation layer)
    let router = router(state);

    // Start server
    let addr: SocketAddr = config.server.bind_addr.parse()?;
    tracing::info!("Starting station-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
