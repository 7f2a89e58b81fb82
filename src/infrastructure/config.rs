use serde::Deserialize;
use std::time::Duration;

pub const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub server: ServerSettings,
    pub github: GithubSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind_addr: String,
    pub refresh_delay_ms: u64,
}

impl ServerSettings {
    pub fn refresh_delay(&self) -> Duration {
        Duration::from_millis(self.refresh_delay_ms)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct GithubSettings {
    pub owner: String,
    pub repo: String,
    pub api_base: String,
    pub request_delay_ms: u64,
}

impl GithubSettings {
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }
}

/// Compiled defaults, then `config/dashboard.{toml,...}` if present, then
/// `DASHBOARD__SECTION__KEY` environment variables.
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    load_config_from("config/dashboard")
}

pub fn load_config_from(path: &str) -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .set_default("server.bind_addr", "0.0.0.0:8080")?
        .set_default("server.refresh_delay_ms", 1000)?
        .set_default("github.owner", "fcastrillo")?
        .set_default("github.repo", "perf-canvas")?
        .set_default("github.api_base", "https://api.github.com")?
        .set_default("github.request_delay_ms", 500)?
        .add_source(config::File::with_name(path).required(false))
        .add_source(
            config::Environment::with_prefix("DASHBOARD")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Token for the issue tracker. Only ever read from the environment.
pub fn github_token() -> Option<String> {
    std::env::var(GITHUB_TOKEN_VAR)
        .ok()
        .filter(|token| !token.trim().is_empty())
}
