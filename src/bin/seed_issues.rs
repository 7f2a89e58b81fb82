// Seeds the tracker repository with the embedded implementation plan
use std::process::ExitCode;
use std::sync::Arc;

use station_dashboard::application::issue_seeder::{SeedRunError, seed_with_token};
use station_dashboard::application::issue_tracker::IssueTracker;
use station_dashboard::infrastructure::config::{
    GITHUB_TOKEN_VAR, github_token, load_dashboard_config,
};
use station_dashboard::infrastructure::github_client::GithubIssueTracker;
use station_dashboard::infrastructure::issue_plan::load_issue_plan;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match seed().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Seeding failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn seed() -> anyhow::Result<()> {
    let config = load_dashboard_config()?;
    let plan = load_issue_plan()?;
    let github = config.github;

    tracing::info!(
        "Seeding {} issues into {}/{}",
        plan.issues.len(),
        github.owner,
        github.repo
    );

    let result = seed_with_token(github_token(), &plan, github.request_delay(), |token| {
        Arc::new(GithubIssueTracker::new(
            github.api_base.clone(),
            github.owner.clone(),
            github.repo.clone(),
            token,
        )) as Arc<dyn IssueTracker>
    })
    .await;

    match result {
        Ok(summary) => {
            tracing::info!(
                "Created {} issues in {}: {}",
                summary.created.len(),
                summary.repository,
                summary.issue_list()
            );
            tracing::info!("View them at {}", summary.issues_url);
            Ok(())
        }
        Err(SeedRunError::MissingToken) => {
            anyhow::bail!(
                "{} is not set; export a token with issue write access",
                GITHUB_TOKEN_VAR
            )
        }
        Err(SeedRunError::Failed(err)) => {
            if let Some(payload) = err.source.payload() {
                tracing::error!("Tracker response: {}", payload);
            }
            if !err.created.is_empty() {
                tracing::warn!(
                    "Issues created before the failure: {}",
                    err.created
                        .iter()
                        .map(|n| format!("#{n}"))
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            }
            Err(err.into())
        }
    }
}
