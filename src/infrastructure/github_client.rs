// GitHub issue tracker implementation
use crate::application::issue_tracker::{IssueTracker, TrackerError};
use crate::domain::issue::{CreatedIssue, PlannedIssue};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const USER_AGENT: &str = concat!("station-dashboard/", env!("CARGO_PKG_VERSION"));
const API_VERSION: &str = "2022-11-28";

#[derive(Debug, Clone)]
pub struct GithubIssueTracker {
    client: reqwest::Client,
    api_base: String,
    owner: String,
    repo: String,
    token: String,
}

#[derive(Debug, Serialize)]
struct CreateIssueRequest<'a> {
    title: &'a str,
    body: &'a str,
    labels: &'a [String],
}

#[derive(Debug, Deserialize)]
struct GithubErrorBody {
    message: String,
}

impl GithubIssueTracker {
    pub fn new(api_base: String, owner: String, repo: String, token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
            owner,
            repo,
            token,
        }
    }

    fn issues_endpoint(&self) -> String {
        format!(
            "{}/repos/{}/{}/issues",
            self.api_base,
            urlencoding::encode(&self.owner),
            urlencoding::encode(&self.repo)
        )
    }
}

#[async_trait]
impl IssueTracker for GithubIssueTracker {
    async fn create_issue(&self, issue: &PlannedIssue) -> Result<CreatedIssue, TrackerError> {
        let request = CreateIssueRequest {
            title: &issue.title,
            body: &issue.body,
            labels: &issue.labels,
        };

        let response = self
            .client
            .post(self.issues_endpoint())
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", USER_AGENT)
            .header("X-GitHub-Api-Version", API_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| TrackerError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let payload = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GithubErrorBody>(&payload)
                .map(|body| body.message)
                .unwrap_or_else(|_| status.to_string());
            tracing::error!("GitHub rejected issue '{}': {}", issue.title, message);
            return Err(TrackerError::Rejected {
                status: status.as_u16(),
                message,
                payload,
            });
        }

        response
            .json::<CreatedIssue>()
            .await
            .map_err(|e| TrackerError::InvalidResponse(e.to_string()))
    }

    fn repository(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    fn issues_url(&self) -> String {
        format!("https://github.com/{}/{}/issues", self.owner, self.repo)
    }
}
