// Issue tracker trait used by the plan seeder
use crate::domain::issue::{CreatedIssue, PlannedIssue};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("request to issue tracker failed: {0}")]
    Transport(String),

    #[error("issue tracker rejected the request with status {status}: {message}")]
    Rejected {
        status: u16,
        message: String,
        /// Raw response body, shown to the operator as-is.
        payload: String,
    },

    #[error("unexpected issue tracker response: {0}")]
    InvalidResponse(String),
}

impl TrackerError {
    pub fn payload(&self) -> Option<&str> {
        match self {
            TrackerError::Rejected { payload, .. } => Some(payload),
            _ => None,
        }
    }
}

#[async_trait]
pub trait IssueTracker: Send + Sync {
    async fn create_issue(&self, issue: &PlannedIssue) -> Result<CreatedIssue, TrackerError>;

    /// Human-facing location of the target repository
    fn repository(&self) -> String;

    fn issues_url(&self) -> String;
}
