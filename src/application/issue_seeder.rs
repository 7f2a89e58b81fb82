// Issue seeder - Creates a fixed plan of issues, one call at a time
use crate::application::issue_tracker::{IssueTracker, TrackerError};
use crate::domain::issue::IssuePlan;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("failed to create issue {position}/{total} '{title}': {source}")]
pub struct SeedError {
    pub position: usize,
    pub total: usize,
    pub title: String,
    /// Issue numbers created before the failure
    pub created: Vec<u64>,
    #[source]
    pub source: TrackerError,
}

#[derive(Debug, Error)]
pub enum SeedRunError {
    #[error("no issue tracker token configured")]
    MissingToken,

    #[error(transparent)]
    Failed(#[from] SeedError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeedSummary {
    pub created: Vec<u64>,
    pub repository: String,
    pub issues_url: String,
}

impl SeedSummary {
    pub fn issue_list(&self) -> String {
        self.created
            .iter()
            .map(|n| format!("#{n}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

pub struct IssueSeeder {
    tracker: Arc<dyn IssueTracker>,
    delay: Duration,
}

impl IssueSeeder {
    pub fn new(tracker: Arc<dyn IssueTracker>, delay: Duration) -> Self {
        Self { tracker, delay }
    }

    /// Create every planned issue in order, pausing between calls. The first
    /// failure aborts the rest of the run.
    pub async fn run(&self, plan: &IssuePlan) -> Result<SeedSummary, SeedError> {
        let total = plan.issues.len();
        let mut created = Vec::with_capacity(total);

        for (index, issue) in plan.issues.iter().enumerate() {
            let position = index + 1;
            tracing::info!("Creating issue {}/{}: {}", position, total, issue.title);

            match self.tracker.create_issue(issue).await {
                Ok(result) => {
                    tracing::info!("Created issue #{}", result.number);
                    created.push(result.number);
                }
                Err(source) => {
                    return Err(SeedError {
                        position,
                        total,
                        title: issue.title.clone(),
                        created,
                        source,
                    });
                }
            }

            if position < total {
                tokio::time::sleep(self.delay).await;
            }
        }

        Ok(SeedSummary {
            created,
            repository: self.tracker.repository(),
            issues_url: self.tracker.issues_url(),
        })
    }
}

/// Run the plan only when a non-blank token is present. Without one the
/// tracker is never connected and nothing is created.
pub async fn seed_with_token<F>(
    token: Option<String>,
    plan: &IssuePlan,
    delay: Duration,
    connect: F,
) -> Result<SeedSummary, SeedRunError>
where
    F: FnOnce(String) -> Arc<dyn IssueTracker>,
{
    let token = token
        .filter(|token| !token.trim().is_empty())
        .ok_or(SeedRunError::MissingToken)?;

    let seeder = IssueSeeder::new(connect(token), delay);
    Ok(seeder.run(plan).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::issue::{CreatedIssue, PlannedIssue};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct ScriptedTracker {
        fail_at: Option<usize>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedTracker {
        fn new(fail_at: Option<usize>) -> Self {
            Self {
                fail_at,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl IssueTracker for ScriptedTracker {
        async fn create_issue(&self, issue: &PlannedIssue) -> Result<CreatedIssue, TrackerError> {
            let mut calls = self.calls.lock().unwrap();
            calls.push(issue.title.clone());
            let call = calls.len();
            if Some(call) == self.fail_at {
                return Err(TrackerError::Rejected {
                    status: 422,
                    message: "Validation Failed".to_string(),
                    payload: r#"{"message":"Validation Failed"}"#.to_string(),
                });
            }
            Ok(CreatedIssue {
                number: 100 + call as u64,
                html_url: None,
            })
        }

        fn repository(&self) -> String {
            "owner/repo".to_string()
        }

        fn issues_url(&self) -> String {
            "https://github.com/owner/repo/issues".to_string()
        }
    }

    fn plan(count: usize) -> IssuePlan {
        IssuePlan {
            issues: (1..=count)
                .map(|i| PlannedIssue {
                    title: format!("Issue {i}"),
                    body: "body".to_string(),
                    labels: vec!["type:task".to_string()],
                })
                .collect(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_creates_all_issues_in_order() {
        let tracker = Arc::new(ScriptedTracker::new(None));
        let seeder = IssueSeeder::new(tracker.clone(), Duration::from_millis(500));
        let started = tokio::time::Instant::now();

        let summary = seeder.run(&plan(3)).await.unwrap();

        assert_eq!(summary.created, vec![101, 102, 103]);
        assert_eq!(summary.issue_list(), "#101, #102, #103");
        assert_eq!(summary.repository, "owner/repo");
        assert_eq!(tracker.calls(), vec!["Issue 1", "Issue 2", "Issue 3"]);
        // Two pauses: none after the last call.
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(1000));
        assert!(elapsed < Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_failure_aborts_the_run() {
        let tracker = Arc::new(ScriptedTracker::new(Some(2)));
        let seeder = IssueSeeder::new(tracker.clone(), Duration::from_millis(500));

        let err = seeder.run(&plan(4)).await.unwrap_err();

        assert_eq!(err.position, 2);
        assert_eq!(err.total, 4);
        assert_eq!(err.title, "Issue 2");
        assert_eq!(err.created, vec![101]);
        assert_eq!(err.source.payload(), Some(r#"{"message":"Validation Failed"}"#));
        assert_eq!(tracker.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_plan_makes_no_calls() {
        let tracker = Arc::new(ScriptedTracker::new(None));
        let seeder = IssueSeeder::new(tracker.clone(), Duration::ZERO);

        let summary = seeder.run(&IssuePlan { issues: Vec::new() }).await.unwrap();

        assert!(summary.created.is_empty());
        assert!(tracker.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_or_blank_token_makes_no_calls() {
        for token in [None, Some(String::new()), Some("   ".to_string())] {
            let tracker = Arc::new(ScriptedTracker::new(None));
            let mut connected = false;

            let result = seed_with_token(token, &plan(3), Duration::ZERO, |_| {
                connected = true;
                tracker.clone() as Arc<dyn IssueTracker>
            })
            .await;

            assert!(matches!(result, Err(SeedRunError::MissingToken)));
            assert!(!connected);
            assert!(tracker.calls().is_empty());
        }
    }

    #[tokio::test]
    async fn test_token_is_handed_to_the_tracker() {
        let tracker = Arc::new(ScriptedTracker::new(None));
        let mut seen = None;

        let summary = seed_with_token(Some("ghp_test".to_string()), &plan(2), Duration::ZERO, |token| {
            seen = Some(token);
            tracker.clone() as Arc<dyn IssueTracker>
        })
        .await
        .unwrap();

        assert_eq!(seen.as_deref(), Some("ghp_test"));
        assert_eq!(summary.created, vec![101, 102]);
        assert_eq!(tracker.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_tracker_failure_surfaces_through_token_gate() {
        let tracker = Arc::new(ScriptedTracker::new(Some(1)));

        let err = seed_with_token(Some("ghp_test".to_string()), &plan(2), Duration::ZERO, |_| {
            tracker.clone() as Arc<dyn IssueTracker>
        })
        .await
        .unwrap_err();

        match err {
            SeedRunError::Failed(failure) => {
                assert_eq!(failure.position, 1);
                assert!(failure.created.is_empty());
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(tracker.calls().len(), 1);
    }
}
