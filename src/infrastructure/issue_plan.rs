// Embedded issue plan
use crate::domain::issue::IssuePlan;

const PLAN_TOML: &str = include_str!("../../plans/issues.toml");

pub fn load_issue_plan() -> anyhow::Result<IssuePlan> {
    parse_issue_plan(PLAN_TOML)
}

pub fn parse_issue_plan(source: &str) -> anyhow::Result<IssuePlan> {
    let plan: IssuePlan = toml::from_str(source)?;
    if let Some(issue) = plan.issues.iter().find(|i| i.title.trim().is_empty()) {
        anyhow::bail!("issue plan contains an untitled issue (labels: {:?})", issue.labels);
    }
    Ok(plan)
}
