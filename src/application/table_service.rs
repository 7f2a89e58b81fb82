// Table service - Sortable tables with per-table sort state
use crate::application::metrics_provider::MetricsProvider;
use crate::domain::developer::{DeveloperRecord, DeveloperRow};
use crate::domain::sorting::{SortDirection, SortState, Sortable, TableView};
use crate::domain::team::{TeamRecord, TeamRow};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A record type that backs a sortable table.
#[async_trait]
pub trait TableRecord: Sortable + Clone + Send + Sync + Sized + 'static {
    type Row: Serialize + Send;

    async fn load(provider: &dyn MetricsProvider) -> anyhow::Result<Vec<Self>>;

    fn to_row(&self) -> Self::Row;
}

#[async_trait]
impl TableRecord for TeamRecord {
    type Row = TeamRow;

    async fn load(provider: &dyn MetricsProvider) -> anyhow::Result<Vec<Self>> {
        provider.teams().await
    }

    fn to_row(&self) -> TeamRow {
        TeamRow::from(self)
    }
}

#[async_trait]
impl TableRecord for DeveloperRecord {
    type Row = DeveloperRow;

    async fn load(provider: &dyn MetricsProvider) -> anyhow::Result<Vec<Self>> {
        provider.developers().await
    }

    fn to_row(&self) -> DeveloperRow {
        DeveloperRow::from(self)
    }
}

#[derive(Clone)]
pub struct TableService<R: TableRecord> {
    provider: Arc<dyn MetricsProvider>,
    state: Arc<Mutex<SortState<R::Field>>>,
}

impl<R> TableService<R>
where
    R: TableRecord,
    R::Field: Send + Sync,
{
    pub fn new(provider: Arc<dyn MetricsProvider>) -> Self
    where
        R::Field: Default,
    {
        Self::with_state(provider, SortState::default())
    }

    pub fn with_state(provider: Arc<dyn MetricsProvider>, state: SortState<R::Field>) -> Self {
        Self {
            provider,
            state: Arc::new(Mutex::new(state)),
        }
    }

    pub fn sort_state(&self) -> SortState<R::Field> {
        *self.lock()
    }

    /// Apply a header click to this table's state and return the new state.
    pub fn set_sort_key(&self, field: R::Field) -> SortState<R::Field> {
        let mut state = self.lock();
        state.set_sort_key(field);
        tracing::debug!(direction = state.direction.as_str(), "table sort key changed");
        *state
    }

    /// Resolve an explicit request against the current state without
    /// changing it. A field without a direction sorts descending.
    pub fn resolve(
        &self,
        field: Option<R::Field>,
        direction: Option<SortDirection>,
    ) -> SortState<R::Field> {
        let current = self.sort_state();
        match (field, direction) {
            (Some(field), direction) => {
                SortState::with_direction(field, direction.unwrap_or(SortDirection::Descending))
            }
            (None, Some(direction)) => SortState::with_direction(current.field, direction),
            (None, None) => current,
        }
    }

    /// Rows ordered by `sort`, or by the table's own state when `None`.
    pub async fn view(
        &self,
        sort: Option<SortState<R::Field>>,
    ) -> anyhow::Result<TableView<R::Field, R::Row>> {
        let sort = sort.unwrap_or_else(|| self.sort_state());
        let records = R::load(self.provider.as_ref()).await?;
        let rows = sort.apply(&records).iter().map(R::to_row).collect();

        Ok(TableView { sort, rows })
    }

    pub async fn sort_by(&self, field: R::Field) -> anyhow::Result<TableView<R::Field, R::Row>> {
        let sort = self.set_sort_key(field);
        self.view(Some(sort)).await
    }

    fn lock(&self) -> MutexGuard<'_, SortState<R::Field>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::developer::DeveloperField;
    use crate::domain::team::TeamField;
    use crate::infrastructure::static_provider::StaticMetricsProvider;

    fn provider() -> Arc<dyn MetricsProvider> {
        Arc::new(StaticMetricsProvider::new())
    }

    #[tokio::test]
    async fn test_default_view_is_score_descending() {
        let table = TableService::<TeamRecord>::new(provider());
        let view = table.view(None).await.unwrap();

        assert_eq!(view.sort.field, TeamField::Score);
        assert_eq!(view.sort.direction, SortDirection::Descending);
        let scores: Vec<f64> = view.rows.iter().map(|r| r.team.score).collect();
        assert_eq!(scores, vec![9.2, 8.9, 8.4, 8.1, 7.8]);
    }

    #[tokio::test]
    async fn test_sort_by_toggles_and_resets() {
        let table = TableService::<TeamRecord>::new(provider());

        let view = table.sort_by(TeamField::Score).await.unwrap();
        assert_eq!(view.sort.direction, SortDirection::Ascending);
        assert_eq!(view.rows[0].team.name, "Station Core");

        let view = table.sort_by(TeamField::Name).await.unwrap();
        assert_eq!(view.sort.field, TeamField::Name);
        assert_eq!(view.sort.direction, SortDirection::Descending);
        assert_eq!(view.rows[0].team.name, "Toolfi MX");

        assert_eq!(table.sort_state(), view.sort);
    }

    #[tokio::test]
    async fn test_explicit_request_does_not_touch_state() {
        let table = TableService::<DeveloperRecord>::new(provider());

        let sort = table.resolve(Some(DeveloperField::Commits), Some(SortDirection::Ascending));
        let view = table.view(Some(sort)).await.unwrap();
        assert_eq!(view.rows[0].developer.name, "Diego C.");

        assert_eq!(table.sort_state(), SortState::new(DeveloperField::Score));
    }

    #[test]
    fn test_resolve_fills_missing_parts() {
        let table = TableService::<DeveloperRecord>::new(provider());
        table.set_sort_key(DeveloperField::Prs);

        let sort = table.resolve(None, Some(SortDirection::Ascending));
        assert_eq!(sort.field, DeveloperField::Prs);
        assert_eq!(sort.direction, SortDirection::Ascending);

        let sort = table.resolve(Some(DeveloperField::Team), None);
        assert_eq!(sort.direction, SortDirection::Descending);

        assert_eq!(table.resolve(None, None), table.sort_state());
    }

    #[test]
    fn test_clones_share_state() {
        let table = TableService::<TeamRecord>::new(provider());
        let other = table.clone();
        other.set_sort_key(TeamField::Errors);
        assert_eq!(table.sort_state().field, TeamField::Errors);
    }
}
