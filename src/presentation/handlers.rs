// HTTP request handlers
use crate::application::table_service::{TableRecord, TableService};
use crate::domain::dashboard::PeriodFilter;
use crate::domain::sorting::{SortDirection, UnknownField};
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiError;
use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct DashboardQuery {
    pub view: Option<String>,
    pub period: Option<String>,
}

#[derive(Deserialize)]
pub struct TableQuery {
    pub sort: Option<String>,
    pub direction: Option<String>,
}

#[derive(Deserialize)]
pub struct SortRequest {
    pub field: String,
}

#[derive(Deserialize)]
pub struct PeriodRequest {
    pub period: String,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Composed dashboard for a view and period
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<DashboardQuery>,
) -> Result<Response, ApiError> {
    let view = parse_optional(query.view.as_deref())?.unwrap_or_default();
    let period = parse_optional(query.period.as_deref())?.unwrap_or_default();

    let dashboard = state.dashboard_service.get_dashboard(view, period).await?;
    Ok(respond(&dashboard, &headers).await)
}

pub async fn list_metrics(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let cards = state.dashboard_service.metric_cards().await?;
    Ok(respond(&cards, &headers).await)
}

pub async fn list_alerts(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let panel = state.dashboard_service.alert_panel().await?;
    Ok(respond(&panel, &headers).await)
}

pub async fn get_trends(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let charts = state.dashboard_service.trend_charts().await?;
    Ok(respond(&charts, &headers).await)
}

pub async fn list_teams(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<TableQuery>,
) -> Result<Response, ApiError> {
    table_view(&state.team_table, query, &headers).await
}

/// Header click on the teams table
pub async fn sort_teams(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<SortRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = body?;
    sort_table(&state.team_table, request, &headers).await
}

pub async fn list_developers(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<TableQuery>,
) -> Result<Response, ApiError> {
    table_view(&state.developer_table, query, &headers).await
}

/// Header click on the developers table
pub async fn sort_developers(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<SortRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = body?;
    sort_table(&state.developer_table, request, &headers).await
}

pub async fn refresh(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let notification = state.notification_service.refresh().await;
    Ok(respond(&notification, &headers).await)
}

pub async fn export(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let notification = state.notification_service.export();
    Ok(respond(&notification, &headers).await)
}

pub async fn change_period(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<PeriodRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = body?;
    let period: PeriodFilter = request.period.parse()?;
    let notification = state.notification_service.change_period(period);
    Ok(respond(&notification, &headers).await)
}

async fn table_view<R>(
    table: &TableService<R>,
    query: TableQuery,
    headers: &HeaderMap,
) -> Result<Response, ApiError>
where
    R: TableRecord,
    R::Field: FromStr<Err = UnknownField> + Serialize + Send + Sync,
{
    let field = parse_optional::<R::Field>(query.sort.as_deref())?;
    let direction = parse_optional::<SortDirection>(query.direction.as_deref())?;

    let view = table.view(Some(table.resolve(field, direction))).await?;
    Ok(respond(&view, headers).await)
}

async fn sort_table<R>(
    table: &TableService<R>,
    request: SortRequest,
    headers: &HeaderMap,
) -> Result<Response, ApiError>
where
    R: TableRecord,
    R::Field: FromStr<Err = UnknownField> + Serialize + Send + Sync,
{
    let field: R::Field = request.field.parse()?;
    let view = table.sort_by(field).await?;
    Ok(respond(&view, headers).await)
}

fn parse_optional<T>(raw: Option<&str>) -> Result<Option<T>, ApiError>
where
    T: FromStr,
    ApiError: From<T::Err>,
{
    Ok(raw.map(str::parse::<T>).transpose()?)
}

async fn respond<T: Serialize>(value: &T, headers: &HeaderMap) -> Response {
    match json_response(value, accepts_brotli(headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}
