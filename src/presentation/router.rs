// Route table for the dashboard API
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    change_period, export, get_dashboard, get_trends, health_check, list_alerts,
    list_developers, list_metrics, list_teams, refresh, sort_developers, sort_teams,
};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

// Compression is done in the response builders, so no CompressionLayer here.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .route("/metrics", get(list_metrics))
        .route("/alerts", get(list_alerts))
        .route("/trends", get(get_trends))
        .route("/teams", get(list_teams))
        .route("/teams/sort", post(sort_teams))
        .route("/developers", get(list_developers))
        .route("/developers/sort", post(sort_developers))
        .route("/actions/refresh", post(refresh))
        .route("/actions/export", post(export))
        .route("/actions/period", post(change_period))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::metrics_provider::MetricsProvider;
    use crate::domain::alert::AlertItem;
    use crate::domain::developer::DeveloperRecord;
    use crate::domain::metric::MetricSummary;
    use crate::domain::team::TeamRecord;
    use crate::domain::trends::{BugShare, QuarterSample, TeamComparison};
    use crate::infrastructure::static_provider::StaticMetricsProvider;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use std::time::Duration;
    use tower::ServiceExt;

    fn app() -> Router {
        let state = AppState::new(Arc::new(StaticMetricsProvider::new()), Duration::ZERO);
        router(Arc::new(state))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn team_names(table: &Value) -> Vec<String> {
        table["rows"]
            .as_array()
            .unwrap()
            .iter()
            .map(|row| row["name"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = app().oneshot(get_request("/healthz")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn test_default_dashboard_is_global_q4() {
        let (status, body) = send(&app(), get_request("/dashboard")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["view"], "global");
        assert_eq!(body["viewDescription"], "Vista general de métricas");
        assert_eq!(body["period"], "Q4");
        assert_eq!(body["periodLabel"], "Q4 2024");
        assert_eq!(body["alertCount"], 2);
        assert_eq!(body["metricCards"].as_array().unwrap().len(), 7);
        assert_eq!(body["teams"]["sort"]["field"], "score");
        assert_eq!(body["teams"]["sort"]["direction"], "desc");
        assert!(body.get("developers").is_none());
    }

    #[tokio::test]
    async fn test_individual_view_with_period() {
        let (status, body) = send(&app(), get_request("/dashboard?view=individual&period=q2")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["periodLabel"], "Q2 2024");
        assert_eq!(body["metricCards"].as_array().unwrap().len(), 3);
        assert_eq!(body["topPerformers"].as_array().unwrap().len(), 3);
        assert!(body.get("teams").is_none());
    }

    #[tokio::test]
    async fn test_unknown_view_is_bad_request() {
        let (status, body) = send(&app(), get_request("/dashboard?view=weekly")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "unknown dashboard view 'weekly'");
    }

    #[tokio::test]
    async fn test_unknown_sort_field_is_bad_request() {
        let app = app();
        let (status, body) = send(&app, get_request("/teams?sort=velocity")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "unknown sort field 'velocity'");

        let (status, _) = send(&app, post_json("/developers/sort", serde_json::json!({"field": "name"}))).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(&app, post_json("/developers/sort", serde_json::json!({"field": "cycleTime"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_sort_clicks_toggle_and_persist() {
        let app = app();

        let (_, body) = send(&app, post_json("/teams/sort", serde_json::json!({"field": "name"}))).await;
        assert_eq!(body["sort"]["field"], "name");
        assert_eq!(body["sort"]["direction"], "desc");
        assert_eq!(team_names(&body)[0], "Toolfi MX");

        let (_, body) = send(&app, post_json("/teams/sort", serde_json::json!({"field": "name"}))).await;
        assert_eq!(body["sort"]["direction"], "asc");
        assert_eq!(team_names(&body)[0], "ilana App");

        let (_, body) = send(&app, get_request("/teams")).await;
        assert_eq!(body["sort"]["field"], "name");
        assert_eq!(body["sort"]["direction"], "asc");

        let (_, body) = send(&app, get_request("/dashboard")).await;
        assert_eq!(body["teams"]["sort"]["field"], "name");
    }

    #[tokio::test]
    async fn test_query_sort_does_not_change_state() {
        let app = app();

        let (status, body) = send(&app, get_request("/teams?sort=cycleTime&direction=asc")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(team_names(&body)[0], "Toolfi MX");
        assert_eq!(team_names(&body)[4], "Station Core");

        let (_, body) = send(&app, get_request("/teams")).await;
        assert_eq!(body["sort"]["field"], "score");
        assert_eq!(body["sort"]["direction"], "desc");
    }

    #[tokio::test]
    async fn test_brotli_when_accepted() {
        let request = Request::get("/metrics")
            .header(header::ACCEPT_ENCODING, "gzip, br")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_ENCODING], "br");
    }

    #[tokio::test]
    async fn test_header_actions() {
        let app = app();

        let (status, body) = send(&app, post_json("/actions/refresh", Value::Null)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Datos actualizados");

        let (_, body) = send(&app, post_json("/actions/export", Value::Null)).await;
        assert_eq!(body["title"], "Exportando datos");

        let (_, body) = send(&app, post_json("/actions/period", serde_json::json!({"period": "Q1"}))).await;
        assert_eq!(body["description"], "Mostrando datos para Q1 2024");

        let (status, _) = send(&app, post_json("/actions/period", serde_json::json!({"period": "Q5"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_bodies_get_json_errors() {
        let app = app();
        let cases = [
            ("/teams/sort", serde_json::json!({})),
            ("/developers/sort", serde_json::json!({"field": 5})),
            ("/actions/period", serde_json::json!({"quarter": "Q1"})),
        ];

        for (uri, body) in cases {
            let (status, body) = send(&app, post_json(uri, body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()), "{uri}");
        }

        let request = Request::post("/teams/sort")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    struct FailingProvider;

    #[async_trait]
    impl MetricsProvider for FailingProvider {
        async fn teams(&self) -> anyhow::Result<Vec<TeamRecord>> {
            anyhow::bail!("metrics backend unavailable")
        }
        async fn developers(&self) -> anyhow::Result<Vec<DeveloperRecord>> {
            anyhow::bail!("metrics backend unavailable")
        }
        async fn quarterly_trends(&self) -> anyhow::Result<Vec<QuarterSample>> {
            anyhow::bail!("metrics backend unavailable")
        }
        async fn metric_summaries(&self) -> anyhow::Result<Vec<MetricSummary>> {
            anyhow::bail!("metrics backend unavailable")
        }
        async fn alerts(&self) -> anyhow::Result<Vec<AlertItem>> {
            anyhow::bail!("metrics backend unavailable")
        }
        async fn bug_distribution(&self) -> anyhow::Result<Vec<BugShare>> {
            anyhow::bail!("metrics backend unavailable")
        }
        async fn team_comparison(&self) -> anyhow::Result<Vec<TeamComparison>> {
            anyhow::bail!("metrics backend unavailable")
        }
    }

    #[tokio::test]
    async fn test_provider_failure_is_internal_error() {
        let state = AppState::new(Arc::new(FailingProvider), Duration::ZERO);
        let (status, body) = send(&router(Arc::new(state)), get_request("/teams")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "internal error");
    }
}
