use crate::infra::{deserialize_optional_date, AppState, ScoringContext};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{Local, NaiveDate};
use el_matador::finance::health::{
    generate_insights, FinancialInsights, FinancialProfile, HealthScoreEngine, HealthScoreView,
    InsightSettings,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Deserialize)]
pub(crate) struct HealthScoreRequest {
    pub(crate) profile: FinancialProfile,
    #[serde(default, alias = "asOf", deserialize_with = "deserialize_optional_date")]
    pub(crate) as_of: Option<NaiveDate>,
    #[serde(default, alias = "includeInsights")]
    pub(crate) include_insights: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct HealthScoreResponse {
    pub(crate) as_of: NaiveDate,
    pub(crate) score: HealthScoreView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) insights: Option<FinancialInsights>,
}

pub(crate) fn build_response(
    profile: &FinancialProfile,
    as_of: Option<NaiveDate>,
    include_insights: bool,
    settings: &InsightSettings,
) -> HealthScoreResponse {
    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());
    let result = HealthScoreEngine::new().score(profile);
    let insights = if include_insights {
        Some(generate_insights(profile, &result, settings, as_of))
    } else {
        None
    };

    HealthScoreResponse {
        as_of,
        score: result.view(),
        insights,
    }
}

pub(crate) fn app_router(scoring: ScoringContext) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/health-score", post(health_score_endpoint))
        .layer(Extension(scoring))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn health_score_endpoint(
    Extension(scoring): Extension<ScoringContext>,
    Json(payload): Json<HealthScoreRequest>,
) -> Json<HealthScoreResponse> {
    let HealthScoreRequest {
        profile,
        as_of,
        include_insights,
    } = payload;

    Json(build_response(
        &profile,
        as_of,
        include_insights,
        &scoring.insights,
    ))
}
