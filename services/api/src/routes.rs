use crate::infra::AppState;
use axum::extract::rejection::JsonRejection;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use vacancy_desk::error::AppError;
use vacancy_desk::workflows::contact::{contact_router, ContactRecordSink, ContactRelayService};
use vacancy_desk::workflows::sourcing::{compare_channels, SourcingComparison, SourcingScenario};
use vacancy_desk::workflows::vacancy_cost::{
    estimate, DisplayedEstimate, EstimatorConfig, EstimatorVariant, Seniority, VacancyEstimate,
    VacancyEstimateInput,
};

pub(crate) const ESTIMATE_PATH: &str = "/api/v1/vacancy-cost/estimate";
pub(crate) const SOURCING_PATH: &str = "/api/v1/sourcing/compare";

#[derive(Debug, Deserialize)]
pub(crate) struct EstimateRequest {
    #[serde(default)]
    pub(crate) variant: Option<EstimatorVariant>,
    /// Full constant table replacing the preset for this request.
    #[serde(default)]
    pub(crate) config: Option<EstimatorConfig>,
    pub(crate) annual_salary: i64,
    pub(crate) seniority: Seniority,
    pub(crate) vacancy_duration: i64,
}

#[derive(Debug, Serialize)]
pub(crate) struct EstimateResponse {
    /// `None` when the request carried its own constant table.
    pub(crate) variant: Option<EstimatorVariant>,
    pub(crate) estimate: VacancyEstimate,
    pub(crate) display: DisplayedEstimate,
}

pub(crate) fn with_app_routes<S>(service: Arc<ContactRelayService<S>>) -> axum::Router
where
    S: ContactRecordSink + 'static,
{
    contact_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(ESTIMATE_PATH, axum::routing::post(estimate_endpoint))
        .route(SOURCING_PATH, axum::routing::post(sourcing_endpoint))
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

pub(crate) async fn estimate_endpoint(
    Extension(state): Extension<AppState>,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> Result<Json<EstimateResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::InvalidRequest(rejection.body_text()))?;
    let EstimateRequest {
        variant,
        config,
        annual_salary,
        seniority,
        vacancy_duration,
    } = request;

    let (variant, config) = match config {
        Some(config) => {
            config.validate()?;
            (None, config)
        }
        None => {
            let variant = variant.unwrap_or(state.estimator_variant);
            (Some(variant), variant.config())
        }
    };

    let input = VacancyEstimateInput::new(annual_salary, seniority, vacancy_duration);
    let estimate = estimate(&input, &config);
    let display = DisplayedEstimate::from_estimate(&estimate);

    Ok(Json(EstimateResponse {
        variant,
        estimate,
        display,
    }))
}

pub(crate) async fn sourcing_endpoint(
    Extension(state): Extension<AppState>,
    payload: Result<Json<SourcingScenario>, JsonRejection>,
) -> Result<Json<SourcingComparison>, AppError> {
    let Json(scenario) =
        payload.map_err(|rejection| AppError::InvalidRequest(rejection.body_text()))?;
    Ok(Json(compare_channels(scenario, &state.sourcing)))
}
