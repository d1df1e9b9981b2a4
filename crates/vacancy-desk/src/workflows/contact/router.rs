use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderValue, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;
use tracing::warn;

use super::crm::ContactRecordSink;
use super::domain::ContactSubmission;
use super::service::{ContactRelayError, ContactRelayService};

pub const CONTACT_PATH: &str = "/api/contact";

const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to save contact";

/// Router exposing the contact relay with permissive CORS on every response.
pub fn contact_router<S>(service: Arc<ContactRelayService<S>>) -> Router
where
    S: ContactRecordSink + 'static,
{
    Router::new()
        .route(
            CONTACT_PATH,
            post(submit_handler::<S>)
                .options(preflight_handler)
                .fallback(method_not_allowed),
        )
        .layer(middleware::map_response(apply_cors_headers))
        .with_state(service)
}

pub(crate) async fn submit_handler<S>(
    State(service): State<Arc<ContactRelayService<S>>>,
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> Response
where
    S: ContactRecordSink + 'static,
{
    let submission = match payload {
        Ok(Json(submission)) => submission,
        Err(rejection) => {
            warn!(%rejection, "unreadable contact payload");
            return error_response(StatusCode::BAD_REQUEST, "Invalid request body");
        }
    };

    match service.relay(submission).await {
        Ok(_) => (StatusCode::OK, Json(json!({ "success": true }))).into_response(),
        Err(ContactRelayError::Validation(error)) => {
            error_response(StatusCode::BAD_REQUEST, &error.to_string())
        }
        Err(ContactRelayError::Upstream(_)) => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, UPSTREAM_FAILURE_MESSAGE)
        }
    }
}

pub(crate) async fn preflight_handler() -> StatusCode {
    StatusCode::OK
}

pub(crate) async fn method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

async fn apply_cors_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    response
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
