use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::workflows::contact::CONTACT_PATH;

fn post_json(body: serde_json::Value) -> Request<Body> {
    Request::post(CONTACT_PATH)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).expect("serialize body")))
        .expect("request builds")
}

fn assert_cors(response: &axum::response::Response) {
    let headers = response.headers();
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|value| value.to_str().ok()),
        Some("*")
    );
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_METHODS)
            .and_then(|value| value.to_str().ok()),
        Some("POST, OPTIONS")
    );
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_HEADERS)
            .and_then(|value| value.to_str().ok()),
        Some("Content-Type")
    );
}

#[tokio::test]
async fn post_stores_contact_and_reports_success() {
    let (router, sink) = recording_router();

    let response = router
        .oneshot(post_json(json!({
            "name": "Ada Recruiter",
            "email": "ada@example.de",
            "betreff": "Executive Search",
            "nachricht": "Bitte um Rückruf.",
            "quelle": "Kontaktformular"
        })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors(&response);
    assert_eq!(read_json_body(response).await, json!({ "success": true }));

    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message, "Bitte um Rückruf.");
}

#[tokio::test]
async fn missing_fields_return_bad_request_without_upstream_call() {
    let (router, sink) = recording_router();

    let response = router
        .oneshot(post_json(json!({
            "name": "Ada Recruiter",
            "email": "",
            "nachricht": ""
        })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_cors(&response);
    assert_eq!(
        read_json_body(response).await,
        json!({ "error": "Missing required fields" })
    );
    assert!(sink.records().is_empty());
}

#[tokio::test]
async fn upstream_failure_returns_generic_error() {
    let (router, sink) = failing_router();

    let response = router
        .oneshot(post_json(json!({
            "name": "Ada Recruiter",
            "email": "ada@example.de",
            "nachricht": "Hallo"
        })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = read_json_body(response).await;
    assert_eq!(body, json!({ "error": "Failed to save contact" }));
    assert!(!body.to_string().contains("validation_error"));
    assert_eq!(sink.attempts(), 1);
}

#[tokio::test]
async fn options_preflight_succeeds_with_empty_body() {
    let (router, sink) = recording_router();

    let response = router
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri(CONTACT_PATH)
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors(&response);
    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .expect("read body");
    assert!(body.is_empty());
    assert!(sink.records().is_empty());
}

#[tokio::test]
async fn other_methods_are_not_allowed() {
    for method in [Method::GET, Method::PUT, Method::DELETE] {
        let (router, sink) = recording_router();
        let response = router
            .oneshot(
                Request::builder()
                    .method(method.clone())
                    .uri(CONTACT_PATH)
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{method}");
        assert_cors(&response);
        assert_eq!(
            read_json_body(response).await,
            json!({ "error": "Method not allowed" })
        );
        assert!(sink.records().is_empty());
    }
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let (router, sink) = recording_router();

    let response = router
        .oneshot(
            Request::post(CONTACT_PATH)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"name\": "))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        read_json_body(response).await,
        json!({ "error": "Invalid request body" })
    );
    assert!(sink.records().is_empty());
}

#[tokio::test]
async fn english_field_aliases_are_accepted() {
    let (router, sink) = recording_router();

    let response = router
        .oneshot(post_json(json!({
            "name": "Ada Recruiter",
            "email": "ada@example.de",
            "subject": "Active Sourcing",
            "message": "Hello"
        })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let records = sink.records();
    assert_eq!(records[0].subject, "Active Sourcing");
    assert_eq!(records[0].message, "Hello");
}
