//! End-to-end relay scenarios through the public router, with the CRM replaced
//! by an in-process sink or an unconfigured Notion client.

use std::future::Future;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use vacancy_desk::config::{CrmConfig, DEFAULT_NOTION_API_URL, DEFAULT_NOTION_VERSION};
use vacancy_desk::workflows::contact::{
    contact_router, ContactRecordSink, ContactRelayService, CrmError, CrmRecord, NotionClient,
    CONTACT_PATH,
};

#[derive(Default, Clone)]
struct CountingSink {
    records: Arc<Mutex<Vec<CrmRecord>>>,
}

impl ContactRecordSink for CountingSink {
    fn create_record(
        &self,
        record: CrmRecord,
    ) -> impl Future<Output = Result<(), CrmError>> + Send {
        let records = self.records.clone();
        async move {
            records.lock().expect("sink mutex poisoned").push(record);
            Ok(())
        }
    }
}

fn contact_request(body: Value) -> Request<Body> {
    Request::post(CONTACT_PATH)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json payload")
}

#[tokio::test]
async fn incomplete_form_is_rejected_before_any_outbound_call() {
    let sink = CountingSink::default();
    let router = contact_router(Arc::new(ContactRelayService::new(Arc::new(sink.clone()))));

    let response = router
        .oneshot(contact_request(json!({
            "name": "Ada Recruiter",
            "email": "",
            "nachricht": "",
            "quelle": "Kontaktformular"
        })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body.get("error").and_then(Value::as_str).is_some());
    assert!(sink.records.lock().expect("sink mutex poisoned").is_empty());
}

#[tokio::test]
async fn complete_form_is_dated_today_and_stored() {
    let sink = CountingSink::default();
    let router = contact_router(Arc::new(ContactRelayService::new(Arc::new(sink.clone()))));
    let before = chrono::Utc::now().date_naive();

    let response = router
        .oneshot(contact_request(json!({
            "name": "Ada Recruiter",
            "email": "ada@example.de",
            "nachricht": "Wir haben drei offene Stellen."
        })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({ "success": true }));

    let records = sink.records.lock().expect("sink mutex poisoned").clone();
    assert_eq!(records.len(), 1);
    let after = chrono::Utc::now().date_naive();
    assert!(records[0].submitted_on >= before && records[0].submitted_on <= after);
}

#[tokio::test]
async fn unconfigured_crm_yields_generic_server_error() {
    let notion = NotionClient::new(CrmConfig {
        api_key: None,
        database_id: None,
        api_url: DEFAULT_NOTION_API_URL.to_string(),
        api_version: DEFAULT_NOTION_VERSION.to_string(),
    });
    let router = contact_router(Arc::new(ContactRelayService::new(Arc::new(notion))));

    let response = router
        .oneshot(contact_request(json!({
            "name": "Ada Recruiter",
            "email": "ada@example.de",
            "nachricht": "Hallo"
        })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(response).await,
        json!({ "error": "Failed to save contact" })
    );
}
