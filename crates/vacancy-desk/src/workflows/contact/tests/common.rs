use std::future::Future;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::contact::crm::{ContactRecordSink, CrmError, CrmRecord};
use crate::workflows::contact::domain::ContactSubmission;
use crate::workflows::contact::{contact_router, ContactRelayService};

pub(super) fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 9).expect("valid date")
}

pub(super) fn submission() -> ContactSubmission {
    ContactSubmission {
        name: Some("Ada Recruiter".to_string()),
        email: Some("ada@example.de".to_string()),
        subject: Some("Executive Search".to_string()),
        message: Some("Wir suchen eine Teamleitung Embedded.".to_string()),
        source: Some("Landingpage Vakanzkosten".to_string()),
    }
}

/// Sink that records every forwarded record and always succeeds.
#[derive(Default, Clone)]
pub(super) struct RecordingSink {
    records: Arc<Mutex<Vec<CrmRecord>>>,
}

impl RecordingSink {
    pub(super) fn records(&self) -> Vec<CrmRecord> {
        self.records.lock().expect("sink mutex poisoned").clone()
    }
}

impl ContactRecordSink for RecordingSink {
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

/// Sink standing in for an unavailable CRM; counts attempts.
#[derive(Default, Clone)]
pub(super) struct FailingSink {
    attempts: Arc<Mutex<usize>>,
}

impl FailingSink {
    pub(super) fn attempts(&self) -> usize {
        *self.attempts.lock().expect("sink mutex poisoned")
    }
}

impl ContactRecordSink for FailingSink {
    fn create_record(
        &self,
        _record: CrmRecord,
    ) -> impl Future<Output = Result<(), CrmError>> + Send {
        let attempts = self.attempts.clone();
        async move {
            *attempts.lock().expect("sink mutex poisoned") += 1;
            Err(CrmError::Rejected {
                status: 400,
                body: r#"{"code":"validation_error","message":"Email is not a property"}"#
                    .to_string(),
            })
        }
    }
}

pub(super) fn recording_service() -> (ContactRelayService<RecordingSink>, RecordingSink) {
    let sink = RecordingSink::default();
    let service = ContactRelayService::new(Arc::new(sink.clone())).with_today(fixed_today);
    (service, sink)
}

pub(super) fn failing_service() -> (ContactRelayService<FailingSink>, FailingSink) {
    let sink = FailingSink::default();
    let service = ContactRelayService::new(Arc::new(sink.clone())).with_today(fixed_today);
    (service, sink)
}

pub(super) fn recording_router() -> (axum::Router, RecordingSink) {
    let (service, sink) = recording_service();
    (contact_router(Arc::new(service)), sink)
}

pub(super) fn failing_router() -> (axum::Router, FailingSink) {
    let (service, sink) = failing_service();
    (contact_router(Arc::new(service)), sink)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
