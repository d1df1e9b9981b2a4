use std::future::Future;

use chrono::NaiveDate;
use serde::Serialize;

use super::domain::ContactRequest;

pub const DEFAULT_SUBJECT: &str = "Allgemeine Anfrage";
pub const DEFAULT_SOURCE: &str = "Kontaktformular";

/// CRM entry created for every accepted contact request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrmRecord {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub source: String,
    pub submitted_on: NaiveDate,
}

impl CrmRecord {
    pub fn from_request(request: ContactRequest, submitted_on: NaiveDate) -> Self {
        Self {
            name: request.name,
            email: request.email,
            subject: request
                .subject
                .unwrap_or_else(|| DEFAULT_SUBJECT.to_string()),
            message: request.message,
            source: request.source.unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
            submitted_on,
        }
    }
}

/// Outbound record creation so the relay can be exercised without the CRM.
pub trait ContactRecordSink: Send + Sync {
    fn create_record(
        &self,
        record: CrmRecord,
    ) -> impl Future<Output = Result<(), CrmError>> + Send;
}

#[derive(Debug, thiserror::Error)]
pub enum CrmError {
    #[error("CRM credentials are not configured")]
    NotConfigured,
    #[error("CRM request failed: {0}")]
    Transport(String),
    #[error("CRM rejected record with status {status}: {body}")]
    Rejected { status: u16, body: String },
}
