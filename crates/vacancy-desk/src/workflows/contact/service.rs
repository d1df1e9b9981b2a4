use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{error, info, warn};

use super::crm::{ContactRecordSink, CrmError, CrmRecord};
use super::domain::{ContactSubmission, ContactValidationError};

/// Validates contact submissions and forwards accepted ones to the CRM.
pub struct ContactRelayService<S> {
    sink: Arc<S>,
    today: fn() -> NaiveDate,
}

fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

impl<S> ContactRelayService<S>
where
    S: ContactRecordSink + 'static,
{
    pub fn new(sink: Arc<S>) -> Self {
        Self {
            sink,
            today: utc_today,
        }
    }

    /// Replace the clock used to date CRM records.
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Validate and forward a submission. Returns only after the CRM confirmed the record.
    pub async fn relay(
        &self,
        submission: ContactSubmission,
    ) -> Result<CrmRecord, ContactRelayError> {
        let request = submission.validate().inspect_err(|err| {
            if let ContactValidationError::MissingFields(fields) = err {
                warn!(?fields, "contact submission rejected");
            } else {
                warn!(%err, "contact submission rejected");
            }
        })?;

        let record = CrmRecord::from_request(request, (self.today)());

        if let Err(err) = self.sink.create_record(record.clone()).await {
            error!(%err, "contact record could not be stored");
            return Err(err.into());
        }

        info!(source = %record.source, subject = %record.subject, "contact request stored");
        Ok(record)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ContactRelayError {
    #[error(transparent)]
    Validation(#[from] ContactValidationError),
    #[error(transparent)]
    Upstream(#[from] CrmError),
}
