//! Contact form relay: validates website submissions and files them in the CRM.

pub mod crm;
pub mod domain;
pub mod notion;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use crm::{ContactRecordSink, CrmError, CrmRecord, DEFAULT_SOURCE, DEFAULT_SUBJECT};
pub use domain::{ContactRequest, ContactSubmission, ContactValidationError};
pub use notion::NotionClient;
pub use router::{contact_router, CONTACT_PATH};
pub use service::{ContactRelayError, ContactRelayService};
