use serde::{Deserialize, Serialize};

/// Contact form body as posted by the website. Field names follow the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, rename = "betreff", alias = "subject")]
    pub subject: Option<String>,
    #[serde(default, rename = "nachricht", alias = "message")]
    pub message: Option<String>,
    #[serde(default, rename = "quelle", alias = "source")]
    pub source: Option<String>,
}

/// Submission that passed validation; required fields are trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactValidationError {
    #[error("Missing required fields")]
    MissingFields(Vec<&'static str>),
    #[error("Invalid email address")]
    InvalidEmail,
}

impl ContactSubmission {
    pub fn validate(self) -> Result<ContactRequest, ContactValidationError> {
        let name = trimmed(self.name);
        let email = trimmed(self.email);
        let message = trimmed(self.message);

        let missing: Vec<&'static str> = [
            ("name", name.is_none()),
            ("email", email.is_none()),
            ("nachricht", message.is_none()),
        ]
        .into_iter()
        .filter_map(|(field, absent)| absent.then_some(field))
        .collect();

        let (Some(name), Some(email), Some(message)) = (name, email, message) else {
            return Err(ContactValidationError::MissingFields(missing));
        };

        if !is_plausible_email(&email) {
            return Err(ContactValidationError::InvalidEmail);
        }

        Ok(ContactRequest {
            name,
            email,
            subject: trimmed(self.subject),
            message,
            source: trimmed(self.source),
        })
    }
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Syntactic check only: one `@`, a non-empty local part, and a dotted domain.
pub fn is_plausible_email(candidate: &str) -> bool {
    if candidate.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}
