use std::future::Future;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::{json, Value};
use tracing::debug;

use super::crm::{ContactRecordSink, CrmError, CrmRecord};
use crate::config::CrmConfig;

/// Notion caps a single rich-text segment at 2000 characters.
pub const RICH_TEXT_LIMIT: usize = 2000;

/// Creates one page per contact request in the configured Notion database.
#[derive(Clone)]
pub struct NotionClient {
    http: reqwest::Client,
    config: CrmConfig,
}

impl NotionClient {
    pub fn new(config: CrmConfig) -> Self {
        Self::with_http(reqwest::Client::new(), config)
    }

    pub fn with_http(http: reqwest::Client, config: CrmConfig) -> Self {
        Self { http, config }
    }

    pub fn pages_url(&self) -> String {
        format!("{}/pages", self.config.api_url.trim_end_matches('/'))
    }
}

impl std::fmt::Debug for NotionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotionClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ContactRecordSink for NotionClient {
    fn create_record(
        &self,
        record: CrmRecord,
    ) -> impl Future<Output = Result<(), CrmError>> + Send {
        let http = self.http.clone();
        let url = self.pages_url();
        let api_version = self.config.api_version.clone();
        let credentials = self
            .config
            .api_key
            .clone()
            .zip(self.config.database_id.clone());

        async move {
            let (api_key, database_id) = credentials.ok_or(CrmError::NotConfigured)?;
            let payload = page_payload(&record, &database_id);

            let response = http
                .post(&url)
                .header(AUTHORIZATION, format!("Bearer {api_key}"))
                .header(CONTENT_TYPE, "application/json")
                .header("Notion-Version", api_version)
                .json(&payload)
                .send()
                .await
                .map_err(|err| CrmError::Transport(err.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(CrmError::Rejected {
                    status: status.as_u16(),
                    body,
                });
            }

            debug!(%status, "notion page created");
            Ok(())
        }
    }
}

/// Maps a record onto the contact database's page properties.
pub fn page_payload(record: &CrmRecord, database_id: &str) -> Value {
    let message: Vec<Value> = rich_text_segments(&record.message)
        .into_iter()
        .map(|content| json!({ "text": { "content": content } }))
        .collect();

    json!({
        "parent": { "database_id": database_id },
        "properties": {
            "Name": { "title": [{ "text": { "content": record.name } }] },
            "Email": { "email": record.email },
            "Betreff": { "select": { "name": record.subject } },
            "Nachricht": { "rich_text": message },
            "Datum": { "date": { "start": record.submitted_on.format("%Y-%m-%d").to_string() } },
            "Quelle": { "select": { "name": record.source } },
        }
    })
}

fn rich_text_segments(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }
    chars
        .chunks(RICH_TEXT_LIMIT)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CrmConfig, DEFAULT_NOTION_API_URL, DEFAULT_NOTION_VERSION};
    use chrono::NaiveDate;

    fn record(message: &str) -> CrmRecord {
        CrmRecord {
            name: "Ada Recruiter".to_string(),
            email: "ada@example.de".to_string(),
            subject: "Allgemeine Anfrage".to_string(),
            message: message.to_string(),
            source: "Kontaktformular".to_string(),
            submitted_on: NaiveDate::from_ymd_opt(2026, 3, 9).expect("valid date"),
        }
    }

    fn unconfigured() -> CrmConfig {
        CrmConfig {
            api_key: None,
            database_id: None,
            api_url: format!("{DEFAULT_NOTION_API_URL}/"),
            api_version: DEFAULT_NOTION_VERSION.to_string(),
        }
    }

    #[test]
    fn payload_maps_database_properties() {
        let payload = page_payload(&record("Hallo"), "db-42");

        assert_eq!(payload["parent"]["database_id"], "db-42");
        let properties = &payload["properties"];
        assert_eq!(properties["Name"]["title"][0]["text"]["content"], "Ada Recruiter");
        assert_eq!(properties["Email"]["email"], "ada@example.de");
        assert_eq!(properties["Betreff"]["select"]["name"], "Allgemeine Anfrage");
        assert_eq!(properties["Nachricht"]["rich_text"][0]["text"]["content"], "Hallo");
        assert_eq!(properties["Datum"]["date"]["start"], "2026-03-09");
        assert_eq!(properties["Quelle"]["select"]["name"], "Kontaktformular");
    }

    #[test]
    fn long_messages_are_split_on_char_boundaries() {
        let message = "ä".repeat(RICH_TEXT_LIMIT + 5);
        let payload = page_payload(&record(&message), "db-42");
        let segments = payload["properties"]["Nachricht"]["rich_text"]
            .as_array()
            .expect("rich text array");

        assert_eq!(segments.len(), 2);
        assert_eq!(
            segments[1]["text"]["content"].as_str().map(|s| s.chars().count()),
            Some(5)
        );
    }

    #[test]
    fn pages_url_ignores_trailing_slash() {
        let client = NotionClient::new(unconfigured());
        assert_eq!(client.pages_url(), "https://api.notion.com/v1/pages");
    }

    #[tokio::test]
    async fn missing_credentials_fail_without_network() {
        let client = NotionClient::new(unconfigured());
        let outcome = client.create_record(record("Hallo")).await;
        assert!(matches!(outcome, Err(CrmError::NotConfigured)));
    }
}
