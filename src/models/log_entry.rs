use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Audit detail payload. Stored opaquely; parsed as JSON when possible so
/// readers can pull out the `message` field, with the raw string preserved
/// when parsing fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LogDetails {
    Structured(serde_json::Value),
    Raw(String),
}

impl LogDetails {
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(value) => LogDetails::Structured(value),
            Err(_) => LogDetails::Raw(raw.to_string()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            LogDetails::Structured(value) => value.get("message").and_then(|m| m.as_str()),
            LogDetails::Raw(_) => None,
        }
    }
}

/// Immutable audit record, joined with the acting user's display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: i64,
    pub organisation_id: i64,
    pub user_id: Option<i64>,
    pub action: String,
    pub details: LogDetails,
    pub timestamp: DateTime<Utc>,
    pub user_name: Option<String>,
}
