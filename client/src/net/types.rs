//! Wire DTOs for the activities REST API.
//!
//! DESIGN
//! ======
//! Field names follow the API's camelCase JSON. Identifiers are held as text
//! so activity lookups compare the same way regardless of whether the server
//! sends `1` or `"1"`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A signup-able activity as returned by `GET /api/activities`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Activity {
    #[serde(deserialize_with = "deserialize_id_text")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Activity {
    /// Description text for display; absent descriptions render empty.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// One email bound to one activity, as returned by `GET /api/signups`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signup {
    #[serde(deserialize_with = "deserialize_id_text")]
    pub activity_id: String,
    pub email: String,
}

/// Body for `POST /api/signups` and `DELETE /api/signups`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: String,
    pub activity_id: String,
}

/// Result of a successful board load: both collections fetched together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub activities: Vec<Activity>,
    pub signups: Vec<Signup>,
}

/// Success body of the write endpoints (`{"message": "..."}`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body of the API (`{"detail": ...}`). Validation errors carry a
/// structured `detail`, so only string details are surfaced.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn detail_text(&self) -> Option<String> {
        match &self.detail {
            Some(serde_json::Value::String(text)) if !text.trim().is_empty() => Some(text.clone()),
            _ => None,
        }
    }
}

fn deserialize_id_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected string or number id")),
    }
}
