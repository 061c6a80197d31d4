//! Response Model Definition

use serde::Serialize;

/// Health check response (`{"status": "ok"}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
  /// Always `"ok"`
  pub status: &'static str,
}

impl HealthResponse {
  /// The only health state this service reports.
  #[must_use]
  pub fn ok() -> Self {
    Self { status: "ok" }
  }
}

/// `GET /random-word` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RandomWordResponse {
  /// Drawn word
  pub word: String,
}

/// `POST /word` response
///
/// The shape is identical whether or not the fallback path was taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordResponse {
  /// Drawn word
  pub word: String,
  /// Round time echoed from the request (seconds)
  pub round_time: u32,
  /// `true` if no word satisfied the length bounds and the whole corpus was used
  pub fallback: bool,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn health_response_serialization() {
    let json = serde_json::to_string(&HealthResponse::ok()).unwrap();
    assert_eq!(json, r#"{"status":"ok"}"#);
  }

  #[test]
  fn word_response_serialization() {
    let response = WordResponse { word: "cat".to_string(), round_time: 45, fallback: false };

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"word\":\"cat\""));
    assert!(json.contains("\"round_time\":45"));
    assert!(json.contains("\"fallback\":false"));
  }
}
