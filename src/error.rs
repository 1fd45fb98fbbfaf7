//! Error types for Maps tool invocations
//!
//! Upstream calls fail in a handful of ways (transport, upstream rejection,
//! malformed body). All of them fold into one [`ErrorEnvelope`] value at the
//! tool boundary; nothing is thrown past it.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

const MAX_MESSAGE_LEN: usize = 4096;
const TRUNCATE_SUFFIX: &str = "...[truncated]";

static SECRET_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\b(key|x-goog-api-key|api_key|token|secret|password)(\s*[=:]\s*)[^&\s"',]+"#)
        .expect("secret pattern is a valid regex")
});

/// Failure of a single upstream call
#[derive(Debug, Error)]
pub enum MapsError {
    #[error("Request failed: {0}")]
    Transport(String),

    /// Non-2xx status; `message` is the serialized upstream error body or
    /// the status line
    #[error("{message}")]
    Upstream { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Malformed(String),

    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

impl MapsError {
    /// Transport error without the request URL, which carries `key=`
    pub fn transport(error: reqwest::Error) -> Self {
        Self::Transport(error.without_url().to_string())
    }

    /// Upstream rejection of a JSON endpoint. A JSON error body is carried in
    /// serialized form; anything else falls back to the status line and text.
    pub fn upstream(status: reqwest::StatusCode, body: &str) -> Self {
        let message = match serde_json::from_str::<Value>(body) {
            Ok(parsed) => parsed.to_string(),
            Err(_) if body.trim().is_empty() => format!("HTTP {status}"),
            Err(_) => format!("HTTP {status}: {}", body.trim()),
        };
        Self::Upstream {
            status: status.as_u16(),
            message,
        }
    }

    /// Upstream rejection of a binary endpoint, carrying only the status line
    pub fn status_only(status: reqwest::StatusCode) -> Self {
        Self::Upstream {
            status: status.as_u16(),
            message: format!("HTTP {status}"),
        }
    }

    /// Upstream HTTP status, when the failure is an upstream rejection
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// The `{ "error": string }` value returned in place of a result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
}

impl ErrorEnvelope {
    /// Build `"<context>: <error>"`, with `secret` and key-like values redacted
    pub fn new(context: &str, error: &MapsError, secret: &str) -> Self {
        let mut message = format!("{context}: {error}");
        if !secret.is_empty() {
            message = message.replace(secret, "***");
        }
        Self {
            error: sanitize_error_message(&message),
        }
    }

    pub fn to_value(&self) -> Value {
        json!({ "error": self.error })
    }

    /// Recognize an envelope in a tool result value
    pub fn from_value(value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        if map.len() != 1 {
            return None;
        }
        map.get("error")?.as_str().map(|error| Self {
            error: error.to_string(),
        })
    }
}

/// Redact key-like values and bound the message length
pub fn sanitize_error_message(message: &str) -> String {
    let mut sanitized = SECRET_PATTERN
        .replace_all(message, "${1}${2}***")
        .to_string();

    if sanitized.len() > MAX_MESSAGE_LEN {
        let mut cut = MAX_MESSAGE_LEN - TRUNCATE_SUFFIX.len();
        while !sanitized.is_char_boundary(cut) {
            cut -= 1;
        }
        sanitized.truncate(cut);
        sanitized.push_str(TRUNCATE_SUFFIX);
    }

    sanitized
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_upstream_json_body_is_serialized() {
        let error = MapsError::upstream(
            StatusCode::BAD_REQUEST,
            r#"{ "error": { "code": 400, "message": "Invalid request" } }"#,
        );

        assert_eq!(error.status(), Some(400));
        assert_eq!(
            error.to_string(),
            r#"{"error":{"code":400,"message":"Invalid request"}}"#
        );
    }

    #[test]
    fn test_upstream_text_body_falls_back_to_status() {
        let error = MapsError::upstream(StatusCode::BAD_GATEWAY, "upstream down\n");
        assert_eq!(error.to_string(), "HTTP 502 Bad Gateway: upstream down");

        let empty = MapsError::upstream(StatusCode::SERVICE_UNAVAILABLE, "");
        assert_eq!(empty.to_string(), "HTTP 503 Service Unavailable");
    }

    #[test]
    fn test_status_only_error() {
        let error = MapsError::status_only(StatusCode::FORBIDDEN);
        assert_eq!(error.to_string(), "HTTP 403 Forbidden");
        assert_eq!(error.status(), Some(403));
    }

    #[test]
    fn test_envelope_prefixes_context() {
        let envelope = ErrorEnvelope::new(
            "Failed to geocode address",
            &MapsError::Malformed("expected value at line 1".to_string()),
            "",
        );

        assert_eq!(
            envelope.error,
            "Failed to geocode address: Failed to parse response: expected value at line 1"
        );
        assert_eq!(envelope.to_value(), json!({"error": envelope.error}));
    }

    #[test]
    fn test_envelope_redacts_literal_secret() {
        let envelope = ErrorEnvelope::new(
            "Failed",
            &MapsError::Transport("rejected AIzaSecret123 for project".to_string()),
            "AIzaSecret123",
        );

        assert!(!envelope.error.contains("AIzaSecret123"));
        assert!(envelope.error.contains("***"));
    }

    #[test]
    fn test_sanitize_query_key() {
        let sanitized = sanitize_error_message("GET /maps/api/geocode/json?address=x&key=AIzaABC&language=en");

        assert!(!sanitized.contains("AIzaABC"));
        assert!(sanitized.contains("key=***"));
        assert!(sanitized.contains("&language=en"));
    }

    #[test]
    fn test_sanitize_header_key() {
        let sanitized = sanitize_error_message("X-Goog-Api-Key: AIzaXYZ rejected");

        assert!(!sanitized.contains("AIzaXYZ"));
        assert!(sanitized.contains("X-Goog-Api-Key: ***"));
    }

    #[test]
    fn test_sanitize_leaves_page_tokens_in_json() {
        let message = r#"{"nextPageToken":"abc"}"#;
        assert_eq!(sanitize_error_message(message), message);
    }

    #[test]
    fn test_long_message_truncation() {
        let sanitized = sanitize_error_message(&"é".repeat(5000));

        assert!(sanitized.len() <= MAX_MESSAGE_LEN);
        assert!(sanitized.ends_with(TRUNCATE_SUFFIX));
    }

    #[test]
    fn test_envelope_from_value() {
        assert_eq!(
            ErrorEnvelope::from_value(&json!({"error": "boom"})),
            Some(ErrorEnvelope {
                error: "boom".to_string()
            })
        );
        // Upstream bodies that merely contain an error field are not envelopes
        assert_eq!(
            ErrorEnvelope::from_value(&json!({"error": {"code": 400}, "status": "x"})),
            None
        );
    }
}
