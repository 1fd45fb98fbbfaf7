//! Result of a Maps tool invocation

use crate::error::ErrorEnvelope;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use bytes::Bytes;
use serde_json::{json, Value};

/// Raw image returned by a binary endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub content_type: String,
    pub bytes: Bytes,
}

impl ImagePayload {
    /// JSON rendering handed to the agent framework
    pub fn to_value(&self) -> Value {
        json!({
            "contentType": self.content_type,
            "encoding": "base64",
            "data": STANDARD.encode(&self.bytes),
        })
    }

    /// Recover the image from its JSON rendering
    pub fn from_value(value: &Value) -> Option<Self> {
        if value.get("encoding")?.as_str()? != "base64" {
            return None;
        }
        let content_type = value.get("contentType")?.as_str()?.to_string();
        let data = STANDARD.decode(value.get("data")?.as_str()?).ok()?;
        Some(Self {
            content_type,
            bytes: Bytes::from(data),
        })
    }
}

/// Outcome of one invocation. Failures are values, never panics or errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    /// Upstream JSON body, unmodified
    Json(Value),
    Image(ImagePayload),
    Failed(ErrorEnvelope),
}

impl ToolOutput {
    pub fn is_failure(&self) -> bool {
        matches!(self, ToolOutput::Failed(_))
    }

    /// Error message, when the invocation failed
    pub fn error(&self) -> Option<&str> {
        match self {
            ToolOutput::Failed(envelope) => Some(&envelope.error),
            _ => None,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            ToolOutput::Json(value) => value,
            ToolOutput::Image(image) => image.to_value(),
            ToolOutput::Failed(envelope) => envelope.to_value(),
        }
    }
}
