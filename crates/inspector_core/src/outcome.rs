use serde::Deserialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

use crate::node::DisplayNode;
use crate::value::DecodedResult;

/// Result of one completed request/response cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum InspectionOutcome {
    Rendered(DisplayNode),
    /// Success status, but nothing to show.
    Empty,
    /// Non-success status; the body is shown as a structured error.
    Failed(ErrorReport),
}

/// Error body shape returned by the rendering service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceError {
    #[serde(rename = "type")]
    pub error_type: String,
    pub description: String,
    pub info: ServiceErrorInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceErrorInfo {
    pub message: String,
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
}

impl ServiceError {
    /// `type`, or `type -> info.type` when the latter is present.
    pub fn type_string(&self) -> String {
        match self.info.error_type.as_deref() {
            Some(inner) if !inner.is_empty() => format!("{} -> {}", self.error_type, inner),
            _ => self.error_type.clone(),
        }
    }
}

/// Everything the error panel displays for a failed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    pub status: u16,
    pub status_text: String,
    /// The whole decoded body, pretty-printed.
    pub body: String,
    pub message: Option<String>,
    pub description: Option<String>,
    pub type_string: Option<String>,
}

impl ErrorReport {
    pub fn new(status: u16, status_text: &str, body: &DecodedResult) -> Self {
        let json = body.to_json();
        let parsed = serde_json::from_value::<ServiceError>(json.clone()).ok();
        let body = match body {
            DecodedResult::Text(text) => text.clone(),
            _ => pretty_json(&json),
        };

        Self {
            status,
            status_text: status_text.to_string(),
            body,
            message: parsed.as_ref().map(|err| err.info.message.clone()),
            description: parsed.as_ref().map(|err| err.description.clone()),
            type_string: parsed.as_ref().map(ServiceError::type_string),
        }
    }

    pub fn status_line(&self) -> String {
        format!("{} ({})", self.status, self.status_text)
    }
}

fn pretty_json(value: &Value) -> String {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    match serde::Serialize::serialize(value, &mut ser) {
        Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
        Err(_) => value.to_string(),
    }
}
