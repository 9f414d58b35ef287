use std::fmt;

use inspector_core::{DecodedResult, InspectionOutcome, RequestId};

#[derive(Debug, Clone, PartialEq)]
pub enum InspectorEvent {
    Completed {
        request_id: RequestId,
        result: Result<InspectionOutcome, TransportError>,
    },
}

/// A response as received from the service, body still undecoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceResponse {
    pub status: u16,
    pub status_text: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ServiceResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A response whose body went through content-type decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedResponse {
    pub status: u16,
    pub status_text: String,
    pub content_type: Option<String>,
    pub body: DecodedResult,
}

impl DecodedResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct TransportError {
    pub kind: FailureKind,
    pub message: String,
}

impl TransportError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    Network,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    InvalidBody,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::InvalidBody => write!(f, "invalid response body"),
        }
    }
}
