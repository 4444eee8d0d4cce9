use http::StatusCode;
use serde::{Deserialize, Serialize};

/// Structured body attached to every error response
///
/// Serializes with `code`, `message`, and `details` fields. `details` is
/// omitted from the output entirely when unset, never written as null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    /// Status code echoed in the body
    pub code: u16,
    /// Human-readable description safe to show the caller
    pub message: String,
    /// Diagnostic detail, present only when detail exposure is enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorMessage {
    /// Build a message echoing `status` in the body
    pub fn new(status: StatusCode, message: impl Into<String>, details: Option<String>) -> Self {
        Self {
            code: status.as_u16(),
            message: message.into(),
            details,
        }
    }
}
