use http::StatusCode;
use tracing::Level;

/// Outcome of classifying one failure
///
/// Everything a response layer needs: the status to answer with, the
/// message safe to show the caller, the full diagnostic text, and the
/// level to log at. `detail` exposure to the caller is gated by handler
/// configuration; log output always receives it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Response status
    pub status: StatusCode,
    /// Message shown to the caller
    pub message: String,
    /// Full diagnostic text for logs and, when enabled, the response body
    pub detail: Option<String>,
    /// Level to log at, or `None` for failures that are expected traffic
    pub log: Option<Level>,
}
