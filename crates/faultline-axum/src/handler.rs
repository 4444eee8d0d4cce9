use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use faultline_core::{
    Classification, ErrorMessage, Fault, FaultConfig, LogSink, MediaType, PayloadConfig, PayloadError, TracingSink,
};
use http::header;

/// Translates body codec failures into structured error responses
///
/// Stateless apart from config and the log sink; safe to clone and share
/// across request-handling tasks.
#[derive(Clone)]
pub struct PayloadErrorHandler {
    config: PayloadConfig,
    sink: Arc<dyn LogSink>,
}

impl PayloadErrorHandler {
    /// Handler logging through the installed `tracing` subscriber
    #[must_use]
    pub fn new(config: PayloadConfig) -> Self {
        Self {
            config,
            sink: Arc::new(TracingSink),
        }
    }

    /// Handler logging through a caller-supplied sink
    #[must_use]
    pub fn with_sink(config: PayloadConfig, sink: Arc<dyn LogSink>) -> Self {
        Self { config, sink }
    }

    /// Convert a codec failure into its response
    ///
    /// Never fails: every input maps to exactly one response and exactly
    /// one log emission.
    #[must_use]
    pub fn handle(&self, error: &PayloadError) -> Response {
        respond(
            error.classify(),
            self.config.show_details,
            self.config.media_type,
            self.sink.as_ref(),
        )
    }

    /// Convert an axum JSON extractor rejection into its response
    ///
    /// Extractor rejections are request-side parse failures by
    /// construction, so they classify like any other malformed payload.
    #[must_use]
    pub fn handle_rejection(&self, rejection: &JsonRejection) -> Response {
        self.handle(&PayloadError::parse_message(rejection.body_text()))
    }
}

impl Default for PayloadErrorHandler {
    fn default() -> Self {
        Self::new(PayloadConfig::default())
    }
}

/// Translates arbitrary uncaught faults into structured error responses
///
/// Detail is suppressed by default; see [`FaultConfig`].
#[derive(Clone)]
pub struct FaultHandler {
    config: FaultConfig,
    sink: Arc<dyn LogSink>,
}

impl FaultHandler {
    /// Handler logging through the installed `tracing` subscriber
    #[must_use]
    pub fn new(config: FaultConfig) -> Self {
        Self {
            config,
            sink: Arc::new(TracingSink),
        }
    }

    /// Handler logging through a caller-supplied sink
    #[must_use]
    pub fn with_sink(config: FaultConfig, sink: Arc<dyn LogSink>) -> Self {
        Self { config, sink }
    }

    /// Convert an uncaught fault into its response
    ///
    /// Never fails: every input maps to exactly one response, and to one
    /// log emission unless the fault is expected client traffic (401/404).
    #[must_use]
    pub fn handle(&self, fault: &Fault) -> Response {
        respond(
            fault.classify(),
            self.config.show_details,
            self.config.media_type,
            self.sink.as_ref(),
        )
    }
}

impl Default for FaultHandler {
    fn default() -> Self {
        Self::new(FaultConfig::default())
    }
}

/// Build the response for a classification: emit the log event when the
/// rules ask for one, gate detail exposure, serialize the body, and
/// assemble status plus content type.
fn respond(classification: Classification, show_details: bool, media_type: MediaType, sink: &dyn LogSink) -> Response {
    let Classification {
        status,
        message,
        detail,
        log,
    } = classification;

    if let Some(level) = log {
        sink.log(level, &message, detail.as_deref());
    }

    let details = if show_details { detail } else { None };
    let body = media_type.render(&ErrorMessage::new(status, message, details));

    (status, [(header::CONTENT_TYPE, media_type.content_type())], body).into_response()
}
