use http::StatusCode;
use thiserror::Error;
use tracing::Level;

use crate::classify::Classification;

/// Message prefix a codec emits when a target type cannot be constructed
/// during deserialization. A server-side defect, not bad input.
const MISSING_CONSTRUCTOR_PREFIX: &str = "No suitable constructor found";

/// Failure while encoding or decoding a structured request or response body
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The service failed to serialize its own response
    #[error("error generating response body")]
    Generate(#[source] serde_json::Error),

    /// The inbound request body could not be deserialized
    #[error("{message}")]
    Parse {
        /// Codec error text
        message: String,
        /// Underlying codec failure, when one exists
        #[source]
        source: Option<serde_json::Error>,
    },
}

impl PayloadError {
    /// Wrap a serialization failure raised while writing a response
    pub fn generate(source: serde_json::Error) -> Self {
        Self::Generate(source)
    }

    /// Wrap a deserialization failure from the request body
    pub fn parse(source: serde_json::Error) -> Self {
        Self::Parse {
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// Build a parse failure from bare message text, e.g. a framework
    /// rejection that already rendered its codec error
    pub fn parse_message(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            source: None,
        }
    }

    /// Original codec error text
    pub fn detail(&self) -> String {
        match self {
            Self::Generate(source) => source.to_string(),
            Self::Parse { message, .. } => message.clone(),
        }
    }

    /// Decide how this failure is answered and logged
    ///
    /// Generation failures and missing-constructor deserialization
    /// failures are server faults; everything else is bad client input.
    /// Total: every value classifies, including an empty message.
    pub fn classify(&self) -> Classification {
        match self {
            Self::Generate(_) => Classification {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Error generating JSON".to_owned(),
                detail: Some(self.detail()),
                log: Some(Level::WARN),
            },
            Self::Parse { message, .. } if message.starts_with(MISSING_CONSTRUCTOR_PREFIX) => Classification {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Unable to deserialize the specific type".to_owned(),
                detail: Some(message.clone()),
                log: Some(Level::ERROR),
            },
            Self::Parse { message, .. } => Classification {
                status: StatusCode::BAD_REQUEST,
                message: "Unable to process JSON".to_owned(),
                detail: Some(message.clone()),
                log: Some(Level::DEBUG),
            },
        }
    }
}
