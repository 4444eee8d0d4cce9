use http::StatusCode;
use tracing::Level;

use crate::classify::Classification;

/// Uncaught failure raised while handling a request
///
/// Rejections raised by routing or auth layers carry the status they
/// intended for the response; anything else lands in `Unhandled`.
#[derive(Debug)]
pub enum Fault {
    /// The request failed authentication; answered 401 without logging
    Auth(anyhow::Error),
    /// The requested resource does not exist; answered 404 without logging
    NotFound(anyhow::Error),
    /// A rejection carrying any other intended status; handled as a
    /// generic server fault, the intended code is not echoed
    Status(StatusCode, anyhow::Error),
    /// Any error with no HTTP intent attached
    Unhandled(anyhow::Error),
}

impl Fault {
    /// Tag an error with the status a framework rejection asked for
    ///
    /// 401 and 404 map to their dedicated variants; other codes keep the
    /// raw status and fall through to generic fault handling.
    pub fn with_status(status: StatusCode, error: anyhow::Error) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => Self::Auth(error),
            StatusCode::NOT_FOUND => Self::NotFound(error),
            other => Self::Status(other, error),
        }
    }

    /// The underlying error
    pub fn error(&self) -> &anyhow::Error {
        match self {
            Self::Auth(error) | Self::NotFound(error) | Self::Status(_, error) | Self::Unhandled(error) => error,
        }
    }

    /// Error chain rendered for diagnostics, including a captured
    /// backtrace when one exists
    pub fn trace(&self) -> String {
        format!("{:?}", self.error())
    }

    /// Decide how this fault is answered and logged
    ///
    /// Auth and not-found rejections are expected client traffic and are
    /// answered without a log emission. Everything else is a server fault:
    /// 500, logged at ERROR with full detail.
    pub fn classify(&self) -> Classification {
        let message = self.error().to_string();
        let detail = Some(self.trace());

        match self {
            Self::Auth(_) => Classification {
                status: StatusCode::UNAUTHORIZED,
                message,
                detail,
                log: None,
            },
            Self::NotFound(_) => Classification {
                status: StatusCode::NOT_FOUND,
                message,
                detail,
                log: None,
            },
            Self::Status(..) | Self::Unhandled(_) => Classification {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message,
                detail,
                log: Some(Level::ERROR),
            },
        }
    }
}

impl From<anyhow::Error> for Fault {
    fn from(error: anyhow::Error) -> Self {
        Self::Unhandled(error)
    }
}
