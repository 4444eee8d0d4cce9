//! Axum-facing error handlers
//!
//! Turns the classifications produced by `faultline-core` into HTTP
//! responses: a handler for body codec failures and a handler for
//! arbitrary uncaught faults. Both are stateless apart from their
//! construction-time configuration and injected log sink.

mod handler;

pub use faultline_core::{Fault, FaultConfig, MediaType, PayloadConfig, PayloadError};
pub use handler::{FaultHandler, PayloadErrorHandler};
