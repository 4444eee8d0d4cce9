//! Classification of request-handling failures into structured error
//! responses
//!
//! Framework-free core: the types here decide status codes, caller-visible
//! messages, diagnostic detail, and log levels. The `faultline-axum` crate
//! turns the result into actual HTTP responses.

#![allow(clippy::must_use_candidate)]

mod classify;
mod config;
mod fault;
mod media;
mod message;
mod payload;
mod sink;

pub use classify::Classification;
pub use config::{FaultConfig, PayloadConfig};
pub use fault::Fault;
pub use media::MediaType;
pub use message::ErrorMessage;
pub use payload::PayloadError;
pub use sink::{LogRecord, LogSink, MemorySink, TracingSink};
