//! Observability for shoe card rendering.
//!
//! This crate provides:
//! - `RenderId` - Correlation ID shared by every log line of one render run
//! - `StructuredLogger` - Structured logging in JSON or human format
//! - `LogBuilder` - Fluent typed fields for a single entry

mod id;
mod logging;

pub use id::*;
pub use logging::*;
