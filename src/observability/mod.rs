//! Observability infrastructure for the Slack client.
//!
//! Provides tracing spans and redacting log helpers.

pub mod logging;
pub mod tracing_utils;

pub use logging::*;
pub use tracing_utils::*;
