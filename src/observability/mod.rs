//! Observability for coverdesk
//!
//! Structured JSON logging only: one log line per event, synchronous,
//! deterministic field ordering. Logging must never affect the
//! outcome of the operation it observes.

mod logger;

pub use logger::{Logger, Severity};
