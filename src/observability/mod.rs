//! Observability subsystem for kardex
//!
//! Structured logging and counter metrics for catalog operations.
//!
//! # Principles
//!
//! 1. Observability is read-only; no side effects on execution
//! 2. No async or background threads
//! 3. Deterministic output (sorted fields, typed events)
//! 4. One log line = one event

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
