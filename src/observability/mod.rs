//! Observability subsystem for cva
//!
//! Structured JSON logging for registration-time events. Resolution is never
//! logged; it stays a pure function of the definition and parameters.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on resolution
//! 3. No async or background threads
//! 4. Deterministic output
//!
//! # Usage
//!
//! ```
//! use cva::observability::{log_event_with_fields, Event, LogTarget, Logger, Severity};
//!
//! Logger::set_min_severity(Severity::Info);
//! Logger::set_target(LogTarget::Stdout);
//! assert!(Logger::enabled(Event::SchemaRegistered.severity()));
//!
//! log_event_with_fields(Event::SchemaRegistered, &[("definition", "button")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{LogTarget, Logger, Severity};

#[cfg(test)]
pub(crate) use logger::capture_events;

/// Log an event at its own severity
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log an event with fields at its own severity
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
