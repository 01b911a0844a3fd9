//! Observable events
//!
//! Events are explicit and typed. Each carries its own severity.

use std::fmt;

use super::logger::Severity;

/// Observable events in cva
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Registration
    /// A definition was registered under a new name
    SchemaRegistered,
    /// A definition replaced an existing one
    SchemaReplaced,
    /// A definition failed validation and was not stored
    SchemaRejected,

    // Normalization
    /// An axis table was not an object and contributes nothing
    AxisTableIgnored,
    /// A compound rule was not an object and was dropped
    CompoundRuleIgnored,

    // Configuration
    /// Configuration loaded and applied
    ConfigLoaded,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::SchemaRegistered => "CVA_SCHEMA_REGISTERED",
            Event::SchemaReplaced => "CVA_SCHEMA_REPLACED",
            Event::SchemaRejected => "CVA_SCHEMA_REJECTED",
            Event::AxisTableIgnored => "CVA_AXIS_TABLE_IGNORED",
            Event::CompoundRuleIgnored => "CVA_COMPOUND_RULE_IGNORED",
            Event::ConfigLoaded => "CVA_CONFIG_LOADED",
        }
    }

    /// Returns the severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::SchemaRegistered | Event::SchemaReplaced | Event::ConfigLoaded => Severity::Info,
            Event::SchemaRejected | Event::AxisTableIgnored | Event::CompoundRuleIgnored => {
                Severity::Warn
            }
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
