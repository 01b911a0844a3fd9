//! Class-name joining
//!
//! Turns an arbitrary nesting of class fragments into one ordered,
//! deduplicated, space-separated class list.
//!
//! # Fragment rules
//!
//! - Arrays are flattened recursively
//! - `null`, `false` and `true` contribute nothing
//! - Strings are split on whitespace
//! - Numbers are kept in their JSON display form, zero included
//! - Objects contribute every key whose value is truthy
//! - First occurrence wins; order is stable

mod joiner;
mod list;

pub use joiner::{join, join_value};
pub use list::ClassList;
