//! Schema store for component definitions
//!
//! A definition is registered once, validated, and frozen as a `Cva`.
//!
//! # Design Principles
//!
//! - Validation happens at registration, never at resolution
//! - The first type violation is reported; nothing partial is stored
//! - Definitions are immutable; re-registration replaces wholesale
//! - Axis and rule order follow declaration order

mod builder;
mod component;
mod errors;
mod registry;
mod types;
mod validator;

pub use builder::SchemaBuilder;
pub use component::Component;
pub use errors::{ContainerKind, SchemaError, SchemaField, SchemaResult};
pub use registry::SchemaRegistry;
pub use types::{Axis, CompoundRule, Cva, VariantSchema, CLASS_KEY};
