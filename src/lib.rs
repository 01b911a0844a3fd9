//! cva - declarative class-variance resolution for UI components
//!
//! A component definition declares its base classes, variant axes, compound
//! rules and default variants once. Each render then resolves a parameter set
//! into one deterministic, deduplicated class string.
//!
//! ```
//! use cva::{Cva, Params};
//! use serde_json::json;
//!
//! let button = Cva::new(
//!     json!(["px-4 py-2", "bg-red-100"]),
//!     json!({
//!         "variants": { "size": { "medium": "text-base", "small": "text-sm" } },
//!         "compound_variants": [{ "size": "medium", "class": "w-10" }],
//!         "default_variants": { "size": "small" }
//!     }),
//! )
//! .unwrap();
//!
//! let classes = button.variants(&Params::new().with("size", "medium"));
//! assert_eq!(classes.to_string(), "px-4 py-2 bg-red-100 text-base w-10");
//! ```

pub mod classes;
pub mod config;
pub mod observability;
pub mod resolver;
pub mod schema;

pub use classes::{join, ClassList};
pub use config::{Config, ConfigError, ConfigResult, LogTarget};
pub use resolver::Params;
pub use schema::{
    Axis, Component, CompoundRule, ContainerKind, Cva, SchemaBuilder, SchemaError,
    SchemaField, SchemaRegistry, SchemaResult, VariantSchema,
};
