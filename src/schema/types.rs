//! Variant schema types
//!
//! A registered definition is a frozen `(base, schema)` pair:
//! - base: opaque class value handed to the joiner untouched
//! - variants: ordered axes, each mapping a value key to a class value
//! - compound_variants: ordered rules matched against caller parameters
//! - default_variants: per-axis fallback used when the caller omits an axis

use serde_json::{Map, Value};

use super::errors::{json_type_name, SchemaError, SchemaResult};
use super::validator::normalize_schema;

/// Key reserved for class values in compound rules and parameter sets.
pub const CLASS_KEY: &str = "class";

/// A named dimension of style variation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Axis {
    name: String,
    values: Map<String, Value>,
}

impl Axis {
    /// Create an axis from its value table
    pub fn new(name: impl Into<String>, values: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Returns the axis name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value table in declaration order
    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    /// Returns the class value for a variant key, skipping `null` entries.
    pub fn lookup(&self, key: &str) -> Option<&Value> {
        self.values.get(key).filter(|v| !v.is_null())
    }

    pub(crate) fn insert(&mut self, key: String, class: Value) {
        self.values.insert(key, class);
    }
}

/// Classes emitted when every condition matches the caller's parameters.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompoundRule {
    conditions: Map<String, Value>,
    class: Value,
}

impl CompoundRule {
    /// Create a rule from its conditions and class value
    pub fn new(conditions: Map<String, Value>, class: impl Into<Value>) -> Self {
        Self {
            conditions,
            class: class.into(),
        }
    }

    /// Splits a raw rule object into conditions and the reserved class key.
    pub fn from_object(mut rule: Map<String, Value>) -> Self {
        let class = rule.remove(CLASS_KEY).unwrap_or(Value::Null);
        Self {
            conditions: rule,
            class,
        }
    }

    /// Returns the axis conditions (every key except `class`)
    pub fn conditions(&self) -> &Map<String, Value> {
        &self.conditions
    }

    /// Returns the class value, `null` when the rule declared none
    pub fn class(&self) -> &Value {
        &self.class
    }
}

/// Normalized variant schema.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VariantSchema {
    pub(crate) variants: Vec<Axis>,
    pub(crate) compound_variants: Vec<CompoundRule>,
    pub(crate) default_variants: Map<String, Value>,
}

impl VariantSchema {
    /// Validates and normalizes a raw schema input. `null` is the empty schema.
    pub fn from_value(input: &Value) -> SchemaResult<Self> {
        normalize_schema(input)
    }

    /// Returns the axes in declaration order
    pub fn variants(&self) -> &[Axis] {
        &self.variants
    }

    /// Returns the axis with the given name
    pub fn axis(&self, name: &str) -> Option<&Axis> {
        self.variants.iter().find(|a| a.name == name)
    }

    /// Returns the compound rules in declaration order
    pub fn compound_variants(&self) -> &[CompoundRule] {
        &self.compound_variants
    }

    /// Returns the default variant mapping
    pub fn default_variants(&self) -> &Map<String, Value> {
        &self.default_variants
    }

    /// Returns the default value for an axis
    pub fn default_for(&self, axis: &str) -> Option<&Value> {
        self.default_variants.get(axis)
    }

    /// Whether the schema declares no axes, rules or defaults
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
            && self.compound_variants.is_empty()
            && self.default_variants.is_empty()
    }
}

/// A frozen component definition: base classes plus variant schema.
///
/// Only constructed through validation; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cva {
    base: Value,
    schema: VariantSchema,
}

impl Cva {
    /// Validates `schema` and freezes it together with `base`.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::TypeMismatch` when `variants` is not an object,
    /// `compound_variants` is not an array, or `default_variants` is not an
    /// object. The first violation is reported.
    pub fn new(base: impl Into<Value>, schema: impl Into<Value>) -> SchemaResult<Self> {
        let schema = VariantSchema::from_value(&schema.into())?;
        Ok(Self {
            base: base.into(),
            schema,
        })
    }

    /// A definition with base classes only.
    pub fn base_only(base: impl Into<Value>) -> Self {
        Self {
            base: base.into(),
            schema: VariantSchema::default(),
        }
    }

    /// Builds a definition from an already normalized schema.
    pub fn from_parts(base: impl Into<Value>, schema: VariantSchema) -> Self {
        Self {
            base: base.into(),
            schema,
        }
    }

    /// Parses a definition document.
    ///
    /// The document is an object holding `base` and the schema fields side by
    /// side; a missing `base` is `null`.
    pub fn from_json_str(text: &str) -> SchemaResult<Self> {
        let document: Value = serde_json::from_str(text)
            .map_err(|e| SchemaError::malformed_definition(format!("Invalid JSON: {}", e)))?;

        let mut document = match document {
            Value::Object(map) => map,
            other => {
                return Err(SchemaError::malformed_definition(format!(
                    "expected a definition object, got {}",
                    json_type_name(&other)
                )));
            }
        };

        let base = document.remove("base").unwrap_or(Value::Null);
        Self::new(base, Value::Object(document))
    }

    /// Returns the base class value
    pub fn base(&self) -> &Value {
        &self.base
    }

    /// Returns the normalized schema
    pub fn schema(&self) -> &VariantSchema {
        &self.schema
    }
}
