//! Schema registration errors
//!
//! Error codes:
//! - CVA_SCHEMA_TYPE_MISMATCH
//! - CVA_MALFORMED_DEFINITION
//!
//! Both are programmer errors raised at registration time. Resolution
//! never fails.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Schema fields that are type-checked at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaField {
    /// The schema input as a whole
    Schema,
    /// Axis name to value table mapping
    Variants,
    /// Ordered compound rules
    CompoundVariants,
    /// Axis name to default value mapping
    DefaultVariants,
}

impl SchemaField {
    /// Returns the key this field is read from
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaField::Schema => "schema",
            SchemaField::Variants => "variants",
            SchemaField::CompoundVariants => "compound_variants",
            SchemaField::DefaultVariants => "default_variants",
        }
    }
}

impl fmt::Display for SchemaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Container type a schema field must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// JSON object (mapping)
    Object,
    /// JSON array (sequence)
    Array,
}

impl ContainerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerKind::Object => "object",
            ContainerKind::Array => "array",
        }
    }

    /// Whether `value` is of this container kind.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            ContainerKind::Object => value.is_object(),
            ContainerKind::Array => value.is_array(),
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Schema error raised when registering a component definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A schema field is present but of the wrong container type
    #[error(
        "schema field '{field}': expected {expected}, got {actual}. \
         Please ensure the schema {field} is properly formatted"
    )]
    TypeMismatch {
        field: SchemaField,
        expected: ContainerKind,
        actual: &'static str,
    },

    /// A definition document could not be parsed
    #[error("malformed definition: {0}")]
    MalformedDefinition(String),
}

impl SchemaError {
    /// Create a type mismatch error for `field`
    pub fn type_mismatch(field: SchemaField, expected: ContainerKind, actual: &Value) -> Self {
        SchemaError::TypeMismatch {
            field,
            expected,
            actual: json_type_name(actual),
        }
    }

    /// Create an error for an unparseable definition document
    pub fn malformed_definition(reason: impl Into<String>) -> Self {
        SchemaError::MalformedDefinition(reason.into())
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaError::TypeMismatch { .. } => "CVA_SCHEMA_TYPE_MISMATCH",
            SchemaError::MalformedDefinition(_) => "CVA_MALFORMED_DEFINITION",
        }
    }

    /// Returns the offending field, if the error names one
    pub fn field(&self) -> Option<SchemaField> {
        match self {
            SchemaError::TypeMismatch { field, .. } => Some(*field),
            SchemaError::MalformedDefinition(_) => None,
        }
    }
}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Returns the JSON type name for error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
