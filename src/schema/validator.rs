//! Schema validation and normalization
//!
//! Validation semantics:
//! - `null` schema input is the empty schema
//! - `variants` must be an object when present
//! - `compound_variants` must be an array when present
//! - `default_variants` must be an object when present
//! - Checks run in that order; the first violation is reported
//!
//! Normalization never fails once the container types are valid. Entries
//! that cannot contribute classes are kept inert and reported as warnings.

use serde_json::{Map, Value};

use super::errors::{json_type_name, ContainerKind, SchemaError, SchemaField, SchemaResult};
use super::types::{Axis, CompoundRule, VariantSchema};
use crate::observability::{log_event_with_fields, Event};

/// Validates a raw schema input and converts it into a `VariantSchema`.
pub(crate) fn normalize_schema(input: &Value) -> SchemaResult<VariantSchema> {
    let schema = match input {
        Value::Null => return Ok(VariantSchema::default()),
        Value::Object(map) => map,
        other => {
            return Err(SchemaError::type_mismatch(
                SchemaField::Schema,
                ContainerKind::Object,
                other,
            ))
        }
    };

    let variants = checked_field(schema, SchemaField::Variants, ContainerKind::Object)?;
    let compound_variants =
        checked_field(schema, SchemaField::CompoundVariants, ContainerKind::Array)?;
    let default_variants =
        checked_field(schema, SchemaField::DefaultVariants, ContainerKind::Object)?;

    let normalized = VariantSchema {
        variants: variants
            .and_then(Value::as_object)
            .map(normalize_axes)
            .unwrap_or_default(),
        compound_variants: compound_variants
            .and_then(Value::as_array)
            .map(|rules| normalize_rules(rules))
            .unwrap_or_default(),
        default_variants: default_variants
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default(),
    };

    Ok(normalized)
}

/// Returns the field value when it is absent-or-null or of the expected kind.
fn checked_field<'a>(
    schema: &'a Map<String, Value>,
    field: SchemaField,
    expected: ContainerKind,
) -> SchemaResult<Option<&'a Value>> {
    match schema.get(field.as_str()) {
        None | Some(Value::Null) => Ok(None),
        Some(value) if expected.matches(value) => Ok(Some(value)),
        Some(value) => Err(SchemaError::type_mismatch(field, expected, value)),
    }
}

fn normalize_axes(variants: &Map<String, Value>) -> Vec<Axis> {
    variants
        .iter()
        .map(|(name, table)| match table {
            Value::Object(values) => Axis::new(name.clone(), values.clone()),
            Value::Null => Axis::new(name.clone(), Map::new()),
            other => {
                log_event_with_fields(
                    Event::AxisTableIgnored,
                    &[("axis", name.as_str()), ("actual", json_type_name(other))],
                );
                Axis::new(name.clone(), Map::new())
            }
        })
        .collect()
}

fn normalize_rules(rules: &[Value]) -> Vec<CompoundRule> {
    let mut normalized = Vec::with_capacity(rules.len());

    for (i, rule) in rules.iter().enumerate() {
        match rule {
            Value::Object(map) => normalized.push(CompoundRule::from_object(map.clone())),
            other => {
                let index = i.to_string();
                log_event_with_fields(
                    Event::CompoundRuleIgnored,
                    &[("index", index.as_str()), ("actual", json_type_name(other))],
                );
            }
        }
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn expect_mismatch(input: Value, field: SchemaField) {
        let err = normalize_schema(&input).unwrap_err();
        assert_eq!(err.field(), Some(field), "input: {}", input);
    }

    #[test]
    fn test_null_and_empty_are_empty() {
        assert!(normalize_schema(&Value::Null).unwrap().is_empty());
        assert!(normalize_schema(&json!({})).unwrap().is_empty());
    }

    #[test]
    fn test_null_fields_are_empty() {
        let schema = normalize_schema(&json!({
            "variants": null,
            "compound_variants": null,
            "default_variants": null
        }))
        .unwrap();
        assert!(schema.is_empty());
    }

    #[test]
    fn test_invalid_field_types() {
        expect_mismatch(json!({ "variants": [] }), SchemaField::Variants);
        expect_mismatch(json!({ "compound_variants": {} }), SchemaField::CompoundVariants);
        expect_mismatch(json!({ "default_variants": [] }), SchemaField::DefaultVariants);
        expect_mismatch(json!({ "variants": "size" }), SchemaField::Variants);
        expect_mismatch(json!({ "default_variants": 1 }), SchemaField::DefaultVariants);
    }

    #[test]
    fn test_first_violation_reported() {
        expect_mismatch(
            json!({ "variants": [], "compound_variants": {} }),
            SchemaField::Variants,
        );
        expect_mismatch(
            json!({ "variants": {}, "default_variants": [] }),
            SchemaField::DefaultVariants,
        );
        expect_mismatch(
            json!({ "compound_variants": {}, "default_variants": [] }),
            SchemaField::CompoundVariants,
        );
    }

    #[test]
    fn test_non_object_schema_rejected() {
        expect_mismatch(json!([]), SchemaField::Schema);
        expect_mismatch(json!("variants"), SchemaField::Schema);
    }

    #[test]
    fn test_mismatch_reports_actual_type() {
        let err = normalize_schema(&json!({ "variants": [] })).unwrap_err();
        match err {
            SchemaError::TypeMismatch {
                field,
                expected,
                actual,
            } => {
                assert_eq!(field, SchemaField::Variants);
                assert_eq!(expected, ContainerKind::Object);
                assert_eq!(actual, "array");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_axis_order_preserved() {
        let schema = normalize_schema(&json!({
            "variants": {
                "size": { "sm": "text-sm" },
                "color": { "red": "text-red-100" },
                "align": { "left": "text-left" }
            }
        }))
        .unwrap();

        let names: Vec<_> = schema.variants().iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["size", "color", "align"]);
    }

    #[test]
    fn test_non_object_axis_table_is_inert() {
        let schema = normalize_schema(&json!({
            "variants": { "size": "text-sm", "color": { "red": "text-red-100" } }
        }))
        .unwrap();

        assert_eq!(schema.variants().len(), 2);
        assert!(schema.axis("size").unwrap().values().is_empty());
        assert!(schema.axis("color").unwrap().lookup("red").is_some());
    }

    #[test]
    fn test_non_object_rules_skipped() {
        let schema = normalize_schema(&json!({
            "compound_variants": ["oops", { "size": "sm", "class": "w-8" }, 3]
        }))
        .unwrap();

        assert_eq!(schema.compound_variants().len(), 1);
        assert_eq!(schema.compound_variants()[0].class(), &json!("w-8"));
    }

    #[test]
    fn test_unknown_top_level_keys_ignored() {
        let schema = normalize_schema(&json!({ "slots": { "icon": "h-4" } })).unwrap();
        assert!(schema.is_empty());
    }
}
