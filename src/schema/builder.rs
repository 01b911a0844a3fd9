//! Typed construction of component definitions
//!
//! The builder produces the same normalized schema that validation does, so
//! no type checks are needed when building.

use serde_json::{Map, Value};

use super::types::{Axis, CompoundRule, Cva, VariantSchema, CLASS_KEY};

/// Builds a `Cva` from typed calls.
///
/// ```
/// use cva::{Params, SchemaBuilder};
///
/// let badge = SchemaBuilder::new()
///     .base("rounded px-2")
///     .variant("tone", "info", "bg-blue-100")
///     .variant("tone", "danger", "bg-red-100")
///     .compound([("tone", "danger")], "font-bold")
///     .default_variant("tone", "info")
///     .build();
///
/// assert_eq!(badge.variants(&Params::new()).to_string(), "rounded px-2 bg-blue-100");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    base: Value,
    schema: VariantSchema,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base class value
    pub fn base(mut self, base: impl Into<Value>) -> Self {
        self.base = base.into();
        self
    }

    /// Adds a class value for `value` on `axis`.
    ///
    /// Axes keep the order of their first mention.
    pub fn variant(
        mut self,
        axis: impl Into<String>,
        value: impl Into<String>,
        class: impl Into<Value>,
    ) -> Self {
        let axis = axis.into();
        let index = match self.schema.variants.iter().position(|a| a.name() == axis) {
            Some(index) => index,
            None => {
                self.schema.variants.push(Axis::new(axis, Map::new()));
                self.schema.variants.len() - 1
            }
        };
        self.schema.variants[index].insert(value.into(), class.into());
        self
    }

    /// Adds a compound rule.
    ///
    /// A `class` entry among the conditions is dropped; `class` is reserved
    /// for the rule's own class value.
    pub fn compound<I, K, V>(mut self, conditions: I, class: impl Into<Value>) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let conditions: Map<String, Value> = conditions
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, _): &(String, Value)| k != CLASS_KEY)
            .collect();
        self.schema
            .compound_variants
            .push(CompoundRule::new(conditions, class));
        self
    }

    /// Sets the default value for `axis`
    pub fn default_variant(mut self, axis: impl Into<String>, value: impl Into<Value>) -> Self {
        self.schema
            .default_variants
            .insert(axis.into(), value.into());
        self
    }

    /// Freezes the definition.
    pub fn build(self) -> Cva {
        Cva::from_parts(self.base, self.schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_matches_validated_schema() {
        let built = SchemaBuilder::new()
            .base(json!(["px-4 py-2", "bg-red-100"]))
            .variant("size", "medium", "text-base")
            .variant("size", "small", "text-sm")
            .compound([("size", "medium")], "w-10")
            .default_variant("size", "medium")
            .build();

        let validated = Cva::new(
            json!(["px-4 py-2", "bg-red-100"]),
            json!({
                "variants": { "size": { "medium": "text-base", "small": "text-sm" } },
                "compound_variants": [{ "size": "medium", "class": "w-10" }],
                "default_variants": { "size": "medium" }
            }),
        )
        .unwrap();

        assert_eq!(built, validated);
    }

    #[test]
    fn test_axis_order_is_first_mention() {
        let cva = SchemaBuilder::new()
            .variant("size", "sm", "text-sm")
            .variant("color", "red", "text-red-100")
            .variant("size", "lg", "text-lg")
            .build();

        let names: Vec<_> = cva.schema().variants().iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["size", "color"]);
        assert_eq!(cva.schema().axis("size").unwrap().values().len(), 2);
    }

    #[test]
    fn test_class_condition_is_reserved() {
        let built = SchemaBuilder::new()
            .base("btn")
            .variant("size", "sm", "text-sm")
            .compound([("size", "sm"), ("class", "ignored")], "border")
            .build();

        let rule = &built.schema().compound_variants()[0];
        assert!(!rule.conditions().contains_key("class"));
        assert_eq!(rule.conditions().len(), 1);

        let validated = Cva::new(
            "btn",
            json!({
                "variants": { "size": { "sm": "text-sm" } },
                "compound_variants": [{ "size": "sm", "class": "border" }]
            }),
        )
        .unwrap();
        assert_eq!(built, validated);

        let params = crate::resolver::Params::new().with("size", "sm");
        assert_eq!(built.variants(&params).as_string(), "btn text-sm border");
    }

    #[test]
    fn test_empty_builder() {
        let cva = SchemaBuilder::new().build();
        assert!(cva.base().is_null());
        assert!(cva.schema().is_empty());
    }
}
