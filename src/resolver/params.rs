//! Caller-supplied parameter sets

use serde_json::{Map, Value};

use crate::schema::CLASS_KEY;

/// Selected variant values for one resolution call.
///
/// Keys are axis names; the reserved key `class` carries extra classes that
/// are appended last. Keys are not checked against any schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    values: Map<String, Value>,
}

impl Params {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts an arbitrary value; anything but an object is the empty set.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(values) => Self { values },
            _ => Self::default(),
        }
    }

    /// Sets `key` to `value`, builder style.
    ///
    /// An explicit `null` counts as a choice: the axis default is not used.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets the extra classes, builder style
    pub fn class(self, class: impl Into<Value>) -> Self {
        self.with(CLASS_KEY, class)
    }

    /// Sets `key` to `value`, returning the previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    /// Returns the raw value for `key`
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Whether the caller supplied `key`, even as `null`
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Returns the extra classes, if supplied
    pub fn extra_class(&self) -> Option<&Value> {
        self.values.get(CLASS_KEY)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl From<Map<String, Value>> for Params {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_and_lookup() {
        let params = Params::new().with("size", "small").class("custom-extra");

        assert_eq!(params.get("size"), Some(&json!("small")));
        assert_eq!(params.extra_class(), Some(&json!("custom-extra")));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_explicit_null_is_present() {
        let params = Params::new().with("size", Value::Null);
        assert!(params.contains_key("size"));
        assert_eq!(params.get("size"), Some(&Value::Null));
    }

    #[test]
    fn test_from_value() {
        let params = Params::from_value(json!({ "size": "small", "class": ["a", "b"] }));
        assert_eq!(params.len(), 2);

        assert!(Params::from_value(json!(["size"])).is_empty());
        assert!(Params::from_value(Value::Null).is_empty());
    }

    #[test]
    fn test_from_iter() {
        let params: Params = [("size", "small"), ("color", "red")].into_iter().collect();
        assert_eq!(params.get("color"), Some(&json!("red")));
    }
}
