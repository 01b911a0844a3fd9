//! Fragment flattening and joining

use serde_json::Value;

use super::list::ClassList;

/// Joins a sequence of class fragments into one class list.
pub fn join<'a, I>(fragments: I) -> ClassList
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut list = ClassList::new();
    for fragment in fragments {
        collect(fragment, &mut list);
    }
    list
}

/// Joins a single (possibly nested) fragment.
pub fn join_value(fragment: &Value) -> ClassList {
    join(std::iter::once(fragment))
}

fn collect(fragment: &Value, list: &mut ClassList) {
    match fragment {
        Value::Null | Value::Bool(_) => {}
        Value::String(s) => {
            for token in s.split_whitespace() {
                list.push(token);
            }
        }
        Value::Number(n) => {
            list.push(&n.to_string());
        }
        Value::Array(items) => {
            for item in items {
                collect(item, list);
            }
        }
        Value::Object(map) => {
            for (class, enabled) in map {
                if is_truthy(enabled) {
                    for token in class.split_whitespace() {
                        list.push(token);
                    }
                }
            }
        }
    }
}

/// Only `null` and `false` are falsy.
fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Bool(false))
}
