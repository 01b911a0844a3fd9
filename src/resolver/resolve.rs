//! Variant resolution
//!
//! Fragment order:
//! 1. base
//! 2. variant classes, one per axis, in axis declaration order
//! 3. compound classes, in rule declaration order
//! 4. the caller's extra `class`
//!
//! Resolution is pure: it reads the frozen definition and the parameters
//! and nothing else.

use std::borrow::Cow;

use serde_json::Value;

use super::params::Params;
use crate::classes::{join, ClassList};
use crate::schema::{CompoundRule, Cva, VariantSchema};

impl Cva {
    /// Resolves `params` into the final class list.
    pub fn variants(&self, params: &Params) -> ClassList {
        join(self.resolve_fragments(params))
    }

    /// Returns the ordered fragments handed to the joiner.
    pub fn resolve_fragments<'a>(&'a self, params: &'a Params) -> Vec<&'a Value> {
        let schema = self.schema();
        let mut fragments = Vec::with_capacity(
            2 + schema.variants().len() + schema.compound_variants().len(),
        );

        fragments.push(self.base());
        fragments.extend(variant_fragments(schema, params));
        fragments.extend(compound_fragments(schema, params));
        if let Some(extra) = params.extra_class() {
            fragments.push(extra);
        }

        fragments
    }
}

/// Class values selected per axis.
///
/// A supplied key wins even when its value is `null`; only an absent key
/// falls back to the axis default.
fn variant_fragments<'a>(
    schema: &'a VariantSchema,
    params: &'a Params,
) -> impl Iterator<Item = &'a Value> + 'a {
    schema.variants().iter().filter_map(move |axis| {
        let selected = if params.contains_key(axis.name()) {
            params.get(axis.name())
        } else {
            schema.default_for(axis.name())
        };
        axis.lookup(&variant_key(selected?)?)
    })
}

/// Class values of every rule whose conditions all hold in `params`.
///
/// Defaults never satisfy a condition.
fn compound_fragments<'a>(
    schema: &'a VariantSchema,
    params: &'a Params,
) -> impl Iterator<Item = &'a Value> + 'a {
    schema
        .compound_variants()
        .iter()
        .filter(move |rule| rule_matches(rule, params))
        .map(CompoundRule::class)
        .filter(|class| !class.is_null())
}

fn rule_matches(rule: &CompoundRule, params: &Params) -> bool {
    rule.conditions()
        .iter()
        .all(|(key, expected)| params.get(key) == Some(expected))
}

/// Key used to look a selected value up in an axis table.
fn variant_key(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Bool(true) => Some(Cow::Borrowed("true")),
        Value::Bool(false) => Some(Cow::Borrowed("false")),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
