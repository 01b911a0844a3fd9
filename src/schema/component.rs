//! Component composition
//!
//! A component type owns one frozen definition and resolves against it.
//! Nothing is attached implicitly; a type opts in by implementing the trait.

use super::types::Cva;
use crate::classes::ClassList;
use crate::resolver::Params;

/// A UI component with a variant definition.
///
/// ```
/// use std::sync::LazyLock;
/// use cva::{Component, Cva, Params};
/// use serde_json::json;
///
/// struct Button;
///
/// static BUTTON: LazyLock<Cva> = LazyLock::new(|| {
///     Cva::new(
///         "btn",
///         json!({ "variants": { "size": { "sm": "text-sm", "lg": "text-lg" } } }),
///     )
///     .expect("button schema")
/// });
///
/// impl Component for Button {
///     fn cva() -> &'static Cva {
///         &BUTTON
///     }
/// }
///
/// assert_eq!(Button::variants(&Params::new().with("size", "lg")).to_string(), "btn text-lg");
/// ```
pub trait Component {
    /// Returns this component's definition.
    fn cva() -> &'static Cva;

    /// Resolves the class list for `params`.
    fn variants(params: &Params) -> ClassList {
        Self::cva().variants(params)
    }
}
