//! Per-definition schema registry
//!
//! Each component definition owns exactly one frozen `Cva`, looked up by the
//! definition's identity. Registration replaces a prior entry wholesale; a
//! rejected registration leaves the prior entry in place.
//!
//! Registration takes `&mut self`, so it always happens-before any
//! resolution that borrows the registry.

use std::any::type_name;
use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use super::errors::{SchemaError, SchemaResult};
use super::types::Cva;
use crate::classes::ClassList;
use crate::observability::{log_event_with_fields, Event};
use crate::resolver::Params;

/// Registry of component definitions keyed by definition name.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    definitions: HashMap<String, Arc<Cva>>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and registers a definition under `name`.
    ///
    /// Replaces any existing definition for `name`. On error nothing is
    /// stored and the previous definition, if any, stays registered.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        base: impl Into<Value>,
        schema: impl Into<Value>,
    ) -> SchemaResult<Arc<Cva>> {
        let name = name.into();
        match Cva::new(base, schema) {
            Ok(cva) => Ok(self.insert(name, cva)),
            Err(e) => {
                log_rejection(&name, &e);
                Err(e)
            }
        }
    }

    /// Registers a definition keyed by the Rust type `T`.
    pub fn register_for<T: ?Sized>(
        &mut self,
        base: impl Into<Value>,
        schema: impl Into<Value>,
    ) -> SchemaResult<Arc<Cva>> {
        self.register(type_name::<T>(), base, schema)
    }

    /// Parses and registers a definition document under `name`.
    pub fn register_json(&mut self, name: impl Into<String>, text: &str) -> SchemaResult<Arc<Cva>> {
        let name = name.into();
        match Cva::from_json_str(text) {
            Ok(cva) => Ok(self.insert(name, cva)),
            Err(e) => {
                log_rejection(&name, &e);
                Err(e)
            }
        }
    }

    /// Stores an already validated definition, replacing any prior one.
    pub fn insert(&mut self, name: impl Into<String>, cva: Cva) -> Arc<Cva> {
        let name = name.into();
        let axes = cva.schema().variants().len().to_string();
        let rules = cva.schema().compound_variants().len().to_string();
        let defaults = cva.schema().default_variants().len().to_string();

        let cva = Arc::new(cva);
        let event = match self.definitions.insert(name.clone(), Arc::clone(&cva)) {
            Some(_) => Event::SchemaReplaced,
            None => Event::SchemaRegistered,
        };

        log_event_with_fields(
            event,
            &[
                ("axes", axes.as_str()),
                ("compound_rules", rules.as_str()),
                ("default_variants", defaults.as_str()),
                ("definition", name.as_str()),
            ],
        );

        cva
    }

    /// Gets the definition registered under `name`.
    pub fn get(&self, name: &str) -> Option<&Arc<Cva>> {
        self.definitions.get(name)
    }

    /// Gets the definition registered for the Rust type `T`.
    pub fn get_for<T: ?Sized>(&self) -> Option<&Arc<Cva>> {
        self.get(type_name::<T>())
    }

    /// Checks if a definition exists.
    pub fn contains(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// Removes a definition, returning it.
    pub fn remove(&mut self, name: &str) -> Option<Arc<Cva>> {
        self.definitions.remove(name)
    }

    /// Resolves `params` against the definition registered under `name`.
    ///
    /// Returns `None` when no such definition exists.
    pub fn variants(&self, name: &str, params: &Params) -> Option<ClassList> {
        self.get(name).map(|cva| cva.variants(params))
    }

    /// Returns all definition names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.definitions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether no definitions are registered.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

fn log_rejection(name: &str, error: &SchemaError) {
    let reason = error.to_string();
    log_event_with_fields(
        Event::SchemaRejected,
        &[
            ("code", error.code()),
            ("definition", name),
            ("reason", reason.as_str()),
        ],
    );
}
