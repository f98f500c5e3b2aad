//! Entity model — named types with explicit method tables.
//!
//! An entity stands in for a host-language class: it is identified by its
//! name, owns a mutable mapping from method name to implementation, and
//! carries an ordered list of parent entity names. The method table is the
//! explicit data-structure rendition of a dispatch namespace: installing a
//! role method is a plain conditional insert, and invoking a method is a
//! plain lookup-and-call.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::errors::RoleError;

/// A method implementation: a shared callable over JSON values.
///
/// Methods receive positional arguments and return a single value. `Arc`
/// because the same implementation is shared between its owning entity,
/// any role that snapshotted it, and any performer it was installed into.
pub type MethodFn = Arc<dyn Fn(&[Value]) -> Value + Send + Sync>;

/// A named type with an explicit method table and declared parents.
///
/// Entities are created through the registry (the stand-in for the host's
/// type-declaration mechanism) and referenced by name everywhere else.
#[derive(Clone)]
pub struct Entity {
    /// Unique entity name; identity throughout the system.
    name: String,

    /// Ordered parent entity names, as declared.
    parents: Vec<String>,

    /// Directly dispatchable methods, by name.
    methods: HashMap<String, MethodFn>,
}

impl Entity {
    /// Create an entity with the given name and declared parents.
    pub fn new(name: impl Into<String>, parents: Vec<String>) -> Self {
        Self {
            name: name.into(),
            parents,
            methods: HashMap::new(),
        }
    }

    /// The entity's unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared parents, in declaration order.
    pub fn parents(&self) -> &[String] {
        &self.parents
    }

    /// Define (or redefine) one of the entity's own methods.
    ///
    /// Redefinition replaces the table entry only; roles that already
    /// snapshotted the previous implementation keep it.
    pub fn define_method(&mut self, name: impl Into<String>, implementation: MethodFn) {
        self.methods.insert(name.into(), implementation);
    }

    /// Whether the entity directly defines a method of this name.
    pub fn has_method(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Look up a method implementation by name.
    pub fn method(&self, name: &str) -> Option<&MethodFn> {
        self.methods.get(name)
    }

    /// Install a method only if the entity does not already define one of
    /// that name. Returns `true` if the method was installed.
    ///
    /// First definition wins: the entity's own method, or one installed by
    /// an earlier-processed role, is never overwritten.
    pub fn install_if_absent(&mut self, name: &str, implementation: &MethodFn) -> bool {
        if self.methods.contains_key(name) {
            return false;
        }
        self.methods
            .insert(name.to_string(), Arc::clone(implementation));
        true
    }

    /// Invoke one of the entity's methods by name.
    ///
    /// This is the host-dispatch stand-in: it decides nothing about role
    /// performance, it only calls whatever the method table currently holds.
    pub fn invoke(&self, name: &str, args: &[Value]) -> Result<Value, RoleError> {
        let implementation = self.methods.get(name).ok_or_else(|| {
            RoleError::MethodNotFound {
                entity: self.name.clone(),
                method: name.to_string(),
            }
        })?;
        Ok(implementation(args))
    }

    /// Names of all directly dispatchable methods, sorted for stable output.
    pub fn method_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.methods.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("name", &self.name)
            .field("parents", &self.parents)
            .field("methods", &self.method_names())
            .finish()
    }
}
