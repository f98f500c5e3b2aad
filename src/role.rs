//! Role model — named, ordered bundles of method bindings.
//!
//! A role is the unit of reusable behavior: a name plus the list of method
//! bindings snapshotted from whichever entity declared it. Binding order is
//! insertion order; it matters only for reproducible installation, since
//! installation is idempotent per method name.

use std::sync::Arc;

use crate::entity::MethodFn;

/// A (method name, implementation) pair captured at declaration time.
///
/// The implementation is a snapshot: redefining the declaring entity's
/// method afterwards does not change what this binding installs.
#[derive(Clone)]
pub struct MethodBinding {
    /// Method name under which the implementation installs.
    pub name: String,

    /// The captured implementation.
    pub implementation: MethodFn,
}

impl MethodBinding {
    /// Capture a binding from a method name and implementation.
    pub fn new(name: impl Into<String>, implementation: &MethodFn) -> Self {
        Self {
            name: name.into(),
            implementation: Arc::clone(implementation),
        }
    }
}

impl std::fmt::Debug for MethodBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MethodBinding")
            .field("name", &self.name)
            .finish()
    }
}

/// A named bundle of method bindings.
///
/// By default a role's name is the declaring entity's name; `multi`
/// declarations are the one path that keys a role by an independent label.
#[derive(Debug, Clone, Default)]
pub struct Role {
    /// Bindings in insertion order.
    bindings: Vec<MethodBinding>,
}

impl Role {
    /// Create an empty role.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a binding. The registry only grows: bindings are never pruned.
    pub fn push(&mut self, binding: MethodBinding) {
        self.bindings.push(binding);
    }

    /// Bindings in insertion order.
    pub fn bindings(&self) -> &[MethodBinding] {
        &self.bindings
    }

    /// Method names exported by this role, in insertion order.
    pub fn method_names(&self) -> Vec<&str> {
        self.bindings.iter().map(|b| b.name.as_str()).collect()
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the role has no bindings yet.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
