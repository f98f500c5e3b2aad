//! Process-wide declaration and query surface.
//!
//! The capability predicate has to be reachable for *every* entity in the
//! process without each entity opting in. Instead of patching a universal
//! base type, a single process-wide [`RoleRegistry`] sits behind these free
//! functions, and the [`Performs`] trait lets any host value that resolves
//! to an entity name be queried directly.
//!
//! The global registry is created empty at process start and is never torn
//! down; [`reset`] exists for tests only.

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde_json::Value;

use crate::entity::MethodFn;
use crate::errors::RoleError;
use crate::registry::{Declaration, RoleRegistry};

/// The process-wide role registry.
static REGISTRY: Lazy<RwLock<RoleRegistry>> = Lazy::new(|| RwLock::new(RoleRegistry::new()));

/// Run a closure against the process-wide registry (read access).
pub fn with_registry<T>(f: impl FnOnce(&RoleRegistry) -> T) -> T {
    f(&REGISTRY.read())
}

/// Run a closure against the process-wide registry (write access).
pub fn with_registry_mut<T>(f: impl FnOnce(&mut RoleRegistry) -> T) -> T {
    f(&mut REGISTRY.write())
}

/// Define an entity in the process-wide registry.
pub fn define_entity(name: &str, parents: &[&str]) -> Result<(), RoleError> {
    REGISTRY.write().define_entity(name, parents)
}

/// Define (or redefine) a method on an entity in the process-wide registry.
pub fn define_method(entity: &str, method: &str, implementation: MethodFn) -> Result<(), RoleError> {
    REGISTRY.write().define_method(entity, method, implementation)
}

/// Register a role keyed by the declaring entity's own name.
pub fn role(entity: &str, methods: &[&str]) -> Result<(), RoleError> {
    REGISTRY.write().declare_role(entity, methods)
}

/// Register one independently named role per (label, methods) pair.
pub fn multi(entity: &str, pairs: &[(&str, &[&str])]) -> Result<(), RoleError> {
    REGISTRY.write().declare_multi(entity, pairs)
}

/// Declare that an entity performs the named role, installing its methods.
pub fn declare_does(performer: &str, role_name: &str) -> Result<(), RoleError> {
    REGISTRY.write().declare_does(performer, role_name)
}

/// Apply a labelled [`Declaration`] on behalf of an entity.
pub fn apply(entity: &str, declaration: &Declaration) -> Result<(), RoleError> {
    REGISTRY.write().apply(entity, declaration)
}

/// Transitive capability predicate over the process-wide registry.
///
/// Identical semantics to [`RoleRegistry::does`]; usable with any entity
/// name, whether or not the entity ever declared anything.
pub fn does(invocant: &str, role_name: &str) -> Result<bool, RoleError> {
    REGISTRY.read().does(invocant, role_name)
}

/// Invoke a method on an entity in the process-wide registry.
pub fn invoke(entity: &str, method: &str, args: &[Value]) -> Result<Value, RoleError> {
    REGISTRY.read().invoke(entity, method, args)
}

/// Clear the process-wide registry. Returns the number of roles cleared.
///
/// Test support only; production registries are monotonic for the life of
/// the process.
pub fn reset() -> usize {
    let mut registry = REGISTRY.write();
    let count = registry.len();
    *registry = RoleRegistry::new();
    count
}

// ---------------------------------------------------------------------------
// Performs
// ---------------------------------------------------------------------------

/// Instance-bound capability queries against the process-wide registry.
///
/// Implement `entity_name` for any host value; the provided `does` then
/// answers with exactly the semantics of the free-function predicate.
pub trait Performs {
    /// The entity name this value resolves to.
    fn entity_name(&self) -> &str;

    /// Whether this value's entity performs the named role, transitively.
    fn does(&self, role_name: &str) -> Result<bool, RoleError> {
        does(self.entity_name(), role_name)
    }
}
