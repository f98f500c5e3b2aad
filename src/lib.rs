//! # Allomorph
//!
//! A role-composition registry. Entities (types identified by name) declare
//! named bundles of behavior — roles — acquire a role's methods without
//! inheriting from a common ancestor, and are queried at runtime for "does
//! this entity perform role R?", transitively through an inheritance graph.
//!
//! Consumers test for *behavioral compatibility* rather than lineage: two
//! unrelated entities are interchangeable when they perform the same role.
//!
//! ## Architecture
//!
//! ```text
//! Entity              ← named type: method table + declared parents
//!     │
//! Role                ← name + ordered MethodBinding snapshots
//!     │
//! RoleRegistry        ← entities, roles, and the does table
//!     │
//! ancestry            ← bounded depth-first walk over parent links
//!     │
//! universal           ← process-wide registry + free-function surface
//! ```
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use allomorph::RoleRegistry;
//! use serde_json::{json, Value};
//!
//! let mut registry = RoleRegistry::new();
//! registry.define_entity("Animal", &[]).unwrap();
//! registry
//!     .define_method("Animal", "eat", Arc::new(|_: &[Value]| json!("chomp")))
//!     .unwrap();
//! registry.declare_role("Animal", &["eat"]).unwrap();
//!
//! registry.define_entity("Dog", &[]).unwrap();
//! registry.declare_does("Dog", "Animal").unwrap();
//!
//! assert!(registry.does("Dog", "Animal").unwrap());
//! assert_eq!(registry.invoke("Dog", "eat", &[]).unwrap(), json!("chomp"));
//! ```

mod ancestry;
pub mod entity;
pub mod errors;
pub mod registry;
pub mod role;
pub mod universal;

pub use entity::{Entity, MethodFn};
pub use errors::RoleError;
pub use registry::{Declaration, RoleRegistry};
pub use role::{MethodBinding, Role};
pub use universal::Performs;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
