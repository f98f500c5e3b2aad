//! Role registry — declaration surface and capability query.
//!
//! The registry owns three tables:
//! 1. Entities, by name (the stand-in for the host's type declarations).
//! 2. Roles: role name to ordered method bindings. Populated by `role` and
//!    `multi` declarations and never pruned.
//! 3. The does table: entity name to the set of role names it explicitly
//!    declared performance of. Distinct from *transitive* performance,
//!    which is computed by the query, never stored.
//!
//! Registries are plain objects so tests construct fresh instances; the
//! process-wide instance lives in [`crate::universal`].

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use crate::ancestry;
use crate::entity::{Entity, MethodFn};
use crate::errors::RoleError;
use crate::role::{MethodBinding, Role};

// ---------------------------------------------------------------------------
// Declaration
// ---------------------------------------------------------------------------

/// A declaration recognized by label, as supplied at entity-definition time.
///
/// Mirrors the import-list surface a host's module loader hands over:
///
/// ```json
/// { "role": ["eat", "sleep"] }
/// { "multi": { "car": ["drive"], "plane": ["fly"] } }
/// { "does": "Animal" }
/// ```
///
/// Scalar values normalize to single-element lists. `multi` preserves the
/// document order of its labels, which fixes role processing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    /// Register a role keyed by the declaring entity's own name.
    Role(Vec<String>),
    /// Register one role per (label, methods) pair, keyed by the label.
    Multi(Vec<(String, Vec<String>)>),
    /// Declare performance of the named role(s), installing their methods.
    Does(Vec<String>),
}

/// A string or a list of strings, normalized to a list.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    fn into_vec(self) -> Vec<String> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

/// Ordered (label, methods) pairs for `multi`, kept in document order.
struct MultiPairs(Vec<(String, Vec<String>)>);

impl<'de> Deserialize<'de> for MultiPairs {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PairsVisitor;

        impl<'de> Visitor<'de> for PairsVisitor {
            type Value = MultiPairs;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from role label to method name(s)")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut pairs = Vec::new();
                while let Some((label, methods)) = map.next_entry::<String, OneOrMany>()? {
                    pairs.push((label, methods.into_vec()));
                }
                Ok(MultiPairs(pairs))
            }
        }

        deserializer.deserialize_map(PairsVisitor)
    }
}

impl<'de> Deserialize<'de> for Declaration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DeclarationVisitor;

        impl<'de> Visitor<'de> for DeclarationVisitor {
            type Value = Declaration;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a single-entry map labelled `role`, `multi`, or `does`")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let Some(label) = map.next_key::<String>()? else {
                    return Err(de::Error::invalid_length(0, &self));
                };
                let declaration = match label.as_str() {
                    "role" => Declaration::Role(map.next_value::<OneOrMany>()?.into_vec()),
                    "multi" => Declaration::Multi(map.next_value::<MultiPairs>()?.0),
                    "does" => Declaration::Does(map.next_value::<OneOrMany>()?.into_vec()),
                    other => {
                        return Err(de::Error::unknown_field(
                            other,
                            &["role", "multi", "does"],
                        ))
                    }
                };
                if map.next_key::<String>()?.is_some() {
                    return Err(de::Error::custom(
                        "declaration must contain exactly one label",
                    ));
                }
                Ok(declaration)
            }
        }

        deserializer.deserialize_map(DeclarationVisitor)
    }
}

// ---------------------------------------------------------------------------
// RoleRegistry
// ---------------------------------------------------------------------------

/// Registry of entities, roles, and explicit does relations.
///
/// Constructed empty; all three tables only grow. There is no unregister
/// operation — the tables persist for the registry's lifetime.
#[derive(Debug, Default)]
pub struct RoleRegistry {
    /// Entities indexed by name.
    entities: HashMap<String, Entity>,

    /// Roles indexed by role name.
    roles: HashMap<String, Role>,

    /// Explicitly declared role performance, per entity.
    does: HashMap<String, HashSet<String>>,
}

impl RoleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    // -- entity surface (host type-declaration stand-in) --------------------

    /// Define an entity with the given declared parents.
    pub fn define_entity(&mut self, name: &str, parents: &[&str]) -> Result<(), RoleError> {
        if self.entities.contains_key(name) {
            return Err(RoleError::DuplicateEntity {
                name: name.to_string(),
            });
        }
        let parents = parents.iter().map(|p| p.to_string()).collect();
        self.entities
            .insert(name.to_string(), Entity::new(name, parents));
        Ok(())
    }

    /// Define (or redefine) a method on an entity's own method table.
    ///
    /// Redefinition does not reach back into roles that already snapshotted
    /// the previous implementation.
    pub fn define_method(
        &mut self,
        entity: &str,
        method: &str,
        implementation: MethodFn,
    ) -> Result<(), RoleError> {
        let entity = self.entities.get_mut(entity).ok_or_else(|| {
            RoleError::UnknownEntity {
                name: entity.to_string(),
            }
        })?;
        entity.define_method(method, implementation);
        Ok(())
    }

    /// Look up an entity by name.
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.get(name)
    }

    /// Invoke a method on an entity, dispatching through its method table.
    pub fn invoke(&self, entity: &str, method: &str, args: &[serde_json::Value])
        -> Result<serde_json::Value, RoleError> {
        let entity = self.entities.get(entity).ok_or_else(|| {
            RoleError::UnknownEntity {
                name: entity.to_string(),
            }
        })?;
        entity.invoke(method, args)
    }

    // -- declaration surface ------------------------------------------------

    /// Register a role keyed by the declaring entity's own name.
    ///
    /// Each named method is snapshotted from the entity's current method
    /// table and appended to the role's binding list. Fails fast with
    /// [`RoleError::MethodNotFound`] if the entity lacks any named method;
    /// on error, no bindings are appended.
    pub fn declare_role(&mut self, entity: &str, methods: &[&str]) -> Result<(), RoleError> {
        self.declare_role_keyed(entity, entity, methods)
    }

    /// Register one independently named role per (label, methods) pair.
    ///
    /// The one path by which a role's registry key differs from its
    /// declaring entity's name. Labels are processed in the order given.
    pub fn declare_multi(
        &mut self,
        entity: &str,
        pairs: &[(&str, &[&str])],
    ) -> Result<(), RoleError> {
        for (label, methods) in pairs {
            self.declare_role_keyed(entity, label, methods)?;
        }
        Ok(())
    }

    fn declare_role_keyed(
        &mut self,
        entity_name: &str,
        role_name: &str,
        methods: &[&str],
    ) -> Result<(), RoleError> {
        let entity = self.entities.get(entity_name).ok_or_else(|| {
            RoleError::UnknownEntity {
                name: entity_name.to_string(),
            }
        })?;

        // Snapshot every implementation before touching the role list, so a
        // missing method leaves the registry unchanged.
        let mut bindings = Vec::with_capacity(methods.len());
        for &method in methods {
            let implementation =
                entity
                    .method(method)
                    .ok_or_else(|| RoleError::MethodNotFound {
                        entity: entity_name.to_string(),
                        method: method.to_string(),
                    })?;
            bindings.push(MethodBinding::new(method, implementation));
        }

        let role = self.roles.entry(role_name.to_string()).or_default();
        for binding in bindings {
            role.push(binding);
        }
        log::debug!(
            "Registered role '{}' from entity '{}' ({} methods)",
            role_name,
            entity_name,
            methods.len()
        );
        Ok(())
    }

    /// Declare that an entity performs a role, installing its methods.
    ///
    /// Every binding registered under the role *at this moment* installs
    /// into the performer's method table unless the performer already
    /// defines a method of that name (first definition wins — the
    /// performer's own method, or one installed by an earlier-processed
    /// role, is never overwritten). The does relation is then recorded.
    ///
    /// Re-declaring is idempotent against an unchanged registry; if the
    /// role gained bindings since the first declaration, a repeat call
    /// picks up the remainder.
    pub fn declare_does(&mut self, performer: &str, role_name: &str) -> Result<(), RoleError> {
        let bindings: Vec<MethodBinding> = match self.roles.get(role_name) {
            Some(role) => role.bindings().to_vec(),
            None => {
                log::warn!(
                    "Entity '{}' declared performance of role '{}' before any \
                     methods were registered for it",
                    performer,
                    role_name
                );
                Vec::new()
            }
        };

        let entity = self.entities.get_mut(performer).ok_or_else(|| {
            RoleError::UnknownEntity {
                name: performer.to_string(),
            }
        })?;
        for binding in &bindings {
            if entity.install_if_absent(&binding.name, &binding.implementation) {
                log::debug!(
                    "Installed '{}::{}' from role '{}'",
                    performer,
                    binding.name,
                    role_name
                );
            }
        }

        self.does
            .entry(performer.to_string())
            .or_default()
            .insert(role_name.to_string());
        Ok(())
    }

    /// Declare performance of several roles, in order.
    ///
    /// When two roles export the same method name and the performer defines
    /// neither, the first role processed wins.
    pub fn declare_does_all(&mut self, performer: &str, roles: &[&str]) -> Result<(), RoleError> {
        for role_name in roles {
            self.declare_does(performer, role_name)?;
        }
        Ok(())
    }

    /// Apply a labelled [`Declaration`] on behalf of an entity.
    pub fn apply(&mut self, entity: &str, declaration: &Declaration) -> Result<(), RoleError> {
        match declaration {
            Declaration::Role(methods) => {
                let methods: Vec<&str> = methods.iter().map(String::as_str).collect();
                self.declare_role_keyed(entity, entity, &methods)
            }
            Declaration::Multi(pairs) => {
                for (label, methods) in pairs {
                    let methods: Vec<&str> = methods.iter().map(String::as_str).collect();
                    self.declare_role_keyed(entity, label, &methods)?;
                }
                Ok(())
            }
            Declaration::Does(roles) => {
                for role_name in roles {
                    self.declare_does(entity, role_name)?;
                }
                Ok(())
            }
        }
    }

    // -- query surface -------------------------------------------------------

    /// Transitive capability predicate: does the invocant perform the role?
    ///
    /// True when any of the following holds, in order:
    /// 1. the invocant's name equals the role name (self-performance);
    /// 2. the invocant explicitly declared performance of the role;
    /// 3. any declared parent does, depth-first in declared order.
    ///
    /// Pure read: no installation, no registry mutation. Unknown entities
    /// and roles nobody declared answer `Ok(false)`. A cycle in the parent
    /// graph is reported as [`RoleError::CyclicInheritance`].
    pub fn does(&self, invocant: &str, role_name: &str) -> Result<bool, RoleError> {
        ancestry::search(
            invocant,
            |name| {
                self.entities
                    .get(name)
                    .map(|entity| entity.parents().to_vec())
                    .unwrap_or_default()
            },
            |name| {
                name == role_name
                    || self
                        .does
                        .get(name)
                        .is_some_and(|roles| roles.contains(role_name))
            },
        )
    }

    /// Look up a role by name.
    pub fn role(&self, name: &str) -> Option<&Role> {
        self.roles.get(name)
    }

    /// Names of all registered roles, sorted for stable output.
    pub fn role_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.roles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered roles.
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Whether no roles are registered.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn constant(value: Value) -> MethodFn {
        Arc::new(move |_args: &[Value]| value.clone())
    }

    /// Entity `Animal` declares `role => ['eat', 'sleep']`.
    fn registry_with_animal() -> RoleRegistry {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut registry = RoleRegistry::new();
        registry.define_entity("Animal", &[]).unwrap();
        registry
            .define_method("Animal", "eat", constant(json!("chomp")))
            .unwrap();
        registry
            .define_method("Animal", "sleep", constant(json!("zzz")))
            .unwrap();
        registry.declare_role("Animal", &["eat", "sleep"]).unwrap();
        registry
    }

    #[test]
    fn test_every_entity_does_itself() {
        let registry = registry_with_animal();
        assert!(registry.does("Animal", "Animal").unwrap());
        // Self-performance needs no definition at all.
        assert!(registry.does("Ghost", "Ghost").unwrap());
    }

    #[test]
    fn test_does_installs_role_methods() {
        let mut registry = registry_with_animal();
        registry.define_entity("Dog", &[]).unwrap();
        registry.declare_does("Dog", "Animal").unwrap();

        assert!(registry.does("Dog", "Animal").unwrap());
        assert_eq!(registry.invoke("Dog", "eat", &[]).unwrap(), json!("chomp"));
        assert_eq!(registry.invoke("Dog", "sleep", &[]).unwrap(), json!("zzz"));
    }

    #[test]
    fn test_repeat_declaration_is_idempotent() {
        let mut registry = registry_with_animal();
        registry.define_entity("Dog", &[]).unwrap();
        registry.declare_does("Dog", "Animal").unwrap();
        let before = registry.entity("Dog").unwrap().method_names().len();

        registry.declare_does("Dog", "Animal").unwrap();
        let dog = registry.entity("Dog").unwrap();
        assert_eq!(dog.method_names().len(), before);
        assert!(registry.does("Dog", "Animal").unwrap());
    }

    #[test]
    fn test_performer_definition_wins() {
        let mut registry = registry_with_animal();
        registry.define_entity("Dog", &[]).unwrap();
        registry
            .define_method("Dog", "eat", constant(json!("gobble")))
            .unwrap();
        registry.declare_does("Dog", "Animal").unwrap();

        // Dog's own `eat` is preserved; Animal's `sleep` is installed.
        assert_eq!(registry.invoke("Dog", "eat", &[]).unwrap(), json!("gobble"));
        assert_eq!(registry.invoke("Dog", "sleep", &[]).unwrap(), json!("zzz"));
    }

    #[test]
    fn test_first_role_processed_wins() {
        let mut registry = RoleRegistry::new();
        registry.define_entity("Cat", &[]).unwrap();
        registry
            .define_method("Cat", "speak", constant(json!("meow")))
            .unwrap();
        registry.declare_role("Cat", &["speak"]).unwrap();

        registry.define_entity("Cow", &[]).unwrap();
        registry
            .define_method("Cow", "speak", constant(json!("moo")))
            .unwrap();
        registry.declare_role("Cow", &["speak"]).unwrap();

        let mut registry2 = RoleRegistry::new();
        // Same roles, mirrored into a second registry for the reversed order.
        for (entity, sound) in [("Cat", "meow"), ("Cow", "moo")] {
            registry2.define_entity(entity, &[]).unwrap();
            registry2
                .define_method(entity, "speak", constant(json!(sound)))
                .unwrap();
            registry2.declare_role(entity, &["speak"]).unwrap();
        }

        registry.define_entity("Chimera", &[]).unwrap();
        registry
            .declare_does_all("Chimera", &["Cat", "Cow"])
            .unwrap();
        assert_eq!(
            registry.invoke("Chimera", "speak", &[]).unwrap(),
            json!("meow")
        );

        registry2.define_entity("Chimera", &[]).unwrap();
        registry2
            .declare_does_all("Chimera", &["Cow", "Cat"])
            .unwrap();
        assert_eq!(
            registry2.invoke("Chimera", "speak", &[]).unwrap(),
            json!("moo")
        );
    }

    #[test]
    fn test_multi_declares_independent_roles() {
        let mut registry = RoleRegistry::new();
        registry.define_entity("Vehicle", &[]).unwrap();
        registry
            .define_method("Vehicle", "drive", constant(json!("vroom")))
            .unwrap();
        registry
            .define_method("Vehicle", "fly", constant(json!("whoosh")))
            .unwrap();
        registry
            .declare_multi("Vehicle", &[("car", &["drive"]), ("plane", &["fly"])])
            .unwrap();

        registry.define_entity("JamesBondCar", &[]).unwrap();
        registry.declare_does("JamesBondCar", "car").unwrap();
        registry.declare_does("JamesBondCar", "plane").unwrap();

        assert!(registry.does("JamesBondCar", "car").unwrap());
        assert!(registry.does("JamesBondCar", "plane").unwrap());
        assert!(!registry.does("Vehicle", "car").unwrap());
        assert_eq!(registry.role("car").unwrap().method_names(), ["drive"]);
        assert_eq!(registry.role("plane").unwrap().method_names(), ["fly"]);
    }

    #[test]
    fn test_transitive_performance_through_parents() {
        let mut registry = registry_with_animal();
        registry.define_entity("Dog", &[]).unwrap();
        registry.declare_does("Dog", "Animal").unwrap();
        // Inheritance, not role declaration.
        registry.define_entity("RoboDog", &["Dog"]).unwrap();
        registry
            .define_entity("NanoRoboDog", &["RoboDog"])
            .unwrap();

        assert!(registry.does("RoboDog", "Animal").unwrap());
        assert!(registry.does("NanoRoboDog", "Animal").unwrap());
        // Performance does not flow downward to parents.
        assert!(!registry.does("Animal", "Dog").unwrap());
    }

    #[test]
    fn test_unknown_role_is_false_without_side_effects() {
        let registry = registry_with_animal();
        assert!(!registry.does("Animal", "NoSuchRole").unwrap());
        assert!(registry.role("NoSuchRole").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unknown_invocant_is_false() {
        let registry = registry_with_animal();
        assert!(!registry.does("Stranger", "Animal").unwrap());
    }

    #[test]
    fn test_role_declaration_fails_fast_on_missing_method() {
        let mut registry = RoleRegistry::new();
        registry.define_entity("Bird", &[]).unwrap();
        registry
            .define_method("Bird", "fly", constant(json!("flap")))
            .unwrap();

        let err = registry.declare_role("Bird", &["fly", "swim"]).unwrap_err();
        assert!(matches!(err, RoleError::MethodNotFound { .. }));
        // The failed declaration left no partial role behind.
        assert!(registry.role("Bird").is_none());
    }

    #[test]
    fn test_bindings_are_declaration_time_snapshots() {
        let mut registry = registry_with_animal();
        // Redefine after the role was declared.
        registry
            .define_method("Animal", "eat", constant(json!("nibble")))
            .unwrap();

        registry.define_entity("Dog", &[]).unwrap();
        registry.declare_does("Dog", "Animal").unwrap();

        // The role installs the snapshot, not the redefinition.
        assert_eq!(registry.invoke("Dog", "eat", &[]).unwrap(), json!("chomp"));
        // The declaring entity itself dispatches its current definition.
        assert_eq!(
            registry.invoke("Animal", "eat", &[]).unwrap(),
            json!("nibble")
        );
    }

    #[test]
    fn test_early_does_catches_up_on_repeat() {
        let mut registry = RoleRegistry::new();
        registry.define_entity("Animal", &[]).unwrap();
        registry
            .define_method("Animal", "eat", constant(json!("chomp")))
            .unwrap();
        registry.declare_role("Animal", &["eat"]).unwrap();

        registry.define_entity("Dog", &[]).unwrap();
        registry.declare_does("Dog", "Animal").unwrap();
        assert!(!registry.entity("Dog").unwrap().has_method("sleep"));

        // The role grows after the first declaration.
        registry
            .define_method("Animal", "sleep", constant(json!("zzz")))
            .unwrap();
        registry.declare_role("Animal", &["sleep"]).unwrap();

        // Not retroactive; a repeat declaration picks up the remainder.
        assert!(!registry.entity("Dog").unwrap().has_method("sleep"));
        registry.declare_does("Dog", "Animal").unwrap();
        assert!(registry.entity("Dog").unwrap().has_method("sleep"));
    }

    #[test]
    fn test_does_before_role_records_relation() {
        let mut registry = RoleRegistry::new();
        registry.define_entity("Dog", &[]).unwrap();
        registry.declare_does("Dog", "Animal").unwrap();

        assert!(registry.does("Dog", "Animal").unwrap());
        assert!(!registry.entity("Dog").unwrap().has_method("eat"));
    }

    #[test]
    fn test_cyclic_ancestry_is_reported() {
        let mut registry = RoleRegistry::new();
        registry.define_entity("A", &["B"]).unwrap();
        registry.define_entity("B", &["A"]).unwrap();

        let err = registry.does("A", "NoSuchRole").unwrap_err();
        assert!(matches!(err, RoleError::CyclicInheritance { .. }));
        // A match short-circuits before the cycle is ever entered.
        assert!(registry.does("A", "A").unwrap());
    }

    #[test]
    fn test_diamond_ancestry_is_not_a_cycle() {
        let mut registry = registry_with_animal();
        registry.define_entity("Base", &[]).unwrap();
        registry.declare_does("Base", "Animal").unwrap();
        registry.define_entity("Left", &["Base"]).unwrap();
        registry.define_entity("Right", &["Base"]).unwrap();
        registry
            .define_entity("Diamond", &["Left", "Right"])
            .unwrap();

        assert!(registry.does("Diamond", "Animal").unwrap());
        assert!(!registry.does("Diamond", "NoSuchRole").unwrap());
    }

    #[test]
    fn test_declarations_require_defined_entities() {
        let mut registry = RoleRegistry::new();
        assert!(matches!(
            registry.declare_role("Ghost", &["boo"]),
            Err(RoleError::UnknownEntity { .. })
        ));
        assert!(matches!(
            registry.declare_does("Ghost", "Animal"),
            Err(RoleError::UnknownEntity { .. })
        ));
        assert!(matches!(
            registry.define_method("Ghost", "boo", constant(json!(null))),
            Err(RoleError::UnknownEntity { .. })
        ));
    }

    #[test]
    fn test_duplicate_entity_definition_errors() {
        let mut registry = RoleRegistry::new();
        registry.define_entity("Dog", &[]).unwrap();
        assert!(matches!(
            registry.define_entity("Dog", &[]),
            Err(RoleError::DuplicateEntity { .. })
        ));
    }

    #[test]
    fn test_declaration_parses_scalar_and_list_values() {
        let role: Declaration = serde_json::from_value(json!({ "role": "eat" })).unwrap();
        assert_eq!(role, Declaration::Role(vec!["eat".to_string()]));

        let roles: Declaration =
            serde_json::from_value(json!({ "role": ["eat", "sleep"] })).unwrap();
        assert_eq!(
            roles,
            Declaration::Role(vec!["eat".to_string(), "sleep".to_string()])
        );

        let does: Declaration = serde_json::from_value(json!({ "does": "Animal" })).unwrap();
        assert_eq!(does, Declaration::Does(vec!["Animal".to_string()]));

        let multi: Declaration = serde_json::from_value(json!({
            "multi": { "car": ["drive"], "plane": "fly" }
        }))
        .unwrap();
        assert_eq!(
            multi,
            Declaration::Multi(vec![
                ("car".to_string(), vec!["drive".to_string()]),
                ("plane".to_string(), vec!["fly".to_string()]),
            ])
        );
    }

    #[test]
    fn test_declaration_rejects_unknown_labels() {
        assert!(serde_json::from_value::<Declaration>(json!({ "rolle": "eat" })).is_err());
        assert!(serde_json::from_value::<Declaration>(
            json!({ "role": "eat", "does": "Animal" })
        )
        .is_err());
        assert!(serde_json::from_value::<Declaration>(json!({})).is_err());
    }

    #[test]
    fn test_apply_matches_direct_declarations() {
        let mut registry = RoleRegistry::new();
        registry.define_entity("Animal", &[]).unwrap();
        registry
            .define_method("Animal", "eat", constant(json!("chomp")))
            .unwrap();
        registry
            .apply(
                "Animal",
                &serde_json::from_value(json!({ "role": ["eat"] })).unwrap(),
            )
            .unwrap();

        registry.define_entity("Dog", &[]).unwrap();
        registry
            .apply(
                "Dog",
                &serde_json::from_value(json!({ "does": "Animal" })).unwrap(),
            )
            .unwrap();

        assert!(registry.does("Dog", "Animal").unwrap());
        assert_eq!(registry.invoke("Dog", "eat", &[]).unwrap(), json!("chomp"));
    }
}
