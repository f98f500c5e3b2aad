//! Error types for role declaration and capability queries.
//!
//! Declaration-time errors are synchronous and fatal to the declaring
//! entity's setup. A negative query result is not an error: asking about a
//! role nobody declared simply answers `false`.

use thiserror::Error;

/// Errors raised by the role registry.
#[derive(Debug, Error)]
pub enum RoleError {
    /// An entity was referenced that was never defined.
    #[error("Unknown entity: {name}")]
    UnknownEntity { name: String },

    /// An entity was defined twice.
    #[error("Entity already defined: {name}")]
    DuplicateEntity { name: String },

    /// A method was named that the entity does not implement.
    ///
    /// Raised when a role declaration snapshots a method the declaring
    /// entity lacks, and when an undefined method is invoked.
    #[error("No method '{method}' on entity '{entity}'")]
    MethodNotFound { entity: String, method: String },

    /// The ancestry walk revisited an entity on its own parent path.
    #[error("Cyclic inheritance detected: {}", cycle_path(.path))]
    CyclicInheritance { path: Vec<String> },
}

fn cycle_path(path: &[String]) -> String {
    path.join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cyclic_error_display_includes_path() {
        let err = RoleError::CyclicInheritance {
            path: vec!["A".to_string(), "B".to_string(), "A".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Cyclic inheritance detected: A -> B -> A"
        );
    }

    #[test]
    fn test_method_not_found_display() {
        let err = RoleError::MethodNotFound {
            entity: "Dog".to_string(),
            method: "fly".to_string(),
        };
        assert_eq!(err.to_string(), "No method 'fly' on entity 'Dog'");
    }
}
