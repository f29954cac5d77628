//! Error types for archgraph-model

use thiserror::Error;

/// Model invariant violations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Element name is empty or whitespace
    #[error("{element} name must not be empty")]
    EmptyName { element: &'static str },

    /// Component declared without a primary type
    #[error("Component '{component}' must have a primary type")]
    EmptyPrimaryType { component: String },

    /// Two elements with the same name under one parent
    #[error("{element} '{name}' already exists in '{parent}'")]
    DuplicateName {
        element: &'static str,
        name: String,
        parent: String,
    },

    /// Primary type already owned by another component of the container
    #[error("Primary type '{primary_type}' of component '{component}' is already owned by component '{owner}'")]
    DuplicatePrimaryType {
        primary_type: String,
        component: String,
        owner: String,
    },

    /// Component lookup failed
    #[error("Component '{component}' not found in container '{container}'")]
    UnknownComponent { component: String, container: String },

    /// Component lists its own primary type as a supporting type
    #[error("Component '{component}' cannot list its own primary type '{primary_type}' as a supporting type")]
    SelfSupportingType {
        component: String,
        primary_type: String,
    },

    /// Supporting type collides with a component's primary type
    #[error("Type '{type_name}' cannot support component '{component}': it is the primary type of component '{owner}'")]
    SupportingTypeConflict {
        type_name: String,
        component: String,
        owner: String,
    },
}

/// Result type alias
pub type ModelResult<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ModelError::UnknownComponent {
            component: "Accounts".to_string(),
            container: "API".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Component 'Accounts' not found in container 'API'"
        );
    }

    #[test]
    fn test_conflict_display_names_owner() {
        let err = ModelError::SupportingTypeConflict {
            type_name: "a.B".to_string(),
            component: "A".to_string(),
            owner: "B".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("a.B"));
        assert!(msg.contains("component 'B'"));
    }
}
