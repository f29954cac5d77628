//! Component: the leaf element of the architecture model

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A component inside a container
///
/// A component is identified within its container by its name and by its
/// primary type, the single type the component is considered to "be".
/// Supporting types are private helpers of the primary type discovered by
/// the analysis engine.
///
/// # Examples
///
/// ```rust
/// use archgraph_model::Component;
///
/// let mut component = Component::new("Accounts", "com.bank.AccountsController");
/// component.add_supporting_types(["com.bank.AccountsController", "com.bank.AccountMapper"]);
///
/// // The primary type never supports itself
/// assert_eq!(component.supporting_types().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Component name (unique within the container)
    pub name: String,
    /// Fully-qualified name of the primary type
    primary_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technology: String,
    #[serde(default)]
    supporting_types: BTreeSet<String>,
}

impl Component {
    pub fn new(name: impl Into<String>, primary_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            primary_type: primary_type.into(),
            description: String::new(),
            technology: String::new(),
            supporting_types: BTreeSet::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_technology(mut self, technology: impl Into<String>) -> Self {
        self.technology = technology.into();
        self
    }

    /// Fully-qualified name of the primary type
    pub fn primary_type(&self) -> &str {
        &self.primary_type
    }

    pub fn supporting_types(&self) -> &BTreeSet<String> {
        &self.supporting_types
    }

    /// Replace the supporting types, dropping the primary type if present
    pub fn replace_supporting_types<I, S>(&mut self, types: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supporting_types.clear();
        self.add_supporting_types(types);
    }

    /// Append supporting types, dropping the primary type if present
    pub fn add_supporting_types<I, S>(&mut self, types: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for type_name in types {
            let type_name = type_name.into();
            if type_name != self.primary_type {
                self.supporting_types.insert(type_name);
            }
        }
    }

    pub fn clear_supporting_types(&mut self) {
        self.supporting_types.clear();
    }

    /// Whether the type is the primary type or one of the supporting types
    pub fn owns_type(&self, type_name: &str) -> bool {
        self.primary_type == type_name || self.supporting_types.contains(type_name)
    }
}
