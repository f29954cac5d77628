//! Container: a deployable unit holding components

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use super::component::Component;
use super::SupportingTypesAssignment;
use crate::error::{ModelError, ModelResult};

/// A container (application, service, data store) inside a software system
///
/// Components of one container never share a primary type, and a type that is
/// a component's primary type can never be a supporting type of a sibling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technology: String,
    #[serde(default)]
    components: Vec<Component>,
}

impl Container {
    pub fn new(name: impl Into<String>, technology: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            technology: technology.into(),
            components: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a component identified by name and primary type
    ///
    /// # Errors
    ///
    /// - `EmptyName` / `EmptyPrimaryType` for blank identifiers
    /// - `DuplicateName` if the name is taken in this container
    /// - `DuplicatePrimaryType` if another component owns the primary type
    pub fn add_component(
        &mut self,
        name: impl Into<String>,
        primary_type: impl Into<String>,
    ) -> ModelResult<&mut Component> {
        self.insert_component(Component::new(name, primary_type))
    }

    /// Add a fully constructed component (see [`Container::add_component`])
    pub fn insert_component(&mut self, component: Component) -> ModelResult<&mut Component> {
        self.check_new_component(&component)?;
        self.components.push(component);
        let index = self.components.len() - 1;
        Ok(&mut self.components[index])
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn component(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.name == name)
    }

    pub fn component_mut(&mut self, name: &str) -> Option<&mut Component> {
        self.components.iter_mut().find(|c| c.name == name)
    }

    /// Primary types of every component in this container
    pub fn primary_types(&self) -> BTreeSet<&str> {
        self.components.iter().map(|c| c.primary_type()).collect()
    }

    /// Primary types of every component except the named one
    pub fn sibling_primary_types(&self, component_name: &str) -> BTreeSet<&str> {
        self.components
            .iter()
            .filter(|c| c.name != component_name)
            .map(|c| c.primary_type())
            .collect()
    }

    /// Write supporting types onto a component
    ///
    /// The component's own primary type is silently dropped. Any type owned
    /// as primary type by a sibling component is rejected and nothing is
    /// written.
    pub fn assign_supporting_types<I, S>(
        &mut self,
        component_name: &str,
        types: I,
        mode: SupportingTypesAssignment,
    ) -> ModelResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let types: Vec<String> = types.into_iter().map(Into::into).collect();

        let owners: HashMap<&str, &str> = self
            .components
            .iter()
            .filter(|c| c.name != component_name)
            .map(|c| (c.primary_type(), c.name.as_str()))
            .collect();

        if let Some((type_name, owner)) = types
            .iter()
            .find_map(|t| owners.get(t.as_str()).map(|owner| (t, *owner)))
        {
            return Err(ModelError::SupportingTypeConflict {
                type_name: type_name.clone(),
                component: component_name.to_string(),
                owner: owner.to_string(),
            });
        }

        let container = self.name.clone();
        let component =
            self.component_mut(component_name)
                .ok_or_else(|| ModelError::UnknownComponent {
                    component: component_name.to_string(),
                    container,
                })?;

        match mode {
            SupportingTypesAssignment::Replace => component.replace_supporting_types(types),
            SupportingTypesAssignment::Append => component.add_supporting_types(types),
        }
        Ok(())
    }

    /// Check every container invariant (used after deserialization)
    pub fn validate(&self) -> ModelResult<()> {
        if self.name.trim().is_empty() {
            return Err(ModelError::EmptyName {
                element: "Container",
            });
        }

        let mut names: BTreeSet<&str> = BTreeSet::new();
        let mut owners: HashMap<&str, &str> = HashMap::new();

        for component in &self.components {
            Self::check_identifiers(component)?;

            if !names.insert(component.name.as_str()) {
                return Err(self.duplicate_name(&component.name));
            }
            if let Some(owner) = owners.insert(component.primary_type(), component.name.as_str()) {
                return Err(ModelError::DuplicatePrimaryType {
                    primary_type: component.primary_type().to_string(),
                    component: component.name.clone(),
                    owner: owner.to_string(),
                });
            }
        }

        for component in &self.components {
            if component.supporting_types().contains(component.primary_type()) {
                return Err(ModelError::SelfSupportingType {
                    component: component.name.clone(),
                    primary_type: component.primary_type().to_string(),
                });
            }
            for type_name in component.supporting_types() {
                if let Some(owner) = owners.get(type_name.as_str()) {
                    return Err(ModelError::SupportingTypeConflict {
                        type_name: type_name.clone(),
                        component: component.name.clone(),
                        owner: owner.to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    fn check_new_component(&self, component: &Component) -> ModelResult<()> {
        Self::check_identifiers(component)?;

        if self.component(&component.name).is_some() {
            return Err(self.duplicate_name(&component.name));
        }
        if let Some(owner) = self
            .components
            .iter()
            .find(|c| c.primary_type() == component.primary_type())
        {
            return Err(ModelError::DuplicatePrimaryType {
                primary_type: component.primary_type().to_string(),
                component: component.name.clone(),
                owner: owner.name.clone(),
            });
        }

        // The new primary type must not already support an existing component
        if let Some(holder) = self
            .components
            .iter()
            .find(|c| c.supporting_types().contains(component.primary_type()))
        {
            return Err(ModelError::SupportingTypeConflict {
                type_name: component.primary_type().to_string(),
                component: holder.name.clone(),
                owner: component.name.clone(),
            });
        }
        // and a prebuilt component must not claim an existing primary type
        if let Some((type_name, owner)) = component.supporting_types().iter().find_map(|t| {
            self.components
                .iter()
                .find(|c| c.primary_type() == t)
                .map(|owner| (t, owner))
        }) {
            return Err(ModelError::SupportingTypeConflict {
                type_name: type_name.clone(),
                component: component.name.clone(),
                owner: owner.name.clone(),
            });
        }
        Ok(())
    }

    fn check_identifiers(component: &Component) -> ModelResult<()> {
        if component.name.trim().is_empty() {
            return Err(ModelError::EmptyName {
                element: "Component",
            });
        }
        if component.primary_type().trim().is_empty() {
            return Err(ModelError::EmptyPrimaryType {
                component: component.name.clone(),
            });
        }
        Ok(())
    }

    fn duplicate_name(&self, name: &str) -> ModelError {
        ModelError::DuplicateName {
            element: "Component",
            name: name.to_string(),
            parent: self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn container() -> Container {
        let mut container = Container::new("API", "Java");
        container.add_component("A", "pkg.A").unwrap();
        container.add_component("C", "pkg.other.C").unwrap();
        container
    }

    #[test]
    fn test_add_component_rejects_empty_primary_type() {
        let mut container = Container::new("API", "Java");
        let err = container.add_component("A", "  ").unwrap_err();
        assert!(matches!(err, ModelError::EmptyPrimaryType { .. }));
    }

    #[test]
    fn test_add_component_rejects_duplicate_name() {
        let mut container = container();
        let err = container.add_component("A", "pkg.Other").unwrap_err();
        assert!(matches!(err, ModelError::DuplicateName { .. }));
    }

    #[test]
    fn test_add_component_rejects_duplicate_primary_type() {
        let mut container = container();
        let err = container.add_component("A2", "pkg.A").unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicatePrimaryType {
                primary_type: "pkg.A".to_string(),
                component: "A2".to_string(),
                owner: "A".to_string(),
            }
        );
    }

    #[test]
    fn test_sibling_primary_types_excludes_self() {
        let container = container();
        let siblings = container.sibling_primary_types("A");
        assert_eq!(siblings, BTreeSet::from(["pkg.other.C"]));
    }

    #[test]
    fn test_assign_replace_and_append() {
        let mut container = container();
        container
            .assign_supporting_types("A", ["pkg.B"], SupportingTypesAssignment::Replace)
            .unwrap();
        container
            .assign_supporting_types("A", ["pkg.D"], SupportingTypesAssignment::Append)
            .unwrap();
        assert_eq!(container.component("A").unwrap().supporting_types().len(), 2);

        container
            .assign_supporting_types("A", ["pkg.E"], SupportingTypesAssignment::Replace)
            .unwrap();
        let types: Vec<&String> = container.component("A").unwrap().supporting_types().iter().collect();
        assert_eq!(types, vec!["pkg.E"]);
    }

    #[test]
    fn test_assign_rejects_sibling_primary_type() {
        let mut container = container();
        let err = container
            .assign_supporting_types(
                "A",
                ["pkg.B", "pkg.other.C"],
                SupportingTypesAssignment::Replace,
            )
            .unwrap_err();
        assert!(matches!(err, ModelError::SupportingTypeConflict { .. }));
        // nothing written
        assert!(container.component("A").unwrap().supporting_types().is_empty());
    }

    #[test]
    fn test_add_component_rejects_primary_type_already_supporting() {
        let mut container = container();
        container
            .assign_supporting_types("A", ["pkg.B"], SupportingTypesAssignment::Replace)
            .unwrap();

        let err = container.add_component("B", "pkg.B").unwrap_err();
        assert_eq!(
            err,
            ModelError::SupportingTypeConflict {
                type_name: "pkg.B".to_string(),
                component: "A".to_string(),
                owner: "B".to_string(),
            }
        );
        assert!(container.component("B").is_none());
        assert!(container.validate().is_ok());
    }

    #[test]
    fn test_insert_component_rejects_existing_primary_as_supporting() {
        let mut container = container();
        let mut component = Component::new("B", "pkg.B");
        component.add_supporting_types(["pkg.A"]);

        let err = container.insert_component(component).unwrap_err();
        assert!(matches!(
            err,
            ModelError::SupportingTypeConflict { ref owner, .. } if owner == "A"
        ));
        assert!(container.validate().is_ok());
    }

    #[test]
    fn test_assign_unknown_component() {
        let mut container = container();
        let err = container
            .assign_supporting_types("Z", ["pkg.B"], SupportingTypesAssignment::Replace)
            .unwrap_err();
        assert!(matches!(err, ModelError::UnknownComponent { .. }));
    }

    #[test]
    fn test_validate_detects_conflict_after_deserialization() {
        let yaml = r#"
name: API
components:
  - name: A
    primary_type: pkg.A
    supporting_types: [pkg.B]
  - name: B
    primary_type: pkg.B
"#;
        let container: Container = serde_yaml::from_str(yaml).unwrap();
        let err = container.validate().unwrap_err();
        assert!(matches!(err, ModelError::SupportingTypeConflict { .. }));
    }

    #[test]
    fn test_validate_rejects_own_primary_type_as_supporting() {
        let yaml = r#"
name: API
components:
  - name: A
    primary_type: pkg.A
    supporting_types: [pkg.A]
"#;
        let container: Container = serde_yaml::from_str(yaml).unwrap();
        let err = container.validate().unwrap_err();
        assert_eq!(
            err,
            ModelError::SelfSupportingType {
                component: "A".to_string(),
                primary_type: "pkg.A".to_string(),
            }
        );
    }

    #[test]
    fn test_validate_ok() {
        assert!(container().validate().is_ok());
    }
}
