//! Domain layer for the architecture model
//!
//! - `Model`: root holding software systems
//! - `SoftwareSystem`: a system holding containers
//! - `Container`: a deployable unit holding components
//! - `Component`: primary type plus supporting types

mod component;
mod container;

pub use component::Component;
pub use container::Container;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// How newly discovered supporting types are written onto a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportingTypesAssignment {
    /// Discard previously assigned supporting types
    #[default]
    Replace,
    /// Keep previously assigned supporting types
    Append,
}

impl SupportingTypesAssignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Replace => "replace",
            Self::Append => "append",
        }
    }
}

impl std::fmt::Display for SupportingTypesAssignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A software system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftwareSystem {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    containers: Vec<Container>,
}

impl SoftwareSystem {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            containers: Vec::new(),
        }
    }

    /// Add a container; names are unique within the system
    pub fn add_container(
        &mut self,
        name: impl Into<String>,
        technology: impl Into<String>,
    ) -> ModelResult<&mut Container> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ModelError::EmptyName {
                element: "Container",
            });
        }
        if self.container(&name).is_some() {
            return Err(ModelError::DuplicateName {
                element: "Container",
                name,
                parent: self.name.clone(),
            });
        }
        self.containers.push(Container::new(name, technology));
        let index = self.containers.len() - 1;
        Ok(&mut self.containers[index])
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn containers_mut(&mut self) -> impl Iterator<Item = &mut Container> {
        self.containers.iter_mut()
    }

    pub fn container(&self, name: &str) -> Option<&Container> {
        self.containers.iter().find(|c| c.name == name)
    }

    pub fn container_mut(&mut self, name: &str) -> Option<&mut Container> {
        self.containers.iter_mut().find(|c| c.name == name)
    }
}

/// Root of the architecture model
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    #[serde(default)]
    software_systems: Vec<SoftwareSystem>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_software_system(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> ModelResult<&mut SoftwareSystem> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ModelError::EmptyName {
                element: "SoftwareSystem",
            });
        }
        if self.software_system(&name).is_some() {
            return Err(ModelError::DuplicateName {
                element: "SoftwareSystem",
                name,
                parent: "model".to_string(),
            });
        }
        self.software_systems
            .push(SoftwareSystem::new(name, description));
        let index = self.software_systems.len() - 1;
        Ok(&mut self.software_systems[index])
    }

    pub fn software_systems(&self) -> &[SoftwareSystem] {
        &self.software_systems
    }

    pub fn software_system(&self, name: &str) -> Option<&SoftwareSystem> {
        self.software_systems.iter().find(|s| s.name == name)
    }

    pub fn software_system_mut(&mut self, name: &str) -> Option<&mut SoftwareSystem> {
        self.software_systems.iter_mut().find(|s| s.name == name)
    }

    /// Every container of every software system
    pub fn containers_mut(&mut self) -> impl Iterator<Item = &mut Container> {
        self.software_systems
            .iter_mut()
            .flat_map(|s| s.containers_mut())
    }

    /// Every component across the model
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.software_systems
            .iter()
            .flat_map(|s| s.containers().iter())
            .flat_map(|c| c.components().iter())
    }

    /// Validate every container (use after loading a model from YAML)
    pub fn validate(&self) -> ModelResult<()> {
        for system in &self.software_systems {
            if system.name.trim().is_empty() {
                return Err(ModelError::EmptyName {
                    element: "SoftwareSystem",
                });
            }
            for container in system.containers() {
                container.validate()?;
            }
        }
        Ok(())
    }
}
