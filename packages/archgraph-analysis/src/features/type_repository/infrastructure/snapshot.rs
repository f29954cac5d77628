//! JSON hand-over format for type graphs
//!
//! The extraction collaborator writes one snapshot per analysis run:
//!
//! ```json
//! {
//!   "convention": "dot",
//!   "types": {
//!     "com.bank.AccountsController": {
//!       "references": ["com.bank.AccountMapper"],
//!       "annotations": ["org.springframework.stereotype.Controller"]
//!     }
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::in_memory::{InMemoryTypeRepository, TypeRepositoryBuilder};
use crate::errors::Result;
use crate::features::type_repository::ports::TypeRepository;
use crate::shared::models::QualifiedNameConvention;

/// Extracted facts about one type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeEntry {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<String>,
}

/// Serialized type graph
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeGraphSnapshot {
    #[serde(default)]
    pub convention: QualifiedNameConvention,
    #[serde(default)]
    pub types: BTreeMap<String, TypeEntry>,
}

impl TypeGraphSnapshot {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Freeze the snapshot into a repository
    pub fn into_repository(self) -> InMemoryTypeRepository {
        let mut builder = TypeRepositoryBuilder::new().convention(self.convention);
        for (type_name, entry) in self.types {
            builder.add_references(type_name.clone(), entry.references);
            for annotation in entry.annotations {
                builder.add_annotation(type_name.clone(), annotation);
            }
        }
        builder.build()
    }

    /// Capture a repository, listing leaf types explicitly
    pub fn from_repository(repository: &InMemoryTypeRepository) -> Self {
        let mut types: BTreeMap<String, TypeEntry> = repository
            .all_types()
            .into_iter()
            .map(|type_name| (type_name, TypeEntry::default()))
            .collect();

        for (from, to) in repository.references() {
            if let Some(entry) = types.get_mut(from) {
                entry.references.push(to.to_string());
            }
        }
        for (type_name, annotations) in repository.annotation_entries() {
            if let Some(entry) = types.get_mut(type_name) {
                entry.annotations.extend(annotations.iter().cloned());
            }
        }
        for entry in types.values_mut() {
            entry.references.sort();
        }

        Self {
            convention: repository.convention(),
            types,
        }
    }
}
