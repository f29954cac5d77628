//! Architecture model for archgraph
//!
//! Plain-data description of a software architecture:
//!
//! ```text
//! Model
//!  └─ SoftwareSystem
//!      └─ Container
//!          └─ Component (primary type + supporting types)
//! ```
//!
//! The model is deliberately passive. Supporting types are computed by
//! `archgraph-analysis` and written back through
//! [`Container::assign_supporting_types`], which enforces that a supporting
//! type is private to exactly one component.
//!
//! ## Usage
//!
//! ```rust
//! use archgraph_model::{Model, SupportingTypesAssignment};
//! use std::collections::BTreeSet;
//!
//! let mut model = Model::new();
//! let system = model.add_software_system("Banking", "Internet banking").unwrap();
//! let container = system.add_container("API", "Spring MVC").unwrap();
//! container.add_component("Accounts", "com.bank.accounts.AccountsController").unwrap();
//!
//! let types = BTreeSet::from(["com.bank.accounts.AccountMapper".to_string()]);
//! container
//!     .assign_supporting_types("Accounts", types, SupportingTypesAssignment::Replace)
//!     .unwrap();
//! ```

pub mod domain;
pub mod error;

pub use domain::{Component, Container, Model, SoftwareSystem, SupportingTypesAssignment};
pub use error::{ModelError, ModelResult};
