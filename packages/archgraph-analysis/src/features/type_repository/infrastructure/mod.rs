//! Infrastructure - concrete type repositories

pub mod in_memory;
pub mod snapshot;

pub use in_memory::{InMemoryTypeRepository, TypeRepositoryBuilder};
pub use snapshot::{TypeEntry, TypeGraphSnapshot};
