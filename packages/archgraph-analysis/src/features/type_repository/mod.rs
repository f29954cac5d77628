//! Type Repository - observed type-to-type references
//!
//! The repository is filled by the extraction collaborator (bytecode or
//! source scanner), frozen, then shared read-only by every strategy.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                 Type Repository                      │
//! ├──────────────────────────────────────────────────────┤
//! │  Ports:                                              │
//! │    - TypeRepository (lookup surface)                 │
//! ├──────────────────────────────────────────────────────┤
//! │  Infrastructure:                                     │
//! │    - InMemoryTypeRepository (petgraph arena)         │
//! │    - TypeRepositoryBuilder (one-shot population)     │
//! │    - TypeGraphSnapshot (JSON hand-over format)       │
//! └──────────────────────────────────────────────────────┘
//! ```

pub mod infrastructure;
pub mod ports;

pub use infrastructure::{InMemoryTypeRepository, TypeEntry, TypeGraphSnapshot, TypeRepositoryBuilder};
pub use ports::TypeRepository;
