//! Features - vertical slices
//!
//! - `type_repository`: observed type-to-type references
//! - `supporting_types`: strategies and the analyzer built on the repository

pub mod supporting_types;
pub mod type_repository;
