//! Shared models

pub mod qualified_name;

pub use qualified_name::{PackageScope, QualifiedNameConvention};
