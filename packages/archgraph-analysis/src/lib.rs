/*
 * Archgraph Analysis - Supporting-Type Discovery Engine
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (qualified names, package scope)
 * - features/    : Vertical slices (type_repository → supporting_types)
 * - config/      : YAML analysis configuration
 *
 * Performance:
 * - Worklist BFS over a petgraph arena, each type expanded once
 * - Rayon across the components of a container
 */

pub mod config;
pub mod errors;
pub mod features;
pub mod shared;

pub use config::{AnalysisConfig, ConfigError, ConfigResult};
pub use errors::{AnalysisError, ErrorKind, Result};
pub use features::supporting_types::{
    AnalysisReport, ComponentView, SupportingTypesAnalyzer, SupportingTypesStrategy,
};
pub use features::type_repository::{InMemoryTypeRepository, TypeGraphSnapshot, TypeRepository};
pub use shared::models::{PackageScope, QualifiedNameConvention};
