//! Analysis configuration
//!
//! YAML schema v1:
//!
//! ```yaml
//! version: 1
//! analysis:
//!   max_traversal_nodes: 100000
//!   parallel: true
//!   assignment: replace
//! strategies:
//!   - kind: referenced_types_in_same_package
//!     include_indirect: true
//!     scope: exact
//! ```
//!
//! # Examples
//!
//! ```rust
//! use archgraph_analysis::config::AnalysisConfig;
//! use archgraph_analysis::features::type_repository::InMemoryTypeRepository;
//! use std::sync::Arc;
//!
//! let config = AnalysisConfig::from_yaml_str(
//!     "version: 1\nstrategies:\n  - kind: referenced_types\n    include_indirect: false\n",
//! )
//! .unwrap();
//!
//! let repository = Arc::new(InMemoryTypeRepository::from_edges([("pkg.A", vec!["pkg.B"])]));
//! let analyzer = config.build_analyzer(repository).unwrap();
//! assert_eq!(analyzer.strategies().len(), 1);
//! ```

pub mod analysis_config;
pub mod error;
pub mod strategy_config;
pub mod validation;

pub use analysis_config::{AnalysisConfig, AnalysisSettings, SUPPORTED_VERSIONS};
pub use error::{ConfigError, ConfigResult};
pub use strategy_config::{MatcherConfig, StrategyConfig};
pub use validation::{Validatable, ValidatableCollection};
