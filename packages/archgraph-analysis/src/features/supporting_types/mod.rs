//! Supporting Types - discovery of a component's private helper types
//!
//! Given a component's primary type and the type repository, a strategy
//! computes the types that support the component: types it uses internally
//! that are not themselves other components.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                  Supporting Types Feature                     │
//! ├───────────────────────────────────────────────────────────────┤
//! │  Domain:                                                      │
//! │    - ComponentView (primary type + sibling primary types)     │
//! ├───────────────────────────────────────────────────────────────┤
//! │  Ports:                                                       │
//! │    - SupportingTypesStrategy                                  │
//! ├───────────────────────────────────────────────────────────────┤
//! │  Infrastructure:                                              │
//! │    - ReferencedTypes            (BFS closure, cycle-safe)     │
//! │    - ReferencedTypesInSamePackage (owns a ReferencedTypes)    │
//! │    - AllTypesInPackage / AllTypesUnderPackage                 │
//! │    - MatchingTypes + TypeMatcher (suffix, regex, annotation)  │
//! │    - ExplicitTypes (include / exclude lists)                  │
//! │    - Composite (union)                                        │
//! ├───────────────────────────────────────────────────────────────┤
//! │  Application:                                                 │
//! │    - SupportingTypesAnalyzer (per-component outcomes, rayon)  │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use archgraph_analysis::features::supporting_types::{
//!     ComponentView, ReferencedTypesInSamePackageSupportingTypesStrategy, SupportingTypesStrategy,
//! };
//! use archgraph_analysis::features::type_repository::InMemoryTypeRepository;
//! use std::sync::Arc;
//!
//! let repository = InMemoryTypeRepository::from_edges([
//!     ("pkg.A", vec!["pkg.B", "pkg.other.C"]),
//!     ("pkg.B", vec!["pkg.D"]),
//!     ("pkg.D", vec!["pkg.A"]),
//! ]);
//!
//! let mut strategy = ReferencedTypesInSamePackageSupportingTypesStrategy::default();
//! strategy.set_type_repository(Arc::new(repository));
//!
//! let types = strategy.find_supporting_types(&ComponentView::new("A", "pkg.A")).unwrap();
//! assert_eq!(types.into_iter().collect::<Vec<_>>(), vec!["pkg.B", "pkg.D"]);
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::{
    AnalysisReport, AnalyzerSettings, ComponentOutcome, ComponentSummary, ContainerReport,
    ContainerSummary, ReportSummary, SupportingTypesAnalyzer,
};
pub use domain::{ComponentView, DEFAULT_MAX_TRAVERSAL_NODES};
pub use infrastructure::{
    AllTypesInPackageSupportingTypesStrategy, AllTypesUnderPackageSupportingTypesStrategy,
    AnnotationTypeMatcher, CompositeSupportingTypesStrategy, ExplicitTypesSupportingTypesStrategy,
    MatchingTypesSupportingTypesStrategy, NameSuffixTypeMatcher,
    ReferencedTypesInSamePackageSupportingTypesStrategy, ReferencedTypesSupportingTypesStrategy,
    RegexTypeMatcher, TypeMatcher,
};
pub use ports::SupportingTypesStrategy;
