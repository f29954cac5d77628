//! Infrastructure - concrete supporting-type strategies

pub mod composite;
pub mod explicit_types;
pub mod matching_types;
pub mod package_members;
pub mod referenced_types;
pub mod same_package;
pub mod type_matcher;

pub use composite::CompositeSupportingTypesStrategy;
pub use explicit_types::ExplicitTypesSupportingTypesStrategy;
pub use matching_types::MatchingTypesSupportingTypesStrategy;
pub use package_members::{
    AllTypesInPackageSupportingTypesStrategy, AllTypesUnderPackageSupportingTypesStrategy,
};
pub use referenced_types::ReferencedTypesSupportingTypesStrategy;
pub use same_package::ReferencedTypesInSamePackageSupportingTypesStrategy;
pub use type_matcher::{AnnotationTypeMatcher, NameSuffixTypeMatcher, RegexTypeMatcher, TypeMatcher};
