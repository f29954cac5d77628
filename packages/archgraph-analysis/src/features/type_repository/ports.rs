use std::collections::BTreeSet;
use std::fmt;

use crate::errors::Result;
use crate::shared::models::QualifiedNameConvention;

/// Read-only lookup surface over the type reference graph
///
/// Implementations are immutable once handed to strategies, so concurrent
/// reads need no synchronization.
pub trait TypeRepository: Send + Sync + fmt::Debug {
    /// Direct out-edges of `type_name`; empty for unknown types
    fn referenced_types(&self, type_name: &str) -> BTreeSet<String>;

    /// Every type known to the repository, including leaf targets
    fn all_types(&self) -> BTreeSet<String>;

    fn contains(&self, type_name: &str) -> bool;

    /// Number of known types
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Annotations recorded on `type_name`; empty for unknown types
    fn annotations_of(&self, _type_name: &str) -> BTreeSet<String> {
        BTreeSet::new()
    }

    fn convention(&self) -> QualifiedNameConvention {
        QualifiedNameConvention::Dot
    }

    /// Package of `type_name` under the repository's naming convention
    fn package_of(&self, type_name: &str) -> Result<String> {
        self.convention()
            .package_of(type_name)
            .map(str::to_string)
    }
}
