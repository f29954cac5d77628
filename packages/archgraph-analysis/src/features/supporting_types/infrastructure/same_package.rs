//! Referenced types in the component's own package
//!
//! Useful when each component lives in its own package: anything reachable
//! from the primary type and colocated with it is a private helper.

use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::debug;

use super::referenced_types::ReferencedTypesSupportingTypesStrategy;
use crate::errors::Result;
use crate::features::supporting_types::domain::ComponentView;
use crate::features::supporting_types::ports::SupportingTypesStrategy;
use crate::features::type_repository::TypeRepository;
use crate::shared::models::PackageScope;

/// Package filter over an owned [`ReferencedTypesSupportingTypesStrategy`]
///
/// The result is always a subset of the owned strategy's result.
#[derive(Debug, Clone)]
pub struct ReferencedTypesInSamePackageSupportingTypesStrategy {
    referenced_types: ReferencedTypesSupportingTypesStrategy,
    scope: PackageScope,
}

impl ReferencedTypesInSamePackageSupportingTypesStrategy {
    pub fn new(include_indirectly_referenced_types: bool) -> Self {
        Self {
            referenced_types: ReferencedTypesSupportingTypesStrategy::new(
                include_indirectly_referenced_types,
            ),
            scope: PackageScope::Exact,
        }
    }

    pub fn with_scope(mut self, scope: PackageScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_max_traversal_nodes(mut self, max_traversal_nodes: usize) -> Self {
        self.referenced_types = self
            .referenced_types
            .with_max_traversal_nodes(max_traversal_nodes);
        self
    }

    pub fn includes_indirectly_referenced_types(&self) -> bool {
        self.referenced_types.includes_indirectly_referenced_types()
    }

    pub fn scope(&self) -> PackageScope {
        self.scope
    }
}

impl Default for ReferencedTypesInSamePackageSupportingTypesStrategy {
    fn default() -> Self {
        Self::new(true)
    }
}

impl SupportingTypesStrategy for ReferencedTypesInSamePackageSupportingTypesStrategy {
    fn name(&self) -> &'static str {
        "ReferencedTypesInSamePackageSupportingTypesStrategy"
    }

    fn set_type_repository(&mut self, type_repository: Arc<dyn TypeRepository>) {
        self.referenced_types.set_type_repository(type_repository);
    }

    fn type_repository(&self) -> Option<&Arc<dyn TypeRepository>> {
        self.referenced_types.type_repository()
    }

    fn find_supporting_types(&self, component: &ComponentView<'_>) -> Result<BTreeSet<String>> {
        let repository = self.require_type_repository()?;
        let convention = repository.convention();
        let package = repository.package_of(component.primary_type)?;

        let referenced = self.referenced_types.find_supporting_types(component)?;

        Ok(referenced
            .into_iter()
            .filter(|type_name| {
                match self.scope.contains(convention, &package, type_name) {
                    Ok(in_package) => in_package,
                    Err(err) => {
                        debug!("skipping {}: {}", type_name, err);
                        false
                    }
                }
            })
            .collect())
    }
}
