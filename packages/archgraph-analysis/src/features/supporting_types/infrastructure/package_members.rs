//! Package membership strategies
//!
//! Ignore the reference graph and take every known type colocated with the
//! primary type. Cheap, and a good fit for codebases where a component owns
//! its whole package.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::errors::Result;
use crate::features::supporting_types::domain::ComponentView;
use crate::features::supporting_types::ports::SupportingTypesStrategy;
use crate::features::type_repository::TypeRepository;
use crate::shared::models::PackageScope;

fn package_members(
    repository: &dyn TypeRepository,
    component: &ComponentView<'_>,
    scope: PackageScope,
) -> Result<BTreeSet<String>> {
    let convention = repository.convention();
    let package = repository.package_of(component.primary_type)?;

    // Malformed names in the repository are not members of any package
    let members = repository
        .all_types()
        .into_iter()
        .filter(|type_name| {
            scope
                .contains(convention, &package, type_name)
                .unwrap_or(false)
        })
        .collect();

    Ok(component.retain_supporting(members))
}

/// Every known type in the component's package
#[derive(Debug, Clone, Default)]
pub struct AllTypesInPackageSupportingTypesStrategy {
    type_repository: Option<Arc<dyn TypeRepository>>,
}

impl AllTypesInPackageSupportingTypesStrategy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SupportingTypesStrategy for AllTypesInPackageSupportingTypesStrategy {
    fn name(&self) -> &'static str {
        "AllTypesInPackageSupportingTypesStrategy"
    }

    fn set_type_repository(&mut self, type_repository: Arc<dyn TypeRepository>) {
        self.type_repository = Some(type_repository);
    }

    fn type_repository(&self) -> Option<&Arc<dyn TypeRepository>> {
        self.type_repository.as_ref()
    }

    fn find_supporting_types(&self, component: &ComponentView<'_>) -> Result<BTreeSet<String>> {
        let repository = self.require_type_repository()?;
        package_members(repository.as_ref(), component, PackageScope::Exact)
    }
}

/// Every known type in the component's package or any package below it
#[derive(Debug, Clone, Default)]
pub struct AllTypesUnderPackageSupportingTypesStrategy {
    type_repository: Option<Arc<dyn TypeRepository>>,
}

impl AllTypesUnderPackageSupportingTypesStrategy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SupportingTypesStrategy for AllTypesUnderPackageSupportingTypesStrategy {
    fn name(&self) -> &'static str {
        "AllTypesUnderPackageSupportingTypesStrategy"
    }

    fn set_type_repository(&mut self, type_repository: Arc<dyn TypeRepository>) {
        self.type_repository = Some(type_repository);
    }

    fn type_repository(&self) -> Option<&Arc<dyn TypeRepository>> {
        self.type_repository.as_ref()
    }

    fn find_supporting_types(&self, component: &ComponentView<'_>) -> Result<BTreeSet<String>> {
        let repository = self.require_type_repository()?;
        package_members(repository.as_ref(), component, PackageScope::Subpackages)
    }
}
