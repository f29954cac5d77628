//! Explicit inclusion and exclusion lists
//!
//! `(inner ∪ include) − exclude`, then the usual own/sibling exclusion.
//! Without an inner strategy the include list is the whole result.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::errors::Result;
use crate::features::supporting_types::domain::ComponentView;
use crate::features::supporting_types::ports::SupportingTypesStrategy;
use crate::features::type_repository::TypeRepository;

#[derive(Debug, Default)]
pub struct ExplicitTypesSupportingTypesStrategy {
    inner: Option<Box<dyn SupportingTypesStrategy>>,
    include: BTreeSet<String>,
    exclude: BTreeSet<String>,
    type_repository: Option<Arc<dyn TypeRepository>>,
}

impl ExplicitTypesSupportingTypesStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the lists on top of another strategy's result
    pub fn wrapping(inner: Box<dyn SupportingTypesStrategy>) -> Self {
        Self {
            inner: Some(inner),
            ..Self::default()
        }
    }

    pub fn include<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include.extend(types.into_iter().map(Into::into));
        self
    }

    pub fn exclude<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(types.into_iter().map(Into::into));
        self
    }
}

impl SupportingTypesStrategy for ExplicitTypesSupportingTypesStrategy {
    fn name(&self) -> &'static str {
        "ExplicitTypesSupportingTypesStrategy"
    }

    fn set_type_repository(&mut self, type_repository: Arc<dyn TypeRepository>) {
        if let Some(inner) = self.inner.as_mut() {
            inner.set_type_repository(Arc::clone(&type_repository));
        }
        self.type_repository = Some(type_repository);
    }

    fn type_repository(&self) -> Option<&Arc<dyn TypeRepository>> {
        self.type_repository.as_ref()
    }

    fn find_supporting_types(&self, component: &ComponentView<'_>) -> Result<BTreeSet<String>> {
        self.require_type_repository()?;

        let mut types = match &self.inner {
            Some(inner) => inner.find_supporting_types(component)?,
            None => BTreeSet::new(),
        };
        types.extend(self.include.iter().cloned());
        types.retain(|type_name| !self.exclude.contains(type_name));

        Ok(component.retain_supporting(types))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::features::supporting_types::infrastructure::ReferencedTypesSupportingTypesStrategy;
    use crate::features::type_repository::InMemoryTypeRepository;
    use pretty_assertions::assert_eq;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn repository() -> Arc<dyn TypeRepository> {
        Arc::new(InMemoryTypeRepository::from_edges([
            ("pkg.A", vec!["pkg.B", "java.lang.String"]),
        ]))
    }

    #[test]
    fn test_lists_on_top_of_inner() {
        let mut strategy = ExplicitTypesSupportingTypesStrategy::wrapping(Box::new(
            ReferencedTypesSupportingTypesStrategy::default(),
        ))
        .include(["pkg.Config"])
        .exclude(["java.lang.String"]);
        strategy.set_type_repository(repository());

        let types = strategy
            .find_supporting_types(&ComponentView::new("A", "pkg.A"))
            .unwrap();
        assert_eq!(types, set(&["pkg.B", "pkg.Config"]));
    }

    #[test]
    fn test_include_only() {
        let mut strategy = ExplicitTypesSupportingTypesStrategy::new().include(["pkg.A", "pkg.C", "pkg.Helper"]);
        strategy.set_type_repository(repository());

        let view = ComponentView::new("A", "pkg.A").with_siblings(["pkg.C"]);
        assert_eq!(strategy.find_supporting_types(&view).unwrap(), set(&["pkg.Helper"]));
    }

    #[test]
    fn test_not_configured() {
        let err = ExplicitTypesSupportingTypesStrategy::new()
            .include(["pkg.Helper"])
            .find_supporting_types(&ComponentView::new("A", "pkg.A"))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotConfigured);
    }
}
