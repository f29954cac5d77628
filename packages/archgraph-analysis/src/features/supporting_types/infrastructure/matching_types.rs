//! Matcher-based filter over another strategy

use std::collections::BTreeSet;
use std::sync::Arc;

use super::type_matcher::TypeMatcher;
use crate::errors::Result;
use crate::features::supporting_types::domain::ComponentView;
use crate::features::supporting_types::ports::SupportingTypesStrategy;
use crate::features::type_repository::TypeRepository;

/// Keeps only the inner strategy's types accepted by a [`TypeMatcher`]
#[derive(Debug)]
pub struct MatchingTypesSupportingTypesStrategy {
    inner: Box<dyn SupportingTypesStrategy>,
    matcher: Box<dyn TypeMatcher>,
}

impl MatchingTypesSupportingTypesStrategy {
    pub fn new(inner: Box<dyn SupportingTypesStrategy>, matcher: Box<dyn TypeMatcher>) -> Self {
        Self { inner, matcher }
    }

    pub fn matcher(&self) -> &dyn TypeMatcher {
        self.matcher.as_ref()
    }
}

impl SupportingTypesStrategy for MatchingTypesSupportingTypesStrategy {
    fn name(&self) -> &'static str {
        "MatchingTypesSupportingTypesStrategy"
    }

    fn set_type_repository(&mut self, type_repository: Arc<dyn TypeRepository>) {
        self.inner.set_type_repository(type_repository);
    }

    fn type_repository(&self) -> Option<&Arc<dyn TypeRepository>> {
        self.inner.type_repository()
    }

    fn find_supporting_types(&self, component: &ComponentView<'_>) -> Result<BTreeSet<String>> {
        let repository = self.require_type_repository()?;
        let types = self.inner.find_supporting_types(component)?;
        Ok(types
            .into_iter()
            .filter(|type_name| self.matcher.matches(type_name, repository.as_ref()))
            .collect())
    }
}
