//! Union of several strategies

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::errors::Result;
use crate::features::supporting_types::domain::ComponentView;
use crate::features::supporting_types::ports::SupportingTypesStrategy;
use crate::features::type_repository::TypeRepository;

/// Runs every child and unions the results; the first child error wins
#[derive(Debug, Default)]
pub struct CompositeSupportingTypesStrategy {
    strategies: Vec<Box<dyn SupportingTypesStrategy>>,
    type_repository: Option<Arc<dyn TypeRepository>>,
}

impl CompositeSupportingTypesStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a child; it receives the repository if one is already bound
    pub fn with_strategy(mut self, strategy: Box<dyn SupportingTypesStrategy>) -> Self {
        self.add_strategy(strategy);
        self
    }

    pub fn add_strategy(&mut self, mut strategy: Box<dyn SupportingTypesStrategy>) {
        if let Some(repository) = &self.type_repository {
            strategy.set_type_repository(Arc::clone(repository));
        }
        self.strategies.push(strategy);
    }

    pub fn strategies(&self) -> &[Box<dyn SupportingTypesStrategy>] {
        &self.strategies
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl SupportingTypesStrategy for CompositeSupportingTypesStrategy {
    fn name(&self) -> &'static str {
        "CompositeSupportingTypesStrategy"
    }

    fn set_type_repository(&mut self, type_repository: Arc<dyn TypeRepository>) {
        for strategy in &mut self.strategies {
            strategy.set_type_repository(Arc::clone(&type_repository));
        }
        self.type_repository = Some(type_repository);
    }

    fn type_repository(&self) -> Option<&Arc<dyn TypeRepository>> {
        self.type_repository.as_ref()
    }

    fn find_supporting_types(&self, component: &ComponentView<'_>) -> Result<BTreeSet<String>> {
        self.require_type_repository()?;

        let mut types = BTreeSet::new();
        for strategy in &self.strategies {
            types.extend(strategy.find_supporting_types(component)?);
        }
        Ok(types)
    }
}
