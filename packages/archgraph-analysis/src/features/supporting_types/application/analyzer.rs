//! SupportingTypesAnalyzer
//!
//! Two phases per container:
//! 1. compute: every component is evaluated against the shared repository
//!    (rayon when `parallel` is set), nothing is written
//! 2. assign: successful results are written onto their components
//!
//! A failing component only marks its own outcome.

use std::collections::BTreeSet;
use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use archgraph_model::{Container, Model, SupportingTypesAssignment};

use super::report::{AnalysisReport, ComponentOutcome, ContainerReport};
use crate::errors::Result;
use crate::features::supporting_types::domain::ComponentView;
use crate::features::supporting_types::ports::SupportingTypesStrategy;
use crate::features::type_repository::TypeRepository;

/// Analyzer behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerSettings {
    /// Evaluate the components of a container in parallel
    pub parallel: bool,
    pub assignment: SupportingTypesAssignment,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            parallel: true,
            assignment: SupportingTypesAssignment::Replace,
        }
    }
}

/// Runs a set of strategies over containers and writes the union of their
/// results onto each component
#[derive(Debug)]
pub struct SupportingTypesAnalyzer {
    type_repository: Arc<dyn TypeRepository>,
    strategies: Vec<Box<dyn SupportingTypesStrategy>>,
    settings: AnalyzerSettings,
}

impl SupportingTypesAnalyzer {
    pub fn new(type_repository: Arc<dyn TypeRepository>) -> Self {
        Self {
            type_repository,
            strategies: Vec::new(),
            settings: AnalyzerSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: AnalyzerSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Add a strategy and bind the analyzer's repository to it
    pub fn with_strategy(mut self, strategy: Box<dyn SupportingTypesStrategy>) -> Self {
        self.add_strategy(strategy);
        self
    }

    pub fn add_strategy(&mut self, mut strategy: Box<dyn SupportingTypesStrategy>) {
        strategy.set_type_repository(Arc::clone(&self.type_repository));
        self.strategies.push(strategy);
    }

    pub fn strategies(&self) -> &[Box<dyn SupportingTypesStrategy>] {
        &self.strategies
    }

    pub fn settings(&self) -> &AnalyzerSettings {
        &self.settings
    }

    pub fn type_repository(&self) -> &Arc<dyn TypeRepository> {
        &self.type_repository
    }

    /// Union of every strategy's result for one component
    pub fn find_supporting_types(&self, component: &ComponentView<'_>) -> Result<BTreeSet<String>> {
        let mut types = BTreeSet::new();
        for strategy in &self.strategies {
            let found = strategy.find_supporting_types(component)?;
            debug!(
                strategy = strategy.name(),
                component = component.name,
                found = found.len(),
                "Strategy finished"
            );
            types.extend(found);
        }
        Ok(types)
    }

    /// Analyse every component of `container` and write the results
    pub fn analyze_container(&self, container: &mut Container) -> ContainerReport {
        let computed: Vec<(String, String, Result<BTreeSet<String>>)> = {
            let views = ComponentView::all_in_container(container);
            let evaluate = |view: &ComponentView<'_>| {
                (
                    view.name.to_string(),
                    view.primary_type.to_string(),
                    self.find_supporting_types(view),
                )
            };
            if self.settings.parallel {
                views.par_iter().map(evaluate).collect()
            } else {
                views.iter().map(evaluate).collect()
            }
        };

        let mut outcomes = Vec::with_capacity(computed.len());
        for (component, primary_type, result) in computed {
            let result = result.and_then(|types| {
                container.assign_supporting_types(
                    &component,
                    types.iter().cloned(),
                    self.settings.assignment,
                )?;
                Ok(types)
            });

            if let Err(err) = &result {
                warn!(
                    container = %container.name,
                    component = %component,
                    kind = %err.kind,
                    "Supporting type discovery failed: {}",
                    err.message
                );
            }

            outcomes.push(ComponentOutcome {
                component,
                primary_type,
                result,
            });
        }

        let report = ContainerReport {
            container: container.name.clone(),
            outcomes,
        };
        info!(
            container = %report.container,
            succeeded = report.succeeded().count(),
            failed = report.failed().count(),
            "Analysed container"
        );
        report
    }

    /// Analyse every container of `model`
    pub fn analyze_model(&self, model: &mut Model) -> AnalysisReport {
        let containers = model
            .containers_mut()
            .map(|container| self.analyze_container(container))
            .collect();
        AnalysisReport { containers }
    }
}
