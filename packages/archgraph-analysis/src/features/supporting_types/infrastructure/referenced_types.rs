//! Referenced types strategy
//!
//! Algorithm (worklist BFS, O(V+E) over reachable types):
//! 1. Frontier = direct references of the primary type
//! 2. Direct-only mode stops here
//! 3. Otherwise pop, mark visited, push unvisited references until empty
//! 4. Drop the primary type and every sibling primary type
//!
//! Example (`A` is the component, `C` a sibling component):
//! ```text
//! A → B → D → A
//!  ↘
//!   C
//!
//! indirect: {B, D}      (A is own, C is a sibling)
//! direct:   {B}
//! ```

use std::collections::{BTreeSet, HashSet, VecDeque};
use std::sync::Arc;
use tracing::debug;

use crate::errors::{AnalysisError, Result};
use crate::features::supporting_types::domain::{ComponentView, DEFAULT_MAX_TRAVERSAL_NODES};
use crate::features::supporting_types::ports::SupportingTypesStrategy;
use crate::features::type_repository::TypeRepository;

/// Types reachable from the primary type through the reference graph
#[derive(Debug, Clone)]
pub struct ReferencedTypesSupportingTypesStrategy {
    include_indirectly_referenced_types: bool,
    max_traversal_nodes: usize,
    type_repository: Option<Arc<dyn TypeRepository>>,
}

impl ReferencedTypesSupportingTypesStrategy {
    pub fn new(include_indirectly_referenced_types: bool) -> Self {
        Self {
            include_indirectly_referenced_types,
            max_traversal_nodes: DEFAULT_MAX_TRAVERSAL_NODES,
            type_repository: None,
        }
    }

    /// Cap on visited types; exceeding it fails the call
    pub fn with_max_traversal_nodes(mut self, max_traversal_nodes: usize) -> Self {
        self.max_traversal_nodes = max_traversal_nodes;
        self
    }

    pub fn includes_indirectly_referenced_types(&self) -> bool {
        self.include_indirectly_referenced_types
    }

    pub fn max_traversal_nodes(&self) -> usize {
        self.max_traversal_nodes
    }

    fn traverse(
        &self,
        repository: &dyn TypeRepository,
        primary_type: &str,
        frontier: BTreeSet<String>,
    ) -> Result<BTreeSet<String>> {
        let mut visited: HashSet<String> = HashSet::new();
        let mut queue: VecDeque<String> = frontier.into_iter().collect();

        while let Some(type_name) = queue.pop_front() {
            if visited.contains(&type_name) {
                continue;
            }

            for referenced in repository.referenced_types(&type_name) {
                if !visited.contains(&referenced) {
                    queue.push_back(referenced);
                }
            }

            visited.insert(type_name);
            if visited.len() > self.max_traversal_nodes {
                return Err(AnalysisError::traversal_limit_exceeded(
                    primary_type,
                    self.max_traversal_nodes,
                ));
            }
        }

        Ok(visited.into_iter().collect())
    }
}

impl Default for ReferencedTypesSupportingTypesStrategy {
    fn default() -> Self {
        Self::new(true)
    }
}

impl SupportingTypesStrategy for ReferencedTypesSupportingTypesStrategy {
    fn name(&self) -> &'static str {
        "ReferencedTypesSupportingTypesStrategy"
    }

    fn set_type_repository(&mut self, type_repository: Arc<dyn TypeRepository>) {
        self.type_repository = Some(type_repository);
    }

    fn type_repository(&self) -> Option<&Arc<dyn TypeRepository>> {
        self.type_repository.as_ref()
    }

    fn find_supporting_types(&self, component: &ComponentView<'_>) -> Result<BTreeSet<String>> {
        let repository = self.require_type_repository()?;
        let frontier = repository.referenced_types(component.primary_type);

        let reached = if self.include_indirectly_referenced_types {
            self.traverse(repository.as_ref(), component.primary_type, frontier)?
        } else {
            frontier
        };

        let supporting = component.retain_supporting(reached);
        debug!(
            "{}: {} supporting types (indirect={})",
            component.primary_type,
            supporting.len(),
            self.include_indirectly_referenced_types
        );
        Ok(supporting)
    }
}
