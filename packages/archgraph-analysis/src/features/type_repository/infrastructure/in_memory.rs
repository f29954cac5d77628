//! In-memory type repository backed by a petgraph arena
//!
//! Nodes are type names, edges are "A mentions B". Every edge target is a
//! node even when nothing was extracted for it, so external types show up as
//! leaves with no outgoing edges.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

use crate::features::type_repository::ports::TypeRepository;
use crate::shared::models::QualifiedNameConvention;

/// One-shot builder; consumed by [`TypeRepositoryBuilder::build`]
#[derive(Debug, Default)]
pub struct TypeRepositoryBuilder {
    graph: DiGraph<String, ()>,
    index: HashMap<String, NodeIndex>,
    annotations: HashMap<String, BTreeSet<String>>,
    convention: QualifiedNameConvention,
}

impl TypeRepositoryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn convention(mut self, convention: QualifiedNameConvention) -> Self {
        self.convention = convention;
        self
    }

    /// Register a type with no references (idempotent)
    pub fn add_type(&mut self, type_name: impl Into<String>) -> &mut Self {
        self.node(type_name.into());
        self
    }

    /// Record that `from` references `to`; duplicate edges are collapsed
    pub fn add_reference(&mut self, from: impl Into<String>, to: impl Into<String>) -> &mut Self {
        let from = self.node(from.into());
        let to = self.node(to.into());
        self.graph.update_edge(from, to, ());
        self
    }

    pub fn add_references<I, S>(&mut self, from: impl Into<String>, targets: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let from = from.into();
        self.node(from.clone());
        for target in targets {
            self.add_reference(from.clone(), target);
        }
        self
    }

    pub fn add_annotation(
        &mut self,
        type_name: impl Into<String>,
        annotation: impl Into<String>,
    ) -> &mut Self {
        let type_name = type_name.into();
        self.node(type_name.clone());
        self.annotations
            .entry(type_name)
            .or_default()
            .insert(annotation.into());
        self
    }

    pub fn build(self) -> InMemoryTypeRepository {
        debug!(
            "type repository built: {} types, {} references",
            self.graph.node_count(),
            self.graph.edge_count()
        );
        InMemoryTypeRepository {
            graph: self.graph,
            index: self.index,
            annotations: self.annotations,
            convention: self.convention,
        }
    }

    fn node(&mut self, type_name: String) -> NodeIndex {
        if let Some(&index) = self.index.get(&type_name) {
            return index;
        }
        let index = self.graph.add_node(type_name.clone());
        self.index.insert(type_name, index);
        index
    }
}

/// Immutable type repository
///
/// # Examples
///
/// ```rust
/// use archgraph_analysis::features::type_repository::{InMemoryTypeRepository, TypeRepository};
///
/// let repository = InMemoryTypeRepository::from_edges([
///     ("pkg.A", vec!["pkg.B", "pkg.other.C"]),
///     ("pkg.B", vec!["pkg.D"]),
/// ]);
///
/// assert_eq!(repository.referenced_types("pkg.A").len(), 2);
/// assert!(repository.referenced_types("pkg.D").is_empty());
/// assert!(repository.referenced_types("unknown.Type").is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryTypeRepository {
    graph: DiGraph<String, ()>,
    index: HashMap<String, NodeIndex>,
    annotations: HashMap<String, BTreeSet<String>>,
    convention: QualifiedNameConvention,
}

impl InMemoryTypeRepository {
    pub fn builder() -> TypeRepositoryBuilder {
        TypeRepositoryBuilder::new()
    }

    /// Build from `(type, referenced types)` pairs using the dot convention
    pub fn from_edges<I, S, T>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<T>)>,
        S: Into<String>,
        T: Into<String>,
    {
        let mut builder = TypeRepositoryBuilder::new();
        for (from, targets) in edges {
            builder.add_references(from, targets);
        }
        builder.build()
    }

    pub fn reference_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Every recorded `(from, to)` edge
    pub fn references(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.graph.edge_indices().filter_map(move |edge| {
            self.graph
                .edge_endpoints(edge)
                .map(|(from, to)| (self.graph[from].as_str(), self.graph[to].as_str()))
        })
    }

    pub(crate) fn annotation_entries(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.annotations.iter()
    }
}

impl TypeRepository for InMemoryTypeRepository {
    fn referenced_types(&self, type_name: &str) -> BTreeSet<String> {
        match self.index.get(type_name) {
            Some(&node) => self
                .graph
                .neighbors_directed(node, Direction::Outgoing)
                .map(|target| self.graph[target].clone())
                .collect(),
            None => BTreeSet::new(),
        }
    }

    fn all_types(&self) -> BTreeSet<String> {
        self.index.keys().cloned().collect()
    }

    fn contains(&self, type_name: &str) -> bool {
        self.index.contains_key(type_name)
    }

    fn len(&self) -> usize {
        self.graph.node_count()
    }

    fn annotations_of(&self, type_name: &str) -> BTreeSet<String> {
        self.annotations.get(type_name).cloned().unwrap_or_default()
    }

    fn convention(&self) -> QualifiedNameConvention {
        self.convention
    }
}
