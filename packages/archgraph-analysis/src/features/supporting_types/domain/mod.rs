//! Domain models for supporting-type discovery
//!
//! Pure data, no repository access.

use std::collections::BTreeSet;

use archgraph_model::{Component, Container};

/// Default cap on the number of types one traversal may visit
pub const DEFAULT_MAX_TRAVERSAL_NODES: usize = 100_000;

/// What a strategy sees of a component
///
/// Carries the primary type and the primary types of every other component
/// in the same container. Types in either are never supporting types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentView<'a> {
    pub name: &'a str,
    pub primary_type: &'a str,
    pub sibling_primary_types: BTreeSet<&'a str>,
}

impl<'a> ComponentView<'a> {
    /// View of a component with no siblings
    pub fn new(name: &'a str, primary_type: &'a str) -> Self {
        Self {
            name,
            primary_type,
            sibling_primary_types: BTreeSet::new(),
        }
    }

    pub fn with_siblings<I>(mut self, sibling_primary_types: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let primary_type = self.primary_type;
        self.sibling_primary_types
            .extend(sibling_primary_types.into_iter().filter(|t| *t != primary_type));
        self
    }

    /// View of `component` as a member of `container`
    pub fn in_container(container: &'a Container, component: &'a Component) -> Self {
        Self::new(&component.name, component.primary_type())
            .with_siblings(container.sibling_primary_types(&component.name))
    }

    /// Views of every component in `container`, in declaration order
    pub fn all_in_container(container: &'a Container) -> Vec<Self> {
        container
            .components()
            .iter()
            .map(|component| Self::in_container(container, component))
            .collect()
    }

    /// Whether a type can never support this component
    pub fn excludes(&self, type_name: &str) -> bool {
        type_name == self.primary_type || self.sibling_primary_types.contains(type_name)
    }

    /// Drop every excluded type from `types`
    pub fn retain_supporting(&self, types: BTreeSet<String>) -> BTreeSet<String> {
        types.into_iter().filter(|t| !self.excludes(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excludes_own_and_sibling_primary_types() {
        let view = ComponentView::new("A", "pkg.A").with_siblings(["pkg.C"]);
        assert!(view.excludes("pkg.A"));
        assert!(view.excludes("pkg.C"));
        assert!(!view.excludes("pkg.B"));
    }

    #[test]
    fn test_with_siblings_ignores_own_primary_type() {
        let view = ComponentView::new("A", "pkg.A").with_siblings(["pkg.A", "pkg.C"]);
        assert_eq!(view.sibling_primary_types, BTreeSet::from(["pkg.C"]));
    }

    #[test]
    fn test_all_in_container() {
        let mut container = Container::new("API", "Java");
        container.add_component("A", "pkg.A").unwrap();
        container.add_component("C", "pkg.other.C").unwrap();

        let views = ComponentView::all_in_container(&container);
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].sibling_primary_types, BTreeSet::from(["pkg.other.C"]));
        assert_eq!(views[1].sibling_primary_types, BTreeSet::from(["pkg.A"]));
    }

    #[test]
    fn test_retain_supporting() {
        let view = ComponentView::new("A", "pkg.A").with_siblings(["pkg.C"]);
        let types: BTreeSet<String> = ["pkg.A", "pkg.B", "pkg.C"].iter().map(|s| s.to_string()).collect();
        let retained = view.retain_supporting(types);
        assert_eq!(retained.len(), 1);
        assert!(retained.contains("pkg.B"));
    }
}
