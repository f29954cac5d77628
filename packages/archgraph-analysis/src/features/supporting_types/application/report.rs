//! Analysis reports

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{AnalysisError, Result};

/// Result of analysing one component
#[derive(Debug)]
pub struct ComponentOutcome {
    pub component: String,
    pub primary_type: String,
    /// Discovered supporting types, or why discovery failed
    pub result: Result<BTreeSet<String>>,
}

impl ComponentOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn supporting_types(&self) -> Option<&BTreeSet<String>> {
        self.result.as_ref().ok()
    }

    pub fn error(&self) -> Option<&AnalysisError> {
        self.result.as_ref().err()
    }
}

/// Outcomes for every component of one container, in declaration order
#[derive(Debug)]
pub struct ContainerReport {
    pub container: String,
    pub outcomes: Vec<ComponentOutcome>,
}

impl ContainerReport {
    pub fn succeeded(&self) -> impl Iterator<Item = &ComponentOutcome> {
        self.outcomes.iter().filter(|o| o.is_success())
    }

    pub fn failed(&self) -> impl Iterator<Item = &ComponentOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(ComponentOutcome::is_success)
    }
}

/// Outcomes for a whole model
#[derive(Debug, Default)]
pub struct AnalysisReport {
    pub containers: Vec<ContainerReport>,
}

impl AnalysisReport {
    pub fn outcomes(&self) -> impl Iterator<Item = &ComponentOutcome> {
        self.containers.iter().flat_map(|c| c.outcomes.iter())
    }

    pub fn failures(&self) -> impl Iterator<Item = &ComponentOutcome> {
        self.outcomes().filter(|o| !o.is_success())
    }

    pub fn component_count(&self) -> usize {
        self.outcomes().count()
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    /// Total number of supporting types discovered
    pub fn supporting_type_count(&self) -> usize {
        self.outcomes()
            .filter_map(ComponentOutcome::supporting_types)
            .map(BTreeSet::len)
            .sum()
    }

    pub fn is_success(&self) -> bool {
        self.containers.iter().all(ContainerReport::is_success)
    }

    /// Serializable view of the report
    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            components: self.component_count(),
            failures: self.failure_count(),
            supporting_types: self.supporting_type_count(),
            containers: self
                .containers
                .iter()
                .map(|container| ContainerSummary {
                    container: container.container.clone(),
                    components: container.outcomes.iter().map(ComponentSummary::from).collect(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub components: usize,
    pub failures: usize,
    pub supporting_types: usize,
    pub containers: Vec<ContainerSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerSummary {
    pub container: String,
    pub components: Vec<ComponentSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSummary {
    pub component: String,
    pub primary_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supporting_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&ComponentOutcome> for ComponentSummary {
    fn from(outcome: &ComponentOutcome) -> Self {
        let (supporting_types, error_kind, error) = match &outcome.result {
            Ok(types) => (types.iter().cloned().collect(), None, None),
            Err(err) => (
                Vec::new(),
                Some(err.kind.as_str().to_string()),
                Some(err.message.clone()),
            ),
        };
        Self {
            component: outcome.component.clone(),
            primary_type: outcome.primary_type.clone(),
            supporting_types,
            error_kind,
            error,
        }
    }
}

impl fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for container in &self.containers {
            writeln!(f, "{}", container.container)?;
            for component in &container.components {
                match &component.error {
                    None => {
                        writeln!(
                            f,
                            "  {} ({}): {} supporting types",
                            component.component,
                            component.primary_type,
                            component.supporting_types.len()
                        )?;
                        for type_name in &component.supporting_types {
                            writeln!(f, "    - {}", type_name)?;
                        }
                    }
                    Some(error) => {
                        writeln!(
                            f,
                            "  {} ({}): FAILED [{}] {}",
                            component.component,
                            component.primary_type,
                            component.error_kind.as_deref().unwrap_or("unknown"),
                            error
                        )?;
                    }
                }
            }
        }
        write!(
            f,
            "{} components, {} failed, {} supporting types",
            self.components, self.failures, self.supporting_types
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> AnalysisReport {
        AnalysisReport {
            containers: vec![ContainerReport {
                container: "API".to_string(),
                outcomes: vec![
                    ComponentOutcome {
                        component: "A".to_string(),
                        primary_type: "pkg.A".to_string(),
                        result: Ok(BTreeSet::from(["pkg.B".to_string(), "pkg.D".to_string()])),
                    },
                    ComponentOutcome {
                        component: "X".to_string(),
                        primary_type: "pkg.X".to_string(),
                        result: Err(AnalysisError::traversal_limit_exceeded("pkg.X", 5)),
                    },
                ],
            }],
        }
    }

    #[test]
    fn test_counts() {
        let report = report();
        assert_eq!(report.component_count(), 2);
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.supporting_type_count(), 2);
        assert!(!report.is_success());
        assert_eq!(report.containers[0].succeeded().count(), 1);
    }

    #[test]
    fn test_summary_json_skips_empty_fields() {
        let summary = report().summary();
        let json = serde_json::to_value(&summary).unwrap();

        let components = &json["containers"][0]["components"];
        assert_eq!(components[0]["supporting_types"][1], "pkg.D");
        assert!(components[0].get("error").is_none());
        assert_eq!(components[1]["error_kind"], "traversal_limit_exceeded");
        assert!(components[1].get("supporting_types").is_none());
    }

    #[test]
    fn test_summary_text() {
        let text = report().summary().to_string();
        assert!(text.contains("A (pkg.A): 2 supporting types"));
        assert!(text.contains("    - pkg.B"));
        assert!(text.contains("X (pkg.X): FAILED [traversal_limit_exceeded]"));
        assert!(text.ends_with("2 components, 1 failed, 2 supporting types"));
    }
}
