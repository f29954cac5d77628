//! Strategy configuration
//!
//! Each entry of `strategies:` is tagged by `kind`; decorators nest their
//! inner strategy under `inner`.
//!
//! ```yaml
//! - kind: matching_types
//!   inner:
//!     kind: referenced_types
//!   matcher:
//!     type: name_suffix
//!     suffix: Mapper
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::analysis_config::AnalysisSettings;
use super::error::{ConfigError, ConfigResult};
use super::validation::{Validatable, ValidatableCollection};
use crate::features::supporting_types::infrastructure::{
    AllTypesInPackageSupportingTypesStrategy, AllTypesUnderPackageSupportingTypesStrategy,
    AnnotationTypeMatcher, CompositeSupportingTypesStrategy, ExplicitTypesSupportingTypesStrategy,
    MatchingTypesSupportingTypesStrategy, NameSuffixTypeMatcher,
    ReferencedTypesInSamePackageSupportingTypesStrategy, ReferencedTypesSupportingTypesStrategy,
    RegexTypeMatcher, TypeMatcher,
};
use crate::features::supporting_types::ports::SupportingTypesStrategy;
use crate::shared::models::PackageScope;

fn default_true() -> bool {
    true
}

/// One configured strategy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StrategyConfig {
    ReferencedTypes {
        #[serde(default = "default_true")]
        include_indirect: bool,
    },
    ReferencedTypesInSamePackage {
        #[serde(default = "default_true")]
        include_indirect: bool,
        #[serde(default)]
        scope: PackageScope,
    },
    AllTypesInPackage,
    AllTypesUnderPackage,
    MatchingTypes {
        inner: Box<StrategyConfig>,
        matcher: MatcherConfig,
    },
    ExplicitTypes {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        inner: Option<Box<StrategyConfig>>,
        #[serde(default)]
        include: BTreeSet<String>,
        #[serde(default)]
        exclude: BTreeSet<String>,
    },
    Composite {
        strategies: Vec<StrategyConfig>,
    },
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self::ReferencedTypesInSamePackage {
            include_indirect: true,
            scope: PackageScope::Exact,
        }
    }
}

impl StrategyConfig {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ReferencedTypes { .. } => "referenced_types",
            Self::ReferencedTypesInSamePackage { .. } => "referenced_types_in_same_package",
            Self::AllTypesInPackage => "all_types_in_package",
            Self::AllTypesUnderPackage => "all_types_under_package",
            Self::MatchingTypes { .. } => "matching_types",
            Self::ExplicitTypes { .. } => "explicit_types",
            Self::Composite { .. } => "composite",
        }
    }

    /// Instantiate the strategy (repository not yet bound)
    pub fn build(&self, settings: &AnalysisSettings) -> ConfigResult<Box<dyn SupportingTypesStrategy>> {
        let strategy: Box<dyn SupportingTypesStrategy> = match self {
            Self::ReferencedTypes { include_indirect } => Box::new(
                ReferencedTypesSupportingTypesStrategy::new(*include_indirect)
                    .with_max_traversal_nodes(settings.max_traversal_nodes),
            ),
            Self::ReferencedTypesInSamePackage {
                include_indirect,
                scope,
            } => Box::new(
                ReferencedTypesInSamePackageSupportingTypesStrategy::new(*include_indirect)
                    .with_scope(*scope)
                    .with_max_traversal_nodes(settings.max_traversal_nodes),
            ),
            Self::AllTypesInPackage => Box::new(AllTypesInPackageSupportingTypesStrategy::new()),
            Self::AllTypesUnderPackage => {
                Box::new(AllTypesUnderPackageSupportingTypesStrategy::new())
            }
            Self::MatchingTypes { inner, matcher } => Box::new(
                MatchingTypesSupportingTypesStrategy::new(inner.build(settings)?, matcher.build()?),
            ),
            Self::ExplicitTypes {
                inner,
                include,
                exclude,
            } => {
                let strategy = match inner {
                    Some(inner) => ExplicitTypesSupportingTypesStrategy::wrapping(inner.build(settings)?),
                    None => ExplicitTypesSupportingTypesStrategy::new(),
                };
                Box::new(
                    strategy
                        .include(include.iter().cloned())
                        .exclude(exclude.iter().cloned()),
                )
            }
            Self::Composite { strategies } => {
                let mut composite = CompositeSupportingTypesStrategy::new();
                for child in strategies {
                    composite.add_strategy(child.build(settings)?);
                }
                Box::new(composite)
            }
        };
        Ok(strategy)
    }
}

impl Validatable for StrategyConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self {
            Self::MatchingTypes { inner, matcher } => {
                inner.validate()?;
                matcher.validate()
            }
            Self::ExplicitTypes { inner, .. } => match inner {
                Some(inner) => inner.validate(),
                None => Ok(()),
            },
            Self::Composite { strategies } => {
                if strategies.is_empty() {
                    return Err(ConfigError::EmptyStrategyList {
                        context: "composite strategy".to_string(),
                    });
                }
                strategies.validate_all()
            }
            _ => Ok(()),
        }
    }

    fn config_name(&self) -> &'static str {
        "StrategyConfig"
    }
}

/// Type filter for `matching_types`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatcherConfig {
    NameSuffix { suffix: String },
    Regex { pattern: String },
    Annotation { annotation: String },
}

impl MatcherConfig {
    pub fn build(&self) -> ConfigResult<Box<dyn TypeMatcher>> {
        let matcher: Box<dyn TypeMatcher> = match self {
            Self::NameSuffix { suffix } => Box::new(NameSuffixTypeMatcher::new(suffix.clone())),
            Self::Regex { pattern } => Box::new(
                RegexTypeMatcher::new(pattern)
                    .map_err(|err| ConfigError::invalid_pattern(pattern.clone(), &err))?,
            ),
            Self::Annotation { annotation } => {
                Box::new(AnnotationTypeMatcher::new(annotation.clone()))
            }
        };
        Ok(matcher)
    }
}

impl Validatable for MatcherConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self {
            Self::NameSuffix { suffix } if suffix.is_empty() => Err(ConfigError::Validation(
                "name_suffix matcher needs a non-empty suffix".to_string(),
            )),
            Self::Annotation { annotation } if annotation.is_empty() => Err(
                ConfigError::Validation("annotation matcher needs a non-empty annotation".to_string()),
            ),
            Self::Regex { pattern } => regex::Regex::new(pattern)
                .map(|_| ())
                .map_err(|err| ConfigError::invalid_pattern(pattern.clone(), &err)),
            _ => Ok(()),
        }
    }

    fn config_name(&self) -> &'static str {
        "MatcherConfig"
    }
}
