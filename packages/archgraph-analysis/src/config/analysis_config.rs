//! Top-level analysis configuration (YAML schema v1)

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use archgraph_model::SupportingTypesAssignment;

use super::error::{ConfigError, ConfigResult};
use super::strategy_config::StrategyConfig;
use super::validation::{Validatable, ValidatableCollection};
use crate::features::supporting_types::application::{AnalyzerSettings, SupportingTypesAnalyzer};
use crate::features::supporting_types::domain::DEFAULT_MAX_TRAVERSAL_NODES;
use crate::features::type_repository::TypeRepository;

/// Schema versions this build can read
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

const MAX_TRAVERSAL_NODES_LIMIT: usize = 10_000_000;

/// Settings shared by every strategy and the analyzer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisSettings {
    pub max_traversal_nodes: usize,
    pub parallel: bool,
    pub assignment: SupportingTypesAssignment,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            max_traversal_nodes: DEFAULT_MAX_TRAVERSAL_NODES,
            parallel: true,
            assignment: SupportingTypesAssignment::Replace,
        }
    }
}

impl AnalysisSettings {
    pub fn analyzer_settings(&self) -> AnalyzerSettings {
        AnalyzerSettings {
            parallel: self.parallel,
            assignment: self.assignment,
        }
    }
}

impl Validatable for AnalysisSettings {
    fn validate(&self) -> ConfigResult<()> {
        if !(1..=MAX_TRAVERSAL_NODES_LIMIT).contains(&self.max_traversal_nodes) {
            return Err(ConfigError::range_with_hint(
                "analysis.max_traversal_nodes",
                self.max_traversal_nodes,
                1,
                MAX_TRAVERSAL_NODES_LIMIT,
                "The cap only guards against corrupted type repositories; keep it well above the number of types you analyse",
            ));
        }
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "AnalysisSettings"
    }
}

fn default_strategies() -> Vec<StrategyConfig> {
    vec![StrategyConfig::default()]
}

/// Full configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Schema version (always 1 for v1)
    pub version: u32,
    #[serde(default)]
    pub analysis: AnalysisSettings,
    #[serde(default = "default_strategies")]
    pub strategies: Vec<StrategyConfig>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            version: 1,
            analysis: AnalysisSettings::default(),
            strategies: default_strategies(),
        }
    }
}

impl AnalysisConfig {
    /// Load and validate a YAML file (v1 schema)
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&content)?;
        info!(
            path = %path.display(),
            strategies = config.strategies.len(),
            "Loaded analysis config"
        );
        Ok(config)
    }

    /// Parse and validate YAML text (v1 schema)
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(content)?;

        // Version check before the typed parse so old files get a clear error
        let found = value
            .get("version")
            .ok_or(ConfigError::MissingVersion)?
            .as_u64()
            .ok_or_else(|| ConfigError::Validation("'version' must be an integer".to_string()))?;
        if !SUPPORTED_VERSIONS.iter().any(|v| u64::from(*v) == found) {
            return Err(ConfigError::UnsupportedVersion {
                found,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let config: Self = serde_yaml::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validated analyzer with every configured strategy bound to `repository`
    pub fn build_analyzer(
        &self,
        type_repository: Arc<dyn TypeRepository>,
    ) -> ConfigResult<SupportingTypesAnalyzer> {
        self.validate()?;

        let mut analyzer = SupportingTypesAnalyzer::new(type_repository)
            .with_settings(self.analysis.analyzer_settings());
        for strategy in &self.strategies {
            analyzer.add_strategy(strategy.build(&self.analysis)?);
        }
        Ok(analyzer)
    }
}

impl Validatable for AnalysisConfig {
    fn validate(&self) -> ConfigResult<()> {
        if !SUPPORTED_VERSIONS.contains(&self.version) {
            return Err(ConfigError::UnsupportedVersion {
                found: u64::from(self.version),
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }
        self.analysis.validate()?;
        if self.strategies.is_empty() {
            return Err(ConfigError::EmptyStrategyList {
                context: "strategies".to_string(),
            });
        }
        self.strategies.validate_all()
    }

    fn config_name(&self) -> &'static str {
        "AnalysisConfig"
    }
}
