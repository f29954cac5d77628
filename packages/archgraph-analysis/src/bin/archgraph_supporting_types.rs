//! Supporting Types CLI
//!
//! Computes supporting types for every component of an architecture model.
//!
//! # Usage
//!
//! ```bash
//! # Analyse with the default strategy (referenced types in the same package)
//! archgraph-supporting-types analyze --types types.json --model model.yaml
//!
//! # Custom strategies, JSON report, write the enriched model back
//! archgraph-supporting-types analyze --types types.json --model model.yaml \
//!     --config analysis.yaml --format json --output model.enriched.yaml
//!
//! # Print the default configuration
//! archgraph-supporting-types default-config
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use archgraph_analysis::config::AnalysisConfig;
use archgraph_analysis::features::type_repository::{TypeGraphSnapshot, TypeRepository};
use archgraph_model::Model;

#[derive(Parser)]
#[command(name = "archgraph-supporting-types")]
#[command(about = "Discover the supporting types of architecture components", long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyse a model against a type graph snapshot
    Analyze {
        /// Type graph snapshot (JSON)
        #[arg(short, long)]
        types: PathBuf,

        /// Architecture model (YAML)
        #[arg(short, long)]
        model: PathBuf,

        /// Analysis configuration (YAML); defaults to the same-package strategy
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Report format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Write the enriched model here (YAML)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Exit with an error if any component fails
        #[arg(long)]
        strict: bool,
    },

    /// Print the default analysis configuration
    DefaultConfig,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Ignore the error if a subscriber is already installed
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Analyze {
            types,
            model,
            config,
            format,
            output,
            strict,
        } => analyze(types, model, config, format, output, strict),
        Commands::DefaultConfig => {
            print!("{}", AnalysisConfig::default().to_yaml()?);
            Ok(())
        }
    }
}

fn analyze(
    types: PathBuf,
    model_path: PathBuf,
    config: Option<PathBuf>,
    format: OutputFormat,
    output: Option<PathBuf>,
    strict: bool,
) -> Result<()> {
    let config = match config {
        Some(path) => AnalysisConfig::from_yaml(&path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AnalysisConfig::default(),
    };

    let repository = TypeGraphSnapshot::from_json_file(&types)
        .with_context(|| format!("Failed to load type graph {}", types.display()))?
        .into_repository();
    info!(
        types = repository.len(),
        references = repository.reference_count(),
        "Loaded type repository"
    );

    let content = std::fs::read_to_string(&model_path)
        .with_context(|| format!("Failed to read model {}", model_path.display()))?;
    let mut model: Model = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse model {}", model_path.display()))?;
    model
        .validate()
        .with_context(|| format!("Invalid model {}", model_path.display()))?;
    debug!(components = model.components().count(), "Loaded model");

    let analyzer = config
        .build_analyzer(Arc::new(repository))
        .context("Failed to build analyzer")?;
    let report = analyzer.analyze_model(&mut model);
    let summary = report.summary();

    match format {
        OutputFormat::Text => println!("{}", summary),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }

    if let Some(path) = output {
        std::fs::write(&path, serde_yaml::to_string(&model)?)
            .with_context(|| format!("Failed to write model {}", path.display()))?;
        info!(path = %path.display(), "Wrote enriched model");
    }

    if strict && !report.is_success() {
        bail!("{} component(s) failed", report.failure_count());
    }
    Ok(())
}
