//! Application layer - runs strategies over a whole architecture model

mod analyzer;
mod report;

pub use analyzer::{AnalyzerSettings, SupportingTypesAnalyzer};
pub use report::{
    AnalysisReport, ComponentOutcome, ComponentSummary, ContainerReport, ContainerSummary,
    ReportSummary,
};
