//! Error types for archgraph-analysis
//!
//! Every failure is scoped to a single component analysis. The analyzer
//! records it in that component's outcome and moves on to the siblings.

use std::fmt;
use thiserror::Error;

use archgraph_model::ModelError;

/// Analysis error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Strategy invoked before a type repository was bound
    NotConfigured,
    /// Type name cannot be split into package + simple name
    MalformedTypeName,
    /// Traversal visited more types than the configured cap
    TraversalLimitExceeded,
    /// Writing results violated a model invariant
    Model,
    /// Snapshot (de)serialization errors
    Serialization,
    /// I/O errors
    IO,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotConfigured => "not_configured",
            ErrorKind::MalformedTypeName => "malformed_type_name",
            ErrorKind::TraversalLimitExceeded => "traversal_limit_exceeded",
            ErrorKind::Model => "model",
            ErrorKind::Serialization => "serialization",
            ErrorKind::IO => "io",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Analysis error type
#[derive(Debug, Error)]
#[error("[{kind}] {message}")]
pub struct AnalysisError {
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
    pub kind: ErrorKind,
    pub message: String,
    /// Type name the error is about (offending name or primary type)
    pub subject: Option<String>,
}

impl AnalysisError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            subject: None,
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    // Convenience constructors
    pub fn not_configured(strategy: &str) -> Self {
        Self::new(
            ErrorKind::NotConfigured,
            format!("No type repository has been configured for {}", strategy),
        )
    }

    pub fn malformed_type_name(type_name: impl Into<String>, reason: &str) -> Self {
        let type_name = type_name.into();
        Self::new(
            ErrorKind::MalformedTypeName,
            format!("Malformed type name '{}': {}", type_name, reason),
        )
        .with_subject(type_name)
    }

    pub fn traversal_limit_exceeded(primary_type: impl Into<String>, limit: usize) -> Self {
        let primary_type = primary_type.into();
        Self::new(
            ErrorKind::TraversalLimitExceeded,
            format!(
                "Traversal from '{}' visited more than {} types; the type repository is likely corrupted",
                primary_type, limit
            ),
        )
        .with_subject(primary_type)
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IO, message)
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        AnalysisError::serialization(format!("JSON error: {}", err)).with_source(err)
    }
}

impl From<std::io::Error> for AnalysisError {
    fn from(err: std::io::Error) -> Self {
        AnalysisError::io(format!("IO error: {}", err)).with_source(err)
    }
}

impl From<ModelError> for AnalysisError {
    fn from(err: ModelError) -> Self {
        AnalysisError::new(ErrorKind::Model, err.to_string()).with_source(err)
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_not_configured_display() {
        let err = AnalysisError::not_configured("ReferencedTypesSupportingTypesStrategy");
        assert_eq!(err.kind, ErrorKind::NotConfigured);
        assert_eq!(
            err.to_string(),
            "[not_configured] No type repository has been configured for ReferencedTypesSupportingTypesStrategy"
        );
    }

    #[test]
    fn test_malformed_type_name_carries_subject() {
        let err = AnalysisError::malformed_type_name("pkg..A", "empty segment");
        assert_eq!(err.kind, ErrorKind::MalformedTypeName);
        assert_eq!(err.subject.as_deref(), Some("pkg..A"));
        assert!(err.to_string().contains("empty segment"));
    }

    #[test]
    fn test_traversal_limit_names_primary_type() {
        let err = AnalysisError::traversal_limit_exceeded("com.bank.A", 10);
        assert_eq!(err.kind, ErrorKind::TraversalLimitExceeded);
        assert_eq!(err.subject.as_deref(), Some("com.bank.A"));
        let msg = err.to_string();
        assert!(msg.contains("[traversal_limit_exceeded]"));
        assert!(msg.contains("com.bank.A"));
        assert!(msg.contains("10"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json")
            .err()
            .unwrap();
        let err: AnalysisError = json_err.into();
        assert_eq!(err.kind, ErrorKind::Serialization);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_from_model_error() {
        let err: AnalysisError = ModelError::EmptyName {
            element: "Component",
        }
        .into();
        assert_eq!(err.kind, ErrorKind::Model);
        assert!(err.message.contains("Component name"));
    }

    #[test]
    fn test_error_kind_as_str() {
        assert_eq!(ErrorKind::NotConfigured.as_str(), "not_configured");
        assert_eq!(ErrorKind::MalformedTypeName.as_str(), "malformed_type_name");
        assert_eq!(ErrorKind::IO.as_str(), "io");
    }
}
