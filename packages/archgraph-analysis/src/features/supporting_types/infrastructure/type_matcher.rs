//! Type matchers used to narrow a strategy's result

use regex::Regex;
use std::fmt;

use crate::features::type_repository::TypeRepository;

/// Predicate over fully-qualified type names
pub trait TypeMatcher: Send + Sync + fmt::Debug {
    fn matches(&self, type_name: &str, repository: &dyn TypeRepository) -> bool;

    fn description(&self) -> String;
}

/// Simple name ends with a suffix (`Impl`, `Mapper`, ...)
#[derive(Debug, Clone)]
pub struct NameSuffixTypeMatcher {
    suffix: String,
}

impl NameSuffixTypeMatcher {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }
}

impl TypeMatcher for NameSuffixTypeMatcher {
    fn matches(&self, type_name: &str, repository: &dyn TypeRepository) -> bool {
        repository
            .convention()
            .simple_name(type_name)
            .is_ok_and(|simple| simple.ends_with(&self.suffix))
    }

    fn description(&self) -> String {
        format!("simple name ends with '{}'", self.suffix)
    }
}

/// Fully-qualified name matches a regular expression
#[derive(Debug, Clone)]
pub struct RegexTypeMatcher {
    regex: Regex,
}

impl RegexTypeMatcher {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }
}

impl TypeMatcher for RegexTypeMatcher {
    fn matches(&self, type_name: &str, _repository: &dyn TypeRepository) -> bool {
        self.regex.is_match(type_name)
    }

    fn description(&self) -> String {
        format!("name matches /{}/", self.regex.as_str())
    }
}

/// Type carries an annotation recorded by the extractor
#[derive(Debug, Clone)]
pub struct AnnotationTypeMatcher {
    annotation: String,
}

impl AnnotationTypeMatcher {
    pub fn new(annotation: impl Into<String>) -> Self {
        Self {
            annotation: annotation.into(),
        }
    }
}

impl TypeMatcher for AnnotationTypeMatcher {
    fn matches(&self, type_name: &str, repository: &dyn TypeRepository) -> bool {
        repository
            .annotations_of(type_name)
            .contains(&self.annotation)
    }

    fn description(&self) -> String {
        format!("annotated with '{}'", self.annotation)
    }
}
