//! Fully-qualified type names
//!
//! A qualified name is a non-empty sequence of non-empty segments joined by
//! the convention's separator. The package is every segment but the last;
//! a single-segment name lives in the default (empty) package.
//!
//! ```text
//! com.bank.accounts.AccountMapper
//! └──── package ──┘ └─ simple ──┘
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{AnalysisError, Result};

/// Qualification convention of the analysed source language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualifiedNameConvention {
    /// `com.bank.Account` (JVM, .NET)
    #[default]
    Dot,
    /// `bank::accounts::Account` (Rust, C++)
    DoubleColon,
}

impl QualifiedNameConvention {
    pub fn separator(&self) -> &'static str {
        match self {
            Self::Dot => ".",
            Self::DoubleColon => "::",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::DoubleColon => "double_colon",
        }
    }

    /// Split a name into `(package, simple_name)`
    ///
    /// # Errors
    ///
    /// `MalformedTypeName` for empty names, names with empty segments
    /// (including leading or trailing separators) and, under `::`, segments
    /// holding a lone `:`.
    pub fn split<'a>(&self, type_name: &'a str) -> Result<(&'a str, &'a str)> {
        if type_name.trim().is_empty() {
            return Err(AnalysisError::malformed_type_name(
                type_name,
                "type name is empty",
            ));
        }

        let separator = self.separator();
        if type_name.split(separator).any(|segment| segment.is_empty()) {
            return Err(AnalysisError::malformed_type_name(
                type_name,
                "type name contains an empty segment",
            ));
        }
        if matches!(self, Self::DoubleColon)
            && type_name.split(separator).any(|segment| segment.contains(':'))
        {
            return Err(AnalysisError::malformed_type_name(
                type_name,
                "type name contains a stray ':'",
            ));
        }

        Ok(match type_name.rfind(separator) {
            Some(index) => (&type_name[..index], &type_name[index + separator.len()..]),
            None => ("", type_name),
        })
    }

    /// Package of a fully-qualified name (empty for the default package)
    pub fn package_of<'a>(&self, type_name: &'a str) -> Result<&'a str> {
        self.split(type_name).map(|(package, _)| package)
    }

    /// Final segment of a fully-qualified name
    pub fn simple_name<'a>(&self, type_name: &'a str) -> Result<&'a str> {
        self.split(type_name).map(|(_, simple)| simple)
    }

    /// Whether `package` equals `ancestor` or is nested below it,
    /// compared segment by segment
    pub fn is_within(&self, package: &str, ancestor: &str) -> bool {
        if ancestor.is_empty() || package == ancestor {
            return true;
        }
        package
            .strip_prefix(ancestor)
            .is_some_and(|rest| rest.starts_with(self.separator()))
    }
}

impl std::fmt::Display for QualifiedNameConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which types count as "in" a component's package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageScope {
    /// Package of the type equals the component's package
    #[default]
    Exact,
    /// Package of the type is the component's package or nested below it
    Subpackages,
}

impl PackageScope {
    /// Test whether `type_name` belongs to `package` under this scope
    pub fn contains(
        &self,
        convention: QualifiedNameConvention,
        package: &str,
        type_name: &str,
    ) -> Result<bool> {
        let type_package = convention.package_of(type_name)?;
        Ok(match self {
            Self::Exact => type_package == package,
            Self::Subpackages => convention.is_within(type_package, package),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    const DOT: QualifiedNameConvention = QualifiedNameConvention::Dot;

    #[test]
    fn test_package_of_qualified_name() {
        assert_eq!(DOT.package_of("com.bank.Account").unwrap(), "com.bank");
        assert_eq!(DOT.simple_name("com.bank.Account").unwrap(), "Account");
    }

    #[test]
    fn test_package_of_default_package() {
        assert_eq!(DOT.package_of("Account").unwrap(), "");
    }

    #[test]
    fn test_nested_type_marker_is_not_a_separator() {
        assert_eq!(DOT.package_of("com.bank.Outer$Inner").unwrap(), "com.bank");
    }

    #[test]
    fn test_malformed_names() {
        for name in ["", "   ", ".Account", "com.bank.", "com..Account"] {
            let err = DOT.package_of(name).unwrap_err();
            assert_eq!(err.kind, ErrorKind::MalformedTypeName, "name: {:?}", name);
        }
    }

    #[test]
    fn test_double_colon_convention() {
        let convention = QualifiedNameConvention::DoubleColon;
        assert_eq!(
            convention.package_of("bank::accounts::Account").unwrap(),
            "bank::accounts"
        );
        assert_eq!(convention.package_of("Account").unwrap(), "");
        assert!(convention.package_of("bank::").is_err());
    }

    #[test]
    fn test_double_colon_rejects_stray_colons() {
        let convention = QualifiedNameConvention::DoubleColon;
        for name in ["a:::B", "a::B:", ":a::B", "a:b::C"] {
            let err = convention.package_of(name).unwrap_err();
            assert_eq!(err.kind, ErrorKind::MalformedTypeName, "{}", name);
        }
        assert_eq!(convention.package_of("a::b::C").unwrap(), "a::b");
    }

    #[test]
    fn test_is_within_respects_segment_boundaries() {
        assert!(DOT.is_within("pkg", "pkg"));
        assert!(DOT.is_within("pkg.other", "pkg"));
        assert!(!DOT.is_within("pkgother", "pkg"));
        assert!(!DOT.is_within("pk", "pkg"));
        assert!(DOT.is_within("anything", ""));
    }

    #[test]
    fn test_exact_scope() {
        let scope = PackageScope::Exact;
        assert!(scope.contains(DOT, "pkg", "pkg.B").unwrap());
        assert!(!scope.contains(DOT, "pkg", "pkg.other.C").unwrap());
        assert!(!scope.contains(DOT, "pkg", "pkgother.X").unwrap());
    }

    #[test]
    fn test_subpackages_scope() {
        let scope = PackageScope::Subpackages;
        assert!(scope.contains(DOT, "pkg", "pkg.B").unwrap());
        assert!(scope.contains(DOT, "pkg", "pkg.other.C").unwrap());
        assert!(!scope.contains(DOT, "pkg", "pkgother.X").unwrap());
    }

    #[test]
    fn test_scope_propagates_malformed_name() {
        assert!(PackageScope::Exact.contains(DOT, "pkg", "pkg.").is_err());
    }

    #[test]
    fn test_convention_serde_names() {
        let convention: QualifiedNameConvention = serde_yaml::from_str("double_colon").unwrap();
        assert_eq!(convention, QualifiedNameConvention::DoubleColon);
        assert_eq!(PackageScope::Subpackages, serde_yaml::from_str("subpackages").unwrap());
    }
}
