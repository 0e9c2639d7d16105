//! Error types for naming resolution and namespace planning.
//!
//! Each stage owns a narrow error type; [`CodegenError`] wraps them for the
//! pipeline so a single `?` carries any fatal condition up to the caller.

use thiserror::Error;

/// An identifier could not be rendered in the requested casing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("String {text} is not convertible to {target_case}")]
pub struct CaseConversionError {
    pub target_case: String,
    pub text: String,
}

impl CaseConversionError {
    pub fn new(target_case: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            target_case: target_case.into(),
            text: text.into(),
        }
    }
}

/// A raw schema identifier did not match the shape a parser expected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{identifier} is not {shape} identifier")]
pub struct IdentifierParseError {
    pub identifier: String,
    pub shape: &'static str,
}

/// The endpoint graph is not a rooted tree after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizationError {
    #[error("Normalization failed. Endpoint {endpoint} has multiple paths from root.")]
    MultiplePaths { endpoint: String },

    #[error("Normalization failed. Endpoint {endpoint} is not reachable from root.")]
    Unreachable { endpoint: String },
}

/// Any fatal condition raised while planning a generation run.
#[derive(Debug, Error)]
pub enum CodegenError {
    #[error(transparent)]
    CaseConversion(#[from] CaseConversionError),

    #[error(transparent)]
    IdentifierParse(#[from] IdentifierParseError),

    #[error(transparent)]
    Normalization(#[from] NormalizationError),

    #[error("Path segment '{segment}' of endpoint {path} matches no name pattern")]
    UntranslatableSegment { segment: String, path: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Yaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

pub type Result<T, E = CodegenError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_conversion_message() {
        let err = CaseConversionError::new("snake_case", "$metadata");
        assert_eq!(err.to_string(), "String $metadata is not convertible to snake_case");
    }

    #[test]
    fn test_wrapped_errors_are_transparent() {
        let err: CodegenError = NormalizationError::MultiplePaths {
            endpoint: "/redfish/v1/Chassis".to_string(),
        }
        .into();
        assert!(err.to_string().contains("/redfish/v1/Chassis has multiple paths"));
    }
}
