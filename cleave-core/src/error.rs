//! Error types for the chunking engine

use thiserror::Error;

/// Errors surfaced by the public API
///
/// Only configuration problems are reported this way. Every valid input
/// (including empty text) segments successfully.
#[derive(Error, Debug)]
pub enum CleaveError {
    /// Rejected splitter configuration
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// No separator table is registered under the requested name
    #[error("language '{name}' not supported")]
    UnknownLanguage {
        /// The name that failed to resolve
        name: String,
    },

    /// A custom pattern separator failed to compile
    #[error("invalid separator pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Result type for chunking operations
pub type Result<T> = std::result::Result<T, CleaveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_display() {
        let error = CleaveError::InvalidConfig("chunk size must be greater than 0".to_string());
        assert_eq!(
            error.to_string(),
            "invalid configuration: chunk size must be greater than 0"
        );
    }

    #[test]
    fn test_unknown_language_display() {
        let error = CleaveError::UnknownLanguage {
            name: "cobol".to_string(),
        };
        assert_eq!(error.to_string(), "language 'cobol' not supported");
    }

    #[test]
    fn test_regex_error_conversion() {
        let regex_error = regex::Regex::new("(unclosed").unwrap_err();
        let error: CleaveError = regex_error.into();
        assert!(matches!(error, CleaveError::InvalidPattern(_)));
        assert!(error.to_string().starts_with("invalid separator pattern"));
    }
}
