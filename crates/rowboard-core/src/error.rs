//! Error types for the rowboard-core crate.
//!
//! This module provides the [`ConfigError`] type for configuration and
//! table-document loading errors shared across the workspace.

use camino::Utf8PathBuf;

/// Errors that can occur while loading configuration or table documents.
///
/// # Examples
///
/// ```
/// use rowboard_core::ConfigError;
/// use camino::Utf8PathBuf;
///
/// let error = ConfigError::MissingFile(Utf8PathBuf::from("/some/items.json"));
/// assert!(error.to_string().contains("/some/items.json"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required file does not exist.
    #[error("missing required file: {0}")]
    MissingFile(Utf8PathBuf),

    /// A configuration option has an invalid value.
    #[error("invalid configuration option '{option}': {reason}")]
    InvalidOption {
        /// The name of the invalid option.
        option: String,
        /// Explanation of why the option is invalid.
        reason: String,
    },

    /// An I/O error occurred while reading a file.
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse a JSON document.
    #[error("failed to parse document: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_display() {
        let error = ConfigError::MissingFile(Utf8PathBuf::from("/missing/items.json"));
        assert!(error.to_string().contains("/missing/items.json"));
    }

    #[test]
    fn test_invalid_option_display() {
        let error = ConfigError::InvalidOption {
            option: "concurrency".to_owned(),
            reason: "must be positive".to_owned(),
        };
        let msg = error.to_string();
        assert!(msg.contains("concurrency"));
        assert!(msg.contains("must be positive"));
    }

    #[test]
    fn test_parse_error_from_serde() {
        let result: Result<crate::Config, _> = serde_json::from_str("not json");
        let error = ConfigError::from(result.unwrap_err());
        assert!(matches!(error, ConfigError::Parse(_)));
    }
}
