//! Error types for the rowboard-fetch crate.
//!
//! Per-request failures are not errors here; they collapse into "no
//! supplemental content". [`FetchError`] covers only setup problems that
//! prevent the fetcher from starting at all.

use thiserror::Error;

/// Errors that can occur while setting up the fetcher.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    /// The configured base URL could not be parsed.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The offending URL string.
        url: String,
        /// Explanation of why it failed to parse.
        reason: String,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    /// The outcome channel was closed unexpectedly.
    #[error("outcome channel closed unexpectedly")]
    ChannelClosed,
}

impl FetchError {
    /// Creates an invalid-base-URL error.
    #[must_use]
    pub fn invalid_base_url(url: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::InvalidBaseUrl {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_base_url_display() {
        let err = FetchError::invalid_base_url("not a url", "relative URL without a base");
        let msg = err.to_string();
        assert!(msg.contains("not a url"));
        assert!(msg.contains("relative URL without a base"));
    }

    #[test]
    fn test_channel_closed_display() {
        let err = FetchError::ChannelClosed;
        assert_eq!(err.to_string(), "outcome channel closed unexpectedly");
    }
}
