//! TUI-specific error types.
//!
//! This module provides the [`TuiError`] type for handling errors
//! that can occur during TUI operations.

use thiserror::Error;

/// Errors that can occur in the TUI.
///
/// This enum captures all error conditions specific to the terminal
/// user interface, including terminal initialization failures and
/// integration errors with the fetcher crate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TuiError {
    /// Terminal initialization or operation failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Event channel was closed unexpectedly.
    #[error("event channel closed unexpectedly")]
    ChannelClosed,

    /// Supplemental-content fetcher failed to start.
    #[error("fetcher error: {0}")]
    Fetch(#[from] rowboard_fetch::FetchError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl TuiError {
    /// Creates a new configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
