//! Core types, configuration, and errors for rowboard.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - Configuration structures (`Config`, `FetchConfig`, `TuiConfig`)
//! - Error types for consistent error handling
//! - Domain types (`TableDoc`, `RowItem`, `RowContent`)
//!
//! The crate is deliberately UI-framework-free: the table document and its
//! rows know nothing about how they are rendered.

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod types;

pub use config::{ColorScheme, Config, FetchConfig, TuiConfig};
pub use error::ConfigError;
pub use types::{Emphasis, RichSpan, RowContent, RowItem, TableDoc};
