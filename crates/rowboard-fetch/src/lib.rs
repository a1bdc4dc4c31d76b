//! Asynchronous supplemental-content fetcher with event streaming.
//!
//! This crate fetches each table row's supplemental content from its `href`
//! and streams the outcomes to an async consumer, bridging the HTTP client
//! to the TUI event loop through a tokio mpsc channel.
//!
//! # Overview
//!
//! The rowboard-fetch crate is designed to:
//!
//! - Issue exactly one GET per row, at mount time, never again
//! - Resolve relative locators (`/x`) against a configurable base URL
//! - Collapse every failure mode (transport error, bad status, undecodable
//!   body, missing field) into "no supplemental content"
//! - Stream outcomes asynchronously to the TUI as they resolve
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                  Background Task (tokio::spawn)                 │
//! │  ┌──────────────┐    ┌──────────────────┐    ┌──────────────┐  │
//! │  │ reqwest GET  │ -> │ buffer_unordered │ -> │ FetchOutcome │  │
//! │  │ (per row)    │    │ (bounded)        │    │ per request  │  │
//! │  └──────────────┘    └──────────────────┘    └──────┬───────┘  │
//! └──────────────────────────────────────────────────────│──────────┘
//!                                                        │ send
//!                                                        ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Async Runtime (tokio)                        │
//! │  ┌──────────────────┐    ┌────────────────┐                     │
//! │  │ ExtraFetcher     │    │ mpsc::Receiver │ -> TUI Event Loop   │
//! │  │ (abort on drop)  │    │ (outcomes)     │                     │
//! │  └──────────────────┘    └────────────────┘                     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use rowboard_core::{FetchConfig, RowItem};
//! use rowboard_fetch::ExtraFetcher;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), rowboard_fetch::FetchError> {
//!     let config = FetchConfig {
//!         base_url: Some("https://example.com".to_owned()),
//!         ..FetchConfig::default()
//!     };
//!     let items = vec![RowItem::new("Feature A", "/x")];
//!
//!     let mut fetcher = ExtraFetcher::spawn(&config, &items)?;
//!
//!     // Outcomes arrive in completion order; the channel closes when
//!     // every row has resolved.
//!     while let Some(outcome) = fetcher.recv().await {
//!         if let Some(extra) = outcome.extra {
//!             println!("row {}: {extra}", outcome.index);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! Per-request failures never surface: a row whose fetch fails is
//! indistinguishable from a row whose response has no `extraContent`. Only
//! setup problems (a malformed base URL, a client that cannot be built) are
//! reported, via [`FetchError`].

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod error;
pub mod fetcher;
pub mod outcome;
pub mod response;

pub use error::FetchError;
pub use fetcher::ExtraFetcher;
pub use outcome::FetchOutcome;
pub use response::ExtraResponse;
