//! Configuration structures for rowboard.
//!
//! This module provides configuration types for all components of the
//! application:
//!
//! - [`FetchConfig`] - Supplemental-content fetcher settings (base URL, concurrency)
//! - [`TuiConfig`] - Terminal UI settings (frame rate, colors)
//! - [`Config`] - Root configuration combining all settings
//!
//! All configuration types implement [`Default`] with sensible values.

use serde::{Deserialize, Serialize};

/// Color scheme for the TUI.
///
/// Controls the visual appearance of the terminal interface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ColorScheme {
    /// Automatically detect based on terminal settings.
    #[default]
    Auto,
    /// Light color scheme (dark text on light background).
    Light,
    /// Dark color scheme (light text on dark background).
    Dark,
}

/// Configuration for the supplemental-content fetcher.
///
/// Controls how each row's `href` is resolved and fetched. There is no
/// timeout or retry knob: a request that fails is treated the same as a
/// response with no content.
///
/// # Examples
///
/// ```
/// use rowboard_core::FetchConfig;
///
/// let config = FetchConfig::default();
/// assert_eq!(config.concurrency, 8);
/// assert!(config.base_url.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Base URL used to resolve relative `href` values (e.g. `/x`).
    ///
    /// Rows with an absolute `href` ignore this. `None` means relative
    /// locators cannot be resolved and yield no supplemental content.
    pub base_url: Option<String>,

    /// Maximum number of requests in flight at once.
    pub concurrency: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            concurrency: 8,
        }
    }
}

/// Configuration for the terminal user interface.
///
/// The header counter advances once per second by contract, so the clock
/// rate is not configurable; only rendering and colors are.
///
/// # Examples
///
/// ```
/// use rowboard_core::{ColorScheme, TuiConfig};
///
/// let config = TuiConfig::default();
/// assert_eq!(config.frame_rate, 30);
/// assert_eq!(config.color_scheme, ColorScheme::Auto);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Frames rendered per second.
    ///
    /// Lower values use less CPU; the table is mostly static between events.
    pub frame_rate: u64,

    /// Color scheme for the interface.
    pub color_scheme: ColorScheme,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            frame_rate: 30,
            color_scheme: ColorScheme::Auto,
        }
    }
}

/// Root configuration for rowboard.
///
/// Combines all component configurations into a single structure that can be
/// loaded from a configuration file or constructed programmatically.
///
/// # Examples
///
/// ```
/// use rowboard_core::Config;
///
/// let config = Config::default();
/// let json = serde_json::to_string_pretty(&config).unwrap();
/// assert!(json.contains("concurrency"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Supplemental-content fetcher configuration.
    pub fetch: FetchConfig,

    /// Terminal UI configuration.
    pub tui: TuiConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_config_defaults() {
        let config = FetchConfig::default();
        assert!(config.base_url.is_none());
        assert_eq!(config.concurrency, 8);
    }

    #[test]
    fn test_tui_config_defaults() {
        let config = TuiConfig::default();
        assert_eq!(config.frame_rate, 30);
        assert_eq!(config.color_scheme, ColorScheme::Auto);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_config_deserialize_with_missing_fields() {
        let json = r#"{"fetch": {"base_url": "https://example.com"}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.fetch.base_url.as_deref(), Some("https://example.com"));
        // Other fields should have defaults
        assert_eq!(config.fetch.concurrency, 8);
        assert_eq!(config.tui.frame_rate, 30);
    }

    #[test]
    fn test_color_scheme_serialization() {
        assert_eq!(
            serde_json::to_string(&ColorScheme::Auto).unwrap(),
            r#""auto""#
        );
        assert_eq!(
            serde_json::to_string(&ColorScheme::Dark).unwrap(),
            r#""dark""#
        );
        assert_eq!(
            serde_json::to_string(&ColorScheme::Light).unwrap(),
            r#""light""#
        );
    }
}
