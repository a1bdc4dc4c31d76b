//! UI components for the TUI.
//!
//! Each component is a Ratatui widget rendering one region of the screen:
//!
//! - [`HeaderBar`]: document title and the elapsed-seconds counter
//! - [`TableView`]: the scrollable row table with toggle/content/extra cells
//! - [`StatusBar`]: key hints and transient status messages
//! - [`HelpPanel`]: keyboard shortcut overlay

mod header;
mod help;
mod status_bar;
mod table_view;

pub use header::HeaderBar;
pub use help::HelpPanel;
pub use status_bar::StatusBar;
pub use table_view::TableView;

use unicode_width::UnicodeWidthChar;

/// Truncates text to fit within the given display width, appending an
/// ellipsis when anything was cut.
///
/// Width is measured in terminal columns, not bytes, so wide characters
/// count double.
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_owned();
    }

    let keep = max_width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > keep {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_long_text() {
        let out = truncate_to_width("a long piece of text", 8);
        assert!(out.ends_with('…'));
        assert!(out.chars().count() <= 8);
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each CJK char is two columns wide
        let out = truncate_to_width("日本語のテキスト", 6);
        assert!(out.ends_with('…'));
    }
}
