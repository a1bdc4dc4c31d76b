//! Help panel component.
//!
//! Renders the keyboard shortcut overlay.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};

use crate::theme::Theme;

/// Keyboard shortcuts shown in the help panel.
const KEY_BINDINGS: &[(&str, &str)] = &[
    ("j / ↓", "Next row"),
    ("k / ↑", "Previous row"),
    ("g / Home", "First row"),
    ("G / End", "Last row"),
    ("Space / Enter", "Toggle content"),
    ("?", "Toggle this help"),
    ("q / Esc", "Quit"),
];

/// The help panel overlay.
pub struct HelpPanel<'a> {
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> HelpPanel<'a> {
    /// Creates a new help panel.
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    /// Returns the height needed to show all bindings plus borders.
    #[must_use]
    pub fn required_height() -> u16 {
        u16::try_from(KEY_BINDINGS.len()).unwrap_or(u16::MAX).saturating_add(2)
    }
}

impl Widget for &HelpPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Clear what's underneath so the overlay doesn't blend with the table
        Clear.render(area, buf);

        let lines: Vec<Line<'_>> = KEY_BINDINGS
            .iter()
            .map(|(key, description)| {
                Line::from(vec![
                    Span::styled(format!(" {key:<14}"), self.theme.accent_style()),
                    Span::styled((*description).to_owned(), self.theme.base_style()),
                ])
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focused_border_style)
            .title(Span::styled(" Help ", self.theme.header_style));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
