//! Status bar component.
//!
//! Shows key hints and transient status messages at the bottom of the
//! screen.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::app::StatusMessage;
use crate::theme::Theme;

/// The status bar component.
///
/// When a status message is present it takes over the whole bar;
/// otherwise the default key hints are shown.
pub struct StatusBar<'a> {
    /// Current status message, if any.
    message: Option<&'a StatusMessage>,
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Creates a new status bar.
    #[must_use]
    pub const fn new(message: Option<&'a StatusMessage>, theme: &'a Theme) -> Self {
        Self { message, theme }
    }
}

impl Widget for &StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = match self.message {
            Some(msg) => {
                let style = if msg.is_error {
                    self.theme.error_style()
                } else {
                    self.theme.accent_style()
                };
                Line::from(Span::styled(format!(" {}", msg.text), style))
            }
            None => Line::from(vec![
                Span::styled(" j/k", self.theme.accent_style()),
                Span::styled(" move  ", self.theme.dimmed_style()),
                Span::styled("space", self.theme.accent_style()),
                Span::styled(" toggle  ", self.theme.dimmed_style()),
                Span::styled("?", self.theme.accent_style()),
                Span::styled(" help  ", self.theme.dimmed_style()),
                Span::styled("q", self.theme.accent_style()),
                Span::styled(" quit", self.theme.dimmed_style()),
            ]),
        };

        Paragraph::new(line)
            .style(self.theme.status_bar_style)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(message: Option<&StatusMessage>) -> String {
        let theme = Theme::dark();
        let bar = StatusBar::new(message, &theme);

        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        (&bar).render(area, &mut buf);

        (0..area.width).map(|x| buf[(x, 0)].symbol().to_owned()).collect()
    }

    #[test]
    fn test_hints_shown_without_message() {
        let text = render(None);
        assert!(text.contains("toggle"));
        assert!(text.contains("quit"));
    }

    #[test]
    fn test_message_replaces_hints() {
        let msg = StatusMessage::info("loaded 3 rows");
        let text = render(Some(&msg));
        assert!(text.contains("loaded 3 rows"));
        assert!(!text.contains("quit"));
    }
}
