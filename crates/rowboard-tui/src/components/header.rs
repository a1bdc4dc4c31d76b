//! Header bar component.
//!
//! Displays the document title together with the elapsed-seconds counter.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::theme::Theme;

/// The header bar component.
///
/// Shows a single headline of the form `{title} {count}`, where the count
/// is the number of seconds the view has been mounted. The count comes
/// from [`HeaderState`](crate::app::HeaderState), so re-rendering the bar
/// never advances it.
pub struct HeaderBar<'a> {
    /// Document title.
    title: &'a str,
    /// Seconds elapsed since mount.
    count: u64,
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> HeaderBar<'a> {
    /// Creates a new header bar.
    #[must_use]
    pub const fn new(title: &'a str, count: u64, theme: &'a Theme) -> Self {
        Self {
            title,
            count,
            theme,
        }
    }

    /// Returns the headline text: the title followed by the counter.
    #[must_use]
    pub fn headline(&self) -> String {
        format!("{} {}", self.title, self.count)
    }
}

impl Widget for &HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(self.title.to_owned(), self.theme.header_style),
            Span::raw(" "),
            Span::styled(self.count.to_string(), self.theme.accent_style()),
            Span::raw("  "),
            Span::styled("? for help", self.theme.dimmed_style()),
        ]);

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));

        Paragraph::new(line).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headline_joins_title_and_count() {
        let theme = Theme::dark();
        let header = HeaderBar::new("Fleet", 0, &theme);
        assert_eq!(header.headline(), "Fleet 0");

        let header = HeaderBar::new("Fleet", 42, &theme);
        assert_eq!(header.headline(), "Fleet 42");
    }

    #[test]
    fn test_render_shows_title_and_count() {
        let theme = Theme::dark();
        let header = HeaderBar::new("Fleet", 7, &theme);

        let area = Rect::new(0, 0, 30, 2);
        let mut buf = Buffer::empty(area);
        (&header).render(area, &mut buf);

        let row: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_owned())
            .collect();
        assert!(row.contains("Fleet"));
        assert!(row.contains('7'));
    }
}
