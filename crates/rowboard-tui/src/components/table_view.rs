//! Table view component.
//!
//! Displays one row per document item: a toggle control, the row's own
//! content, and any supplemental content that has arrived for it.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Cell, HighlightSpacing, Row, StatefulWidget, Table, TableState,
};
use rowboard_core::{Emphasis, RowContent, RowItem};

use crate::app::{RowState, TableViewState};
use crate::components::truncate_to_width;
use crate::theme::Theme;

/// Label shown in every row's toggle cell.
pub const TOGGLE_LABEL: &str = "Toggle content";

/// Maximum display width of the content cell before truncation.
const CONTENT_MAX_WIDTH: usize = 60;

/// A stateful table of rows.
///
/// Each row shows:
/// - The toggle control (always visible, open or closed)
/// - The row's content, hidden via styling when the row is closed
/// - Supplemental content, once fetched
///
/// Closed rows keep their content cell in the buffer with the `HIDDEN`
/// modifier, so toggling changes visibility without rebuilding anything.
pub struct TableView<'a> {
    /// The document's items.
    items: &'a [RowItem],
    /// Per-row mutable state, parallel to `items`.
    rows: &'a [RowState],
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> TableView<'a> {
    /// Creates a new table view.
    #[must_use]
    pub const fn new(items: &'a [RowItem], rows: &'a [RowState], theme: &'a Theme) -> Self {
        Self { items, rows, theme }
    }

    /// Builds all table rows.
    fn build_rows(&self) -> Vec<Row<'a>> {
        self.items
            .iter()
            .zip(self.rows)
            .map(|(item, row)| self.build_row(item, row))
            .collect()
    }

    /// Builds a single table row.
    fn build_row(&self, item: &RowItem, row: &RowState) -> Row<'a> {
        let toggle = Cell::from(Span::styled(TOGGLE_LABEL, self.theme.toggle_style()));

        let content = Cell::from(Line::from(content_spans(
            &item.content,
            self.theme.content_style(row.open),
        )));

        let extra = match &row.extra {
            Some(text) => Cell::from(Span::styled(
                truncate_to_width(text, CONTENT_MAX_WIDTH),
                self.theme.extra_style(),
            )),
            None => Cell::from(""),
        };

        Row::new(vec![toggle, content, extra]).height(1)
    }
}

impl StatefulWidget for &TableView<'_> {
    type State = TableViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        // Account for borders when measuring the visible slice
        let inner_height = area.height.saturating_sub(2);
        state.set_visible_height(usize::from(inner_height));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style)
            .title(Span::styled(
                format!(" Rows ({}) ", self.items.len()),
                self.theme.header_style,
            ));

        let widths = [
            Constraint::Length(16), // Toggle control
            Constraint::Min(20),    // Content
            Constraint::Min(20),    // Supplemental content
        ];

        let table = Table::new(self.build_rows(), widths)
            .block(block)
            .row_highlight_style(self.theme.highlight_style)
            .highlight_spacing(HighlightSpacing::Always)
            .highlight_symbol("▸ ");

        let mut table_state = TableState::default();
        table_state.select(state.selected());
        *table_state.offset_mut() = state.scroll_offset();

        StatefulWidget::render(table, area, buf, &mut table_state);
    }
}

/// Builds styled spans for a row's content.
///
/// Rich spans layer their emphasis on top of the base style; the base
/// style carries the open/closed visibility.
fn content_spans(content: &RowContent, base: Style) -> Vec<Span<'static>> {
    match content {
        RowContent::Text(text) => {
            vec![Span::styled(
                truncate_to_width(text, CONTENT_MAX_WIDTH),
                base,
            )]
        }
        RowContent::Rich(spans) => spans
            .iter()
            .map(|span| {
                let style = match span.emphasis {
                    Emphasis::Bold => base.add_modifier(Modifier::BOLD),
                    Emphasis::Italic => base.add_modifier(Modifier::ITALIC),
                    _ => base,
                };
                Span::styled(span.text.clone(), style)
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowboard_core::RichSpan;

    fn render_to_buffer(items: &[RowItem], rows: &[RowState]) -> Buffer {
        let theme = Theme::dark();
        let view = TableView::new(items, rows, &theme);
        let mut state = TableViewState::new(items.len());

        let area = Rect::new(0, 0, 80, 10);
        let mut buf = Buffer::empty(area);
        StatefulWidget::render(&view, area, &mut buf, &mut state);
        buf
    }

    fn buffer_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_owned())
            .collect()
    }

    /// Finds the first cell of `needle` on any row and returns its position.
    fn find_text(buf: &Buffer, needle: &str) -> Option<(u16, u16)> {
        for y in 0..buf.area.height {
            let row = buffer_text(buf, y);
            if let Some(col) = row.find(needle) {
                let x = row[..col].chars().count() as u16;
                return Some((x, y));
            }
        }
        None
    }

    #[test]
    fn test_every_row_shows_toggle_label() {
        let items = vec![
            RowItem::new("first", "/rows/0"),
            RowItem::new("second", "/rows/1"),
        ];
        let rows: Vec<RowState> = items.iter().map(RowState::from_item).collect();

        let buf = render_to_buffer(&items, &rows);
        let all: String = (0..buf.area.height).map(|y| buffer_text(&buf, y)).collect();
        assert_eq!(all.matches(TOGGLE_LABEL).count(), 2);
    }

    #[test]
    fn test_closed_row_content_is_hidden_not_removed() {
        let items = vec![RowItem::new("secret payload", "/rows/0")];
        let mut rows = vec![RowState::from_item(&items[0])];
        rows[0].toggle(); // close it

        let buf = render_to_buffer(&items, &rows);

        // The content text is still in the buffer...
        let (x, y) = find_text(&buf, "secret").expect("content must stay in the buffer");
        // ...but carries the HIDDEN modifier.
        assert!(buf[(x, y)].modifier.contains(Modifier::HIDDEN));
    }

    #[test]
    fn test_open_row_content_is_visible() {
        let items = vec![RowItem::new("visible payload", "/rows/0")];
        let rows = vec![RowState::from_item(&items[0])];

        let buf = render_to_buffer(&items, &rows);

        let (x, y) = find_text(&buf, "visible").expect("content rendered");
        assert!(!buf[(x, y)].modifier.contains(Modifier::HIDDEN));
    }

    #[test]
    fn test_extra_content_rendered_when_present() {
        let items = vec![RowItem::new("base", "/rows/0")];
        let mut rows = vec![RowState::from_item(&items[0])];
        rows[0].extra = Some("bonus text".to_string());

        let buf = render_to_buffer(&items, &rows);
        assert!(find_text(&buf, "bonus text").is_some());
    }

    #[test]
    fn test_rich_content_emphasis() {
        let content = RowContent::Rich(vec![
            RichSpan::new("plain "),
            RichSpan::new("loud").with_emphasis(Emphasis::Bold),
        ]);
        let spans = content_spans(&content, Style::default());

        assert_eq!(spans.len(), 2);
        assert!(!spans[0].style.add_modifier.contains(Modifier::BOLD));
        assert!(spans[1].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_empty_table_renders() {
        let buf = render_to_buffer(&[], &[]);
        assert!(find_text(&buf, "Rows (0)").is_some());
    }
}
