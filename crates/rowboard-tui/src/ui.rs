//! Top-level UI rendering.
//!
//! Composes the components into the full screen layout:
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │ Header (title + seconds counter)    │
//! ├─────────────────────────────────────┤
//! │                                     │
//! │ Table (toggle / content / extra)    │
//! │                                     │
//! ├─────────────────────────────────────┤
//! │ Status bar                          │
//! └─────────────────────────────────────┘
//! ```

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use crate::app::{App, AppMode};
use crate::components::{HeaderBar, HelpPanel, StatusBar, TableView};
use crate::theme::Theme;

/// Renders the full UI for the current application state.
pub fn render(frame: &mut Frame<'_>, app: &mut App, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(3),    // Table
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let header = HeaderBar::new(&app.doc.title, app.header.count, theme);
    frame.render_widget(&header, chunks[0]);

    let table = TableView::new(&app.doc.items, &app.rows, theme);
    frame.render_stateful_widget(&table, chunks[1], &mut app.table);

    let status = StatusBar::new(app.status.as_ref(), theme);
    frame.render_widget(&status, chunks[2]);

    if app.mode == AppMode::Help {
        let area = centered_rect(40, HelpPanel::required_height(), frame.area());
        let help = HelpPanel::new(theme);
        frame.render_widget(&help, area);
    }
}

/// Returns a rect of the given size centered within `area`, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
