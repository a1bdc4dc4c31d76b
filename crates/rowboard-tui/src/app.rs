//! Application state and logic.
//!
//! This module provides the [`App`] struct which holds all application
//! state and implements the event-to-action-to-update cycle: terminal and
//! fetch events become [`Action`]s, and actions mutate state.
//!
//! The table state is deliberately index-shaped: the document's items are
//! immutable for the lifetime of the view, and every piece of mutable row
//! state ([`RowState`]) lives at the same index as its item. Fetch outcomes
//! carry that index back, so a resolved fetch lands on the row it was
//! issued for no matter how the selection has moved in the meantime.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rowboard_core::TableDoc;
use rowboard_fetch::FetchOutcome;
use tracing::{debug, trace};

use crate::action::Action;
use crate::event::Event;

/// How long a status message stays visible.
const STATUS_MESSAGE_DURATION: Duration = Duration::from_secs(5);

/// State of the header's elapsed-seconds counter.
///
/// The counter only ever moves forward, one step per clock tick. It is
/// reset by constructing a fresh `HeaderState`, which happens exactly when
/// a new view is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderState {
    /// Seconds elapsed since the view was mounted.
    pub count: u64,
}

impl HeaderState {
    /// Creates a header counter starting at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { count: 0 }
    }

    /// Advances the counter by one second.
    pub fn tick(&mut self) {
        self.count = self.count.saturating_add(1);
    }
}

/// Mutable per-row state, indexed identically to the document's items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowState {
    /// Whether the row's content is currently visible.
    ///
    /// Closed content is hidden, not discarded; toggling back open shows
    /// the same content without any reload.
    pub open: bool,

    /// Supplemental content resolved for this row, if any arrived.
    pub extra: Option<String>,
}

impl RowState {
    /// Creates the initial state for a row.
    ///
    /// A row starts open exactly when it has content to show.
    #[must_use]
    pub fn from_item(item: &rowboard_core::RowItem) -> Self {
        Self {
            open: item.content.is_present(),
            extra: None,
        }
    }

    /// Flips the row's visibility.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}

/// Scroll and selection state for the table view.
///
/// Tracks which row is selected and which slice of rows is visible,
/// keeping the selection on screen as it moves.
#[derive(Debug, Clone, Default)]
pub struct TableViewState {
    /// Index of the currently selected row.
    selected: usize,

    /// Index of the first visible row.
    scroll_offset: usize,

    /// Number of rows that fit on screen (updated during render).
    visible_height: usize,

    /// Total number of rows.
    len: usize,
}

impl TableViewState {
    /// Creates state for a table with `len` rows.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            selected: 0,
            scroll_offset: 0,
            visible_height: 0,
            len,
        }
    }

    /// Returns the selected row index, or `None` for an empty table.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        (self.len > 0).then_some(self.selected)
    }

    /// Returns the index of the first visible row.
    #[must_use]
    pub const fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Records how many rows fit on screen and re-clamps the scroll.
    pub fn set_visible_height(&mut self, height: usize) {
        self.visible_height = height;
        self.ensure_visible();
    }

    /// Selects the next row, wrapping at the end.
    pub fn select_next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.selected = (self.selected + 1) % self.len;
        self.ensure_visible();
    }

    /// Selects the previous row, wrapping at the start.
    pub fn select_previous(&mut self) {
        if self.len == 0 {
            return;
        }
        self.selected = self.selected.checked_sub(1).unwrap_or(self.len - 1);
        self.ensure_visible();
    }

    /// Selects the first row.
    pub fn select_first(&mut self) {
        self.selected = 0;
        self.ensure_visible();
    }

    /// Selects the last row.
    pub fn select_last(&mut self) {
        if self.len > 0 {
            self.selected = self.len - 1;
        }
        self.ensure_visible();
    }

    /// Selects a specific row, ignoring out-of-range indices.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.selected = index;
            self.ensure_visible();
        }
    }

    /// Adjusts the scroll offset so the selection stays on screen.
    fn ensure_visible(&mut self) {
        if self.visible_height == 0 {
            return;
        }
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + self.visible_height {
            self.scroll_offset = self.selected + 1 - self.visible_height;
        }
    }
}

/// Current UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Normal table browsing.
    #[default]
    Normal,

    /// Help overlay is shown.
    Help,
}

/// A transient message shown in the status bar.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// The message text.
    pub text: String,

    /// Whether this is an error message.
    pub is_error: bool,

    /// When the message was created.
    created_at: Instant,
}

impl StatusMessage {
    /// Creates an informational status message.
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
            created_at: Instant::now(),
        }
    }

    /// Creates an error status message.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
            created_at: Instant::now(),
        }
    }

    /// Returns `true` if the message has been visible long enough.
    #[must_use]
    pub fn should_hide(&self) -> bool {
        self.created_at.elapsed() >= STATUS_MESSAGE_DURATION
    }
}

/// Main application state.
///
/// Holds the loaded document, per-row state, selection, and UI chrome
/// state. Event handling is split into two steps: [`handle_event`] maps an
/// [`Event`] to an [`Action`], and [`update`] applies the action.
///
/// [`handle_event`]: App::handle_event
/// [`update`]: App::update
#[derive(Debug)]
pub struct App {
    /// The loaded table document.
    pub(crate) doc: TableDoc,

    /// Header counter state.
    pub(crate) header: HeaderState,

    /// Mutable state for each row, parallel to `doc.items`.
    pub(crate) rows: Vec<RowState>,

    /// Selection and scroll state.
    pub(crate) table: TableViewState,

    /// Current UI mode.
    pub(crate) mode: AppMode,

    /// Transient status message, if any.
    pub(crate) status: Option<StatusMessage>,

    /// Number of fetch outcomes applied so far.
    outcomes_applied: usize,

    /// Whether the application should quit.
    should_quit: bool,
}

impl App {
    /// Creates a new application for the given document.
    ///
    /// Rows whose content is non-empty start open; all others start
    /// closed. No supplemental content is present until fetches resolve.
    #[must_use]
    pub fn new(doc: TableDoc) -> Self {
        let rows = doc.items.iter().map(RowState::from_item).collect::<Vec<_>>();
        let table = TableViewState::new(rows.len());

        debug!(title = %doc.title, rows = rows.len(), "Created app");

        Self {
            doc,
            header: HeaderState::new(),
            rows,
            table,
            mode: AppMode::Normal,
            status: None,
            outcomes_applied: 0,
            should_quit: false,
        }
    }

    /// Returns the document being displayed.
    #[must_use]
    pub fn doc(&self) -> &TableDoc {
        &self.doc
    }

    /// Returns the header counter state.
    #[must_use]
    pub const fn header(&self) -> HeaderState {
        self.header
    }

    /// Returns the per-row state.
    #[must_use]
    pub fn rows(&self) -> &[RowState] {
        &self.rows
    }

    /// Returns the table selection state.
    #[must_use]
    pub fn table(&self) -> &TableViewState {
        &self.table
    }

    /// Returns a mutable reference to the table selection state.
    pub fn table_mut(&mut self) -> &mut TableViewState {
        &mut self.table
    }

    /// Returns the current UI mode.
    #[must_use]
    pub const fn mode(&self) -> AppMode {
        self.mode
    }

    /// Returns the current status message, if any.
    #[must_use]
    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Returns `true` if the application should quit.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Maps an event to the action it triggers, if any.
    pub fn handle_event(&mut self, event: &Event) -> Action {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Extra(outcome) => Action::ApplyExtra(outcome.clone()),
            Event::Clock => {
                self.clock();
                Action::Render
            }
            Event::Render | Event::Resize { .. } => Action::Render,
            _ => Action::None,
        }
    }

    /// Maps a key press to an action.
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        trace!(?key, "Handling key");

        // Ctrl-C always quits
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }

        if self.mode == AppMode::Help {
            return match key.code {
                KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') => Action::HideHelp,
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('?') => Action::ToggleHelp,
            KeyCode::Char('j') | KeyCode::Down => Action::NextRow,
            KeyCode::Char('k') | KeyCode::Up => Action::PreviousRow,
            KeyCode::Char('g') | KeyCode::Home => Action::FirstRow,
            KeyCode::Char('G') | KeyCode::End => Action::LastRow,
            KeyCode::Char(' ') | KeyCode::Enter => Action::ToggleContent,
            _ => Action::None,
        }
    }

    /// Applies an action to the application state.
    pub fn update(&mut self, action: Action) {
        trace!(?action, "Updating state");

        match action {
            Action::NextRow => self.table.select_next(),
            Action::PreviousRow => self.table.select_previous(),
            Action::FirstRow => self.table.select_first(),
            Action::LastRow => self.table.select_last(),
            Action::SelectRow(index) => self.table.select(index),
            Action::ToggleContent => self.toggle_selected(),
            Action::ApplyExtra(outcome) => self.apply_outcome(outcome),
            Action::ToggleHelp => {
                self.mode = match self.mode {
                    AppMode::Normal => AppMode::Help,
                    AppMode::Help => AppMode::Normal,
                };
            }
            Action::HideHelp => self.mode = AppMode::Normal,
            Action::ShowStatus(text) => self.status = Some(StatusMessage::info(text)),
            Action::ClearStatus => self.status = None,
            Action::Quit => self.should_quit = true,
            Action::Render | Action::None => {}
        }
    }

    /// Advances the header counter and expires stale status messages.
    fn clock(&mut self) {
        self.header.tick();

        if self.status.as_ref().is_some_and(StatusMessage::should_hide) {
            self.status = None;
        }
    }

    /// Toggles visibility of the selected row's content.
    fn toggle_selected(&mut self) {
        if let Some(index) = self.table.selected() {
            if let Some(row) = self.rows.get_mut(index) {
                row.toggle();
                trace!(index, open = row.open, "Toggled row");
            }
        }
    }

    /// Applies a fetch outcome to its row.
    ///
    /// Outcomes for indices outside the table are dropped silently, as are
    /// outcomes without content. Nothing here touches `open`: a resolved
    /// fetch never forces a row open or closed.
    fn apply_outcome(&mut self, outcome: FetchOutcome) {
        let Some(row) = self.rows.get_mut(outcome.index) else {
            debug!(index = outcome.index, "Dropping outcome for unknown row");
            return;
        };

        self.outcomes_applied += 1;

        if let Some(extra) = outcome.extra {
            trace!(index = outcome.index, "Applying supplemental content");
            row.extra = Some(extra);
        }
    }

    /// Returns how many fetch outcomes have been applied.
    #[must_use]
    pub const fn outcomes_applied(&self) -> usize {
        self.outcomes_applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowboard_core::{RowContent, RowItem};

    fn sample_doc() -> TableDoc {
        TableDoc {
            title: "Fleet".to_string(),
            items: vec![
                RowItem::new("alpha", "/rows/0"),
                RowItem::new(RowContent::Text(String::new()), "/rows/1"),
                RowItem::new("gamma", "/rows/2"),
            ],
        }
    }

    #[test]
    fn test_initial_open_follows_content() {
        let app = App::new(sample_doc());

        assert!(app.rows()[0].open);
        assert!(!app.rows()[1].open, "empty content starts closed");
        assert!(app.rows()[2].open);
    }

    #[test]
    fn test_header_counts_clock_ticks() {
        let mut app = App::new(sample_doc());
        assert_eq!(app.header().count, 0);

        let action = app.handle_event(&Event::Clock);
        assert_eq!(action, Action::Render);
        assert_eq!(app.header().count, 1);

        app.handle_event(&Event::Clock);
        app.handle_event(&Event::Clock);
        assert_eq!(app.header().count, 3);
    }

    #[test]
    fn test_toggle_flips_every_time() {
        let mut app = App::new(sample_doc());
        assert!(app.rows()[0].open);

        app.update(Action::ToggleContent);
        assert!(!app.rows()[0].open);

        app.update(Action::ToggleContent);
        assert!(app.rows()[0].open);

        app.update(Action::ToggleContent);
        assert!(!app.rows()[0].open);
    }

    #[test]
    fn test_toggle_preserves_extra() {
        let mut app = App::new(sample_doc());
        app.update(Action::ApplyExtra(FetchOutcome::with_content(0, "bonus")));
        assert_eq!(app.rows()[0].extra.as_deref(), Some("bonus"));

        app.update(Action::ToggleContent);
        assert_eq!(
            app.rows()[0].extra.as_deref(),
            Some("bonus"),
            "closing a row must not discard its content"
        );
    }

    #[test]
    fn test_apply_outcome_targets_index_not_selection() {
        let mut app = App::new(sample_doc());
        app.update(Action::NextRow);
        app.update(Action::NextRow);

        app.update(Action::ApplyExtra(FetchOutcome::with_content(0, "for row 0")));

        assert_eq!(app.rows()[0].extra.as_deref(), Some("for row 0"));
        assert!(app.rows()[2].extra.is_none());
    }

    #[test]
    fn test_apply_outcome_out_of_range_is_dropped() {
        let mut app = App::new(sample_doc());
        app.update(Action::ApplyExtra(FetchOutcome::with_content(99, "lost")));

        assert_eq!(app.outcomes_applied(), 0);
        assert!(app.rows().iter().all(|r| r.extra.is_none()));
    }

    #[test]
    fn test_apply_empty_outcome_counts_but_sets_nothing() {
        let mut app = App::new(sample_doc());
        app.update(Action::ApplyExtra(FetchOutcome::empty(1)));

        assert_eq!(app.outcomes_applied(), 1);
        assert!(app.rows()[1].extra.is_none());
    }

    #[test]
    fn test_apply_outcome_does_not_change_open() {
        let mut app = App::new(sample_doc());
        assert!(!app.rows()[1].open);

        app.update(Action::ApplyExtra(FetchOutcome::with_content(1, "late")));
        assert!(!app.rows()[1].open, "fetch results never force a row open");
    }

    #[test]
    fn test_navigation_wraps() {
        let mut app = App::new(sample_doc());
        assert_eq!(app.table().selected(), Some(0));

        app.update(Action::PreviousRow);
        assert_eq!(app.table().selected(), Some(2));

        app.update(Action::NextRow);
        assert_eq!(app.table().selected(), Some(0));
    }

    #[test]
    fn test_navigation_on_empty_table() {
        let mut app = App::new(TableDoc {
            title: "Empty".to_string(),
            items: vec![],
        });

        assert_eq!(app.table().selected(), None);
        app.update(Action::NextRow);
        app.update(Action::ToggleContent);
        assert_eq!(app.table().selected(), None);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(sample_doc());

        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(app.handle_event(&Event::Key(key)), Action::Quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.handle_event(&Event::Key(ctrl_c)), Action::Quit);
    }

    #[test]
    fn test_help_mode_swallows_navigation() {
        let mut app = App::new(sample_doc());
        app.update(Action::ToggleHelp);
        assert_eq!(app.mode(), AppMode::Help);

        let key = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(app.handle_event(&Event::Key(key)), Action::None);

        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(app.handle_event(&Event::Key(esc)), Action::HideHelp);
    }

    #[test]
    fn test_scroll_follows_selection() {
        let mut state = TableViewState::new(10);
        state.set_visible_height(3);

        state.select_last();
        assert_eq!(state.scroll_offset(), 7);

        state.select_first();
        assert_eq!(state.scroll_offset(), 0);
    }

    #[test]
    fn test_status_message_lifecycle() {
        let mut app = App::new(sample_doc());
        app.update(Action::ShowStatus("loaded".to_string()));
        assert!(app.status().is_some());

        app.update(Action::ClearStatus);
        assert!(app.status().is_none());
    }
}
