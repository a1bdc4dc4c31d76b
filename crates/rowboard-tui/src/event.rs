//! Event types for the TUI event loop.
//!
//! This module provides the [`Event`] enum representing all events
//! that can be processed by the TUI application.
//!
//! # Event Sources
//!
//! Events originate from multiple sources:
//!
//! - **Terminal**: Key presses, mouse events, window resizing
//! - **Fetcher**: Supplemental-content outcomes from `rowboard-fetch`
//! - **Clock**: The once-per-second tick driving the header counter
//! - **Renderer**: Frame-rate render signals
//!
//! # Example
//!
//! ```ignore
//! use rowboard_tui::Event;
//!
//! loop {
//!     match tui.next_event().await {
//!         Some(Event::Key(key)) => handle_key(key),
//!         Some(Event::Extra(outcome)) => apply_outcome(outcome),
//!         Some(Event::Clock) => advance_counter(),
//!         None => break,
//!     }
//! }
//! ```

use crossterm::event::{KeyEvent, MouseEvent};
use rowboard_fetch::FetchOutcome;

/// Events that can be processed by the TUI.
///
/// This enum unifies all event sources into a single type that can be
/// processed by the application's main event loop.
#[derive(Debug)]
#[non_exhaustive]
pub enum Event {
    /// A key press event from the terminal.
    Key(KeyEvent),

    /// A mouse event from the terminal.
    Mouse(MouseEvent),

    /// Terminal window was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },

    /// A row's supplemental-content fetch resolved.
    ///
    /// Emitted at most once per row per mount. Outcomes with no content
    /// are still delivered so the application can track fetch progress.
    Extra(FetchOutcome),

    /// One second has elapsed on the header clock.
    ///
    /// Fires exactly once per second for as long as the UI is mounted,
    /// and never after the terminal has been exited.
    Clock,

    /// Signal to render a new frame.
    ///
    /// This is separate from Clock so the render rate can exceed the
    /// fixed one-second counter cadence.
    Render,

    /// Focus gained by the terminal window.
    FocusGained,

    /// Focus lost by the terminal window.
    FocusLost,
}

impl Event {
    /// Returns `true` if this is a clock tick.
    #[inline]
    #[must_use]
    pub const fn is_clock(&self) -> bool {
        matches!(self, Self::Clock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_is_clock() {
        let clock = Event::Clock;
        assert!(clock.is_clock());

        let render = Event::Render;
        assert!(!render.is_clock());
    }

    #[test]
    fn test_extra_event_carries_outcome() {
        let event = Event::Extra(FetchOutcome::empty(2));
        let Event::Extra(outcome) = event else {
            panic!("Expected Extra event");
        };
        assert_eq!(outcome.index, 2);
    }

    #[test]
    fn test_resize_event() {
        let event = Event::Resize {
            width: 120,
            height: 40,
        };
        if let Event::Resize { width, height } = event {
            assert_eq!(width, 120);
            assert_eq!(height, 40);
        } else {
            panic!("Expected Resize event");
        }
    }
}
