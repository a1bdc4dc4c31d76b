//! User actions for the TUI.
//!
//! This module defines the [`Action`] enum representing all actions that
//! can be performed in the TUI. Actions are the result of processing input
//! events (key presses) or fetch outcomes, and are used to update
//! application state.
//!
//! # Action Flow
//!
//! ```text
//! Key Event / Fetch Outcome → Action → App State Update
//! ```

use rowboard_fetch::FetchOutcome;

/// Actions that modify application state.
///
/// Actions are produced by the event loop in response to input events and
/// fetch outcomes, and processed by the application's update loop.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Action {
    // =========================================================================
    // Navigation
    // =========================================================================
    /// Move selection to the next row.
    NextRow,

    /// Move selection to the previous row.
    PreviousRow,

    /// Move selection to the first row.
    FirstRow,

    /// Move selection to the last row.
    LastRow,

    /// Select a specific row by index.
    SelectRow(usize),

    // =========================================================================
    // Row State
    // =========================================================================
    /// Flip the selected row's content visibility.
    ///
    /// Every activation toggles; there is no debouncing or guard.
    ToggleContent,

    /// Apply a resolved supplemental-content outcome to its row.
    ApplyExtra(FetchOutcome),

    // =========================================================================
    // UI State
    // =========================================================================
    /// Toggle the help panel.
    ToggleHelp,

    /// Hide the help panel.
    HideHelp,

    /// Show a status message.
    ShowStatus(String),

    /// Clear the status message.
    ClearStatus,

    // =========================================================================
    // Application Control
    // =========================================================================
    /// Quit the application.
    Quit,

    /// Render the UI.
    Render,

    /// No operation (used for event handling that doesn't produce an action).
    #[default]
    None,
}

impl Action {
    /// Returns `true` if this action requires a re-render.
    ///
    /// The event loop draws a new frame only when the processed action says
    /// so; a stream of [`None`](Self::None) actions leaves the screen alone.
    #[must_use]
    pub const fn needs_render(&self) -> bool {
        !matches!(self, Self::None)
    }
}
