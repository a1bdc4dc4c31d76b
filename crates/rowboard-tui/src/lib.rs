//! Terminal user interface for browsing row tables, built on Ratatui.
//!
//! This crate renders a loaded table document as an interactive terminal
//! view: a header with the document title and an elapsed-seconds counter,
//! one table row per item with a per-row content toggle, and supplemental
//! content filled in as background fetches resolve.
//!
//! # Architecture
//!
//! ```text
//! crates/rowboard-tui/src/
//!   lib.rs           # Public API exports and the run() entry point
//!   app.rs           # Application state (header counter, row state)
//!   event.rs         # Event types (Key, Extra, Clock, Render)
//!   tui.rs           # Terminal wrapper, event streaming, header clock
//!   action.rs        # User actions (commands from key bindings)
//!   ui.rs            # Main layout rendering orchestration
//!   theme.rs         # Color scheme and styling
//!   error.rs         # TUI-specific error types
//!   components/
//!     mod.rs         # Component exports and shared helpers
//!     header.rs      # HeaderBar (title + counter)
//!     table_view.rs  # TableView (toggle / content / extra cells)
//!     status_bar.rs  # StatusBar component
//!     help.rs        # HelpPanel modal overlay
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use camino::Utf8Path;
//! use rowboard_core::{Config, TableDoc};
//! use rowboard_tui::run;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), rowboard_tui::TuiError> {
//!     let config = Config::default();
//!     let doc = TableDoc::load(Utf8Path::new("items.json"))?;
//!     run(config, doc).await
//! }
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod action;
pub mod app;
pub mod components;
pub mod error;
pub mod event;
pub mod theme;
pub mod tui;
pub mod ui;

use rowboard_core::{Config, TableDoc};
use rowboard_fetch::ExtraFetcher;
use tracing::{debug, info};

// Public re-exports
pub use action::Action;
pub use app::{App, AppMode, HeaderState, RowState, StatusMessage, TableViewState};
pub use error::TuiError;
pub use event::Event;
pub use theme::Theme;
pub use tui::Tui;

/// Runs the TUI application for the given document.
///
/// This is the main entry point for the rowboard-tui crate. It:
///
/// 1. Spawns the supplemental-content fetcher (one fetch per row)
/// 2. Initializes the terminal and starts the header clock
/// 3. Runs the main event loop
/// 4. Restores the terminal on exit, stopping the clock
///
/// The fetcher is started before the terminal is entered; its outcomes are
/// folded into the event loop alongside terminal events.
///
/// # Errors
///
/// Returns an error if terminal initialization fails or the fetch
/// configuration is invalid. Individual fetch failures are not errors;
/// their rows simply never receive supplemental content.
pub async fn run(config: Config, doc: TableDoc) -> Result<(), TuiError> {
    // frame_rate is a small UI timing value, precision loss is acceptable
    #[allow(clippy::cast_precision_loss)]
    let frame_rate = config.tui.frame_rate as f64;

    let mut tui = Tui::new(frame_rate)?;
    let mut app = App::new(doc);

    let mut fetcher = if app.rows().is_empty() {
        None
    } else {
        info!(rows = app.rows().len(), "Starting supplemental-content fetches");
        Some(ExtraFetcher::spawn(&config.fetch, &app.doc.items)?)
    };

    tui.enter()?;

    let theme = Theme::from_scheme(config.tui.color_scheme);

    info!("Entering main event loop");
    let result = run_event_loop(&mut tui, &mut app, &mut fetcher, &theme).await;

    tui.exit()?;

    result
}

/// Runs the main event loop.
async fn run_event_loop(
    tui: &mut Tui,
    app: &mut App,
    fetcher: &mut Option<ExtraFetcher>,
    theme: &Theme,
) -> Result<(), TuiError> {
    // First frame before any event arrives
    tui.draw(|frame| ui::render(frame, app, theme))?;

    loop {
        let event = tokio::select! {
            // Terminal, clock, and render events
            event = tui.next_event() => event,

            // Fetch outcomes
            outcome = async {
                match fetcher {
                    Some(f) => f.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                match outcome {
                    Some(outcome) => Some(Event::Extra(outcome)),
                    None => {
                        // All fetches resolved; stop polling the fetcher
                        debug!("Fetcher drained");
                        *fetcher = None;
                        continue;
                    }
                }
            }
        };

        let Some(event) = event else {
            return Err(TuiError::ChannelClosed);
        };

        let action = app.handle_event(&event);
        let redraw = action.needs_render();
        app.update(action);

        if app.should_quit() {
            info!("Quit requested");
            break;
        }

        if redraw {
            tui.draw(|frame| ui::render(frame, app, theme))?;
        }
    }

    Ok(())
}
