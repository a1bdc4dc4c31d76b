//! Domain types for rowboard.
//!
//! The table document model: a [`TableDoc`] is a title plus an ordered list
//! of [`RowItem`]s, each carrying a [`RowContent`] and a resource locator
//! used to fetch supplemental content.

mod content;
mod item;

pub use content::{Emphasis, RichSpan, RowContent};
pub use item::{RowItem, TableDoc};
