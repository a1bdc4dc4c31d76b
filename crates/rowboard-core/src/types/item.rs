//! Row items and the table document.
//!
//! A [`TableDoc`] is the unit the application loads and renders: a title and
//! an ordered list of [`RowItem`]s. Item order is preserved end to end; a
//! row's identity is its position in the list.

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::RowContent;

/// The data unit backing one table row.
///
/// Immutable once handed to the UI: toggling and supplemental content live
/// in per-row view state, never here.
///
/// # Examples
///
/// ```
/// use rowboard_core::RowItem;
///
/// let item = RowItem::new("Feature A", "/features/a");
/// assert!(item.content.is_present());
/// assert_eq!(item.href, "/features/a");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowItem {
    /// The row's primary content.
    #[serde(default)]
    pub content: RowContent,

    /// Resource locator for the row's supplemental content.
    ///
    /// May be absolute (`https://...`) or relative (`/x`); relative locators
    /// are resolved against the configured base URL at fetch time.
    pub href: String,
}

impl RowItem {
    /// Creates a new row item.
    #[must_use]
    pub fn new(content: impl Into<RowContent>, href: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            href: href.into(),
        }
    }
}

/// A table document: a title plus an ordered sequence of row items.
///
/// # Examples
///
/// ```
/// use rowboard_core::TableDoc;
///
/// let doc = TableDoc::from_json(
///     r#"{"title": "T", "items": [{"content": "A", "href": "/x"}]}"#,
/// ).unwrap();
/// assert_eq!(doc.title, "T");
/// assert_eq!(doc.items.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDoc {
    /// The table title, shown in the header.
    pub title: String,

    /// The rows, in display order. An absent field is an empty table.
    #[serde(default)]
    pub items: Vec<RowItem>,
}

impl TableDoc {
    /// Parses a table document from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is not valid JSON or
    /// does not match the expected shape.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a table document from a file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] if the file does not exist,
    /// [`ConfigError::Io`] if it cannot be read, or [`ConfigError::Parse`]
    /// if it is not a valid table document.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::MissingFile(path.to_owned()));
        }
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Emphasis, RowContent};
    use std::io::Write;

    #[test]
    fn test_doc_from_json_preserves_order() {
        let doc = TableDoc::from_json(
            r#"{
                "title": "T",
                "items": [
                    {"content": "A", "href": "/x"},
                    {"content": "", "href": "/y"},
                    {"content": "C", "href": "/z"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(doc.title, "T");
        let texts: Vec<String> = doc.items.iter().map(|i| i.content.plain_text()).collect();
        assert_eq!(texts, vec!["A", "", "C"]);
        assert_eq!(doc.items[1].href, "/y");
    }

    #[test]
    fn test_doc_missing_items_is_empty() {
        let doc = TableDoc::from_json(r#"{"title": "T"}"#).unwrap();
        assert!(doc.is_empty());
        assert_eq!(doc.len(), 0);
    }

    #[test]
    fn test_doc_rich_content_item() {
        let doc = TableDoc::from_json(
            r#"{
                "title": "T",
                "items": [
                    {"content": [{"text": "bold", "emphasis": "bold"}], "href": "/x"}
                ]
            }"#,
        )
        .unwrap();

        let RowContent::Rich(ref spans) = doc.items[0].content else {
            panic!("expected rich content");
        };
        assert_eq!(spans[0].emphasis, Emphasis::Bold);
    }

    #[test]
    fn test_doc_invalid_json() {
        let result = TableDoc::from_json("not a document");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_doc_load_missing_file() {
        let result = TableDoc::load(Utf8Path::new("/nonexistent/items.json"));
        assert!(matches!(result, Err(ConfigError::MissingFile(_))));
    }

    #[test]
    fn test_doc_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"title": "Loaded", "items": [{{"content": "A", "href": "/x"}}]}}"#
        )
        .unwrap();

        let path = Utf8Path::from_path(file.path()).unwrap();
        let doc = TableDoc::load(path).unwrap();
        assert_eq!(doc.title, "Loaded");
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_row_item_serde_round_trip() {
        let item = RowItem::new("A", "/x");
        let json = serde_json::to_string(&item).unwrap();
        let parsed: RowItem = serde_json::from_str(&json).unwrap();
        assert_eq!(item, parsed);
    }
}
