//! Row content as a tagged variant.
//!
//! A row's primary content is either a plain string or pre-built styled
//! content. This is modeled as an explicit variant type rather than a
//! stringly convention: renderers match on the variant, and "is there any
//! content" is a single method instead of a truthiness check.

use serde::{Deserialize, Serialize};

/// Text emphasis for a rich content span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Emphasis {
    /// No emphasis.
    #[default]
    None,
    /// Bold text.
    Bold,
    /// Italic text.
    Italic,
}

/// One span of pre-styled content.
///
/// # Examples
///
/// ```
/// use rowboard_core::{Emphasis, RichSpan};
///
/// let span = RichSpan::new("feature flag").with_emphasis(Emphasis::Bold);
/// assert_eq!(span.text, "feature flag");
/// assert_eq!(span.emphasis, Emphasis::Bold);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichSpan {
    /// The span text.
    pub text: String,

    /// Emphasis applied to the text.
    #[serde(default)]
    pub emphasis: Emphasis,
}

impl RichSpan {
    /// Creates an unemphasized span.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: Emphasis::None,
        }
    }

    /// Sets the emphasis for this span.
    #[must_use]
    pub const fn with_emphasis(mut self, emphasis: Emphasis) -> Self {
        self.emphasis = emphasis;
        self
    }
}

/// The primary content of a table row.
///
/// Deserializes untagged from the table document: a bare JSON string becomes
/// [`Text`](Self::Text), an array of span objects becomes
/// [`Rich`](Self::Rich).
///
/// # Examples
///
/// ```
/// use rowboard_core::RowContent;
///
/// let text: RowContent = serde_json::from_str(r#""hello""#).unwrap();
/// assert_eq!(text, RowContent::Text("hello".to_owned()));
/// assert!(text.is_present());
///
/// let empty: RowContent = serde_json::from_str(r#""""#).unwrap();
/// assert!(!empty.is_present());
///
/// let rich: RowContent =
///     serde_json::from_str(r#"[{"text": "bold", "emphasis": "bold"}]"#).unwrap();
/// assert!(rich.is_present());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowContent {
    /// Plain string content.
    Text(String),

    /// Pre-built styled content.
    Rich(Vec<RichSpan>),
}

impl RowContent {
    /// Returns `true` if there is any non-empty content to show.
    ///
    /// This drives a row's initial visibility: rows with no content start
    /// collapsed.
    #[must_use]
    pub fn is_present(&self) -> bool {
        match self {
            Self::Text(text) => !text.is_empty(),
            Self::Rich(spans) => spans.iter().any(|s| !s.text.is_empty()),
        }
    }

    /// Returns the flattened plain text of the content.
    ///
    /// # Examples
    ///
    /// ```
    /// use rowboard_core::{RichSpan, RowContent};
    ///
    /// let rich = RowContent::Rich(vec![RichSpan::new("a"), RichSpan::new("b")]);
    /// assert_eq!(rich.plain_text(), "ab");
    /// ```
    #[must_use]
    pub fn plain_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Rich(spans) => spans.iter().map(|s| s.text.as_str()).collect(),
        }
    }
}

impl Default for RowContent {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for RowContent {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for RowContent {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_content_presence() {
        assert!(RowContent::from("A").is_present());
        assert!(!RowContent::from("").is_present());
        assert!(!RowContent::default().is_present());
    }

    #[test]
    fn test_rich_content_presence() {
        let rich = RowContent::Rich(vec![RichSpan::new("x")]);
        assert!(rich.is_present());

        let blank = RowContent::Rich(vec![RichSpan::new("")]);
        assert!(!blank.is_present());

        let empty = RowContent::Rich(Vec::new());
        assert!(!empty.is_present());
    }

    #[test]
    fn test_untagged_deserialization() {
        let text: RowContent = serde_json::from_str(r#""plain""#).unwrap();
        assert_eq!(text, RowContent::Text("plain".to_owned()));

        let rich: RowContent = serde_json::from_str(
            r#"[{"text": "a"}, {"text": "b", "emphasis": "italic"}]"#,
        )
        .unwrap();
        let RowContent::Rich(spans) = rich else {
            panic!("expected rich content");
        };
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[1].emphasis, Emphasis::Italic);
    }

    #[test]
    fn test_plain_text_flattening() {
        assert_eq!(RowContent::from("abc").plain_text(), "abc");

        let rich = RowContent::Rich(vec![
            RichSpan::new("hello "),
            RichSpan::new("world").with_emphasis(Emphasis::Bold),
        ]);
        assert_eq!(rich.plain_text(), "hello world");
    }
}
