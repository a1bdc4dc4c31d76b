//! Wire format of the supplemental-content response.
//!
//! A row's `href` is expected to return a JSON object with an optional
//! `extraContent` field. Absence of the field means the row has no
//! supplemental content; an empty string is treated the same way.

use serde::Deserialize;

/// Decoded supplemental-content response body.
///
/// # Examples
///
/// ```
/// use rowboard_fetch::ExtraResponse;
///
/// let response: ExtraResponse =
///     serde_json::from_str(r#"{"extraContent": "extra-A"}"#).unwrap();
/// assert_eq!(response.into_extra().as_deref(), Some("extra-A"));
///
/// let none: ExtraResponse = serde_json::from_str("{}").unwrap();
/// assert!(none.into_extra().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ExtraResponse {
    /// The supplemental content, if present.
    #[serde(default, rename = "extraContent")]
    pub extra_content: Option<String>,
}

impl ExtraResponse {
    /// Extracts the supplemental content, normalizing empty strings to `None`.
    #[must_use]
    pub fn into_extra(self) -> Option<String> {
        self.extra_content.filter(|s| !s.is_empty())
    }

    /// Decodes a response body, collapsing decode failures into `None`.
    ///
    /// Unknown fields are ignored; the response object may carry anything
    /// else alongside `extraContent`.
    #[must_use]
    pub fn decode(body: &[u8]) -> Option<String> {
        match serde_json::from_slice::<Self>(body) {
            Ok(response) => response.into_extra(),
            Err(error) => {
                tracing::debug!(error = %error, "Undecodable supplemental response body");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_with_content() {
        assert_eq!(
            ExtraResponse::decode(br#"{"extraContent": "extra-A"}"#),
            Some("extra-A".to_owned())
        );
    }

    #[test]
    fn test_decode_missing_field() {
        assert_eq!(ExtraResponse::decode(b"{}"), None);
    }

    #[test]
    fn test_decode_empty_string_is_none() {
        assert_eq!(ExtraResponse::decode(br#"{"extraContent": ""}"#), None);
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        assert_eq!(
            ExtraResponse::decode(br#"{"status": "ok", "extraContent": "X"}"#),
            Some("X".to_owned())
        );
    }

    #[test]
    fn test_decode_invalid_body() {
        assert_eq!(ExtraResponse::decode(b"not json"), None);
        assert_eq!(ExtraResponse::decode(b""), None);
    }
}
