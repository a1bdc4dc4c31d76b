//! Outcome events for supplemental-content fetches.
//!
//! One [`FetchOutcome`] is emitted per row, whether or not the fetch
//! produced content. Outcomes arrive in completion order, not row order;
//! the `index` ties each outcome back to its row.

/// The result of one row's supplemental-content fetch.
///
/// # Examples
///
/// ```
/// use rowboard_fetch::FetchOutcome;
///
/// let hit = FetchOutcome::with_content(0, "extra-A");
/// assert_eq!(hit.extra.as_deref(), Some("extra-A"));
///
/// let miss = FetchOutcome::empty(1);
/// assert!(miss.extra.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    /// Position of the row this outcome belongs to.
    pub index: usize,

    /// The supplemental content, if the response carried any.
    ///
    /// `None` covers every miss: transport error, non-success status,
    /// undecodable body, missing `extraContent`, or an empty string.
    pub extra: Option<String>,
}

impl FetchOutcome {
    /// Creates an outcome carrying supplemental content.
    #[inline]
    #[must_use]
    pub fn with_content(index: usize, extra: impl Into<String>) -> Self {
        Self {
            index,
            extra: Some(extra.into()),
        }
    }

    /// Creates an outcome with no supplemental content.
    #[inline]
    #[must_use]
    pub const fn empty(index: usize) -> Self {
        Self { index, extra: None }
    }

    /// Returns `true` if this outcome carries content.
    #[inline]
    #[must_use]
    pub const fn has_content(&self) -> bool {
        self.extra.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_with_content() {
        let outcome = FetchOutcome::with_content(3, "X");
        assert_eq!(outcome.index, 3);
        assert!(outcome.has_content());
        assert_eq!(outcome.extra.as_deref(), Some("X"));
    }

    #[test]
    fn test_outcome_empty() {
        let outcome = FetchOutcome::empty(7);
        assert_eq!(outcome.index, 7);
        assert!(!outcome.has_content());
    }
}
