//! Quote payload model.
//!
//! A quote is an opaque `{title, body}` record. Quote services disagree on
//! field names, so decoding accepts the common aliases: `content` or `quote`
//! for the body, `author` for the title.

use serde::{Deserialize, Serialize};

/// A quote returned by the fetch collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(default, alias = "author")]
    pub title: String,
    #[serde(default, alias = "content", alias = "quote")]
    pub body: String,
}

impl Quote {
    /// Creates a quote from a title and body.
    ///
    /// # Examples
    ///
    /// ```
    /// use quoteboard::Quote;
    ///
    /// let quote = Quote::new("Ada Lovelace", "That brain of mine is something more than merely mortal.");
    /// assert_eq!(quote.title, "Ada Lovelace");
    /// assert!(!quote.is_empty());
    /// ```
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Returns `true` when both title and body are blank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.trim().is_empty() && self.body.trim().is_empty()
    }
}
