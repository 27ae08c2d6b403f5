//! Status area selection.
//!
//! [`status_view`] decides what the middle of the pane shows. The checks run
//! in a fixed priority order and the first match wins:
//!
//! 1. loading → spinner (nothing else is shown)
//! 2. error → error banner (stale content is hidden)
//! 3. no content, or an empty quote → nothing
//! 4. otherwise → the quote panel

use super::helpers::wrap_text;
use crate::domain::Quote;

const LOADING_LABEL: &str = "Loading your quote...";
const ERROR_HEADLINE: &str = "Error!";
const ERROR_MESSAGE: &str = "We encountered an error while loading your content!";

/// What the status area renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusView {
    Spinner(SpinnerInfo),
    Error(ErrorInfo),
    Content(QuoteCard),
    Nothing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinnerInfo {
    pub label: String,
}

/// Generic failure banner. Every fetch failure renders the same text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub headline: String,
    pub message: String,
}

/// A quote laid out for a given width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteCard {
    pub title: String,
    pub lines: Vec<String>,
}

impl QuoteCard {
    #[must_use]
    pub fn new(quote: &Quote, width: usize) -> Self {
        Self {
            title: quote.title.trim().to_string(),
            lines: wrap_text(quote.body.trim(), width),
        }
    }
}

/// Maps `{loading, error, content}` onto a [`StatusView`].
///
/// # Example
///
/// ```rust
/// use quoteboard::ui::status::{status_view, StatusView};
/// use quoteboard::Quote;
///
/// let quote = Quote::new("T", "B");
/// assert!(matches!(status_view(true, true, Some(&quote), 80), StatusView::Spinner(_)));
/// assert!(matches!(status_view(false, true, Some(&quote), 80), StatusView::Error(_)));
/// assert!(matches!(status_view(false, false, Some(&quote), 80), StatusView::Content(_)));
/// assert_eq!(status_view(false, false, None, 80), StatusView::Nothing);
/// ```
#[must_use]
pub fn status_view(loading: bool, error: bool, content: Option<&Quote>, width: usize) -> StatusView {
    if loading {
        return StatusView::Spinner(SpinnerInfo {
            label: LOADING_LABEL.to_string(),
        });
    }
    if error {
        return StatusView::Error(ErrorInfo {
            headline: ERROR_HEADLINE.to_string(),
            message: ERROR_MESSAGE.to_string(),
        });
    }
    match content {
        Some(quote) if !quote.is_empty() => StatusView::Content(QuoteCard::new(quote, width)),
        _ => StatusView::Nothing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_quote_renders_nothing() {
        assert_eq!(status_view(false, false, Some(&Quote::default()), 40), StatusView::Nothing);
    }

    #[test]
    fn content_is_wrapped_to_width() {
        let quote = Quote::new(" Title ", "one two three four");
        let StatusView::Content(card) = status_view(false, false, Some(&quote), 9) else {
            panic!("expected content");
        };
        assert_eq!(card.title, "Title");
        assert_eq!(card.lines, vec!["one two", "three", "four"]);
    }

    #[test]
    fn priority_order_holds_for_every_combination() {
        let quote = Quote::new("T", "B");
        for loading in [false, true] {
            for error in [false, true] {
                for content in [None, Some(&quote)] {
                    let view = status_view(loading, error, content, 20);
                    let expected = if loading {
                        "spinner"
                    } else if error {
                        "error"
                    } else if content.is_some() {
                        "content"
                    } else {
                        "nothing"
                    };
                    let actual = match view {
                        StatusView::Spinner(_) => "spinner",
                        StatusView::Error(_) => "error",
                        StatusView::Content(_) => "content",
                        StatusView::Nothing => "nothing",
                    };
                    assert_eq!(actual, expected, "loading={loading} error={error}");
                }
            }
        }
    }
}
