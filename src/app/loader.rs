//! Asynchronous fetch state.
//!
//! [`ContentLoader`] owns the quote and the status of the fetch that produces
//! it. The fetch itself happens outside: [`ContentLoader::trigger`] hands out a
//! [`RequestId`] ticket and the host later reports back through
//! [`ContentLoader::settle`].
//!
//! ```text
//!            trigger                 settle(Ok)
//!   Idle ─────────────▶ Loading ─────────────────▶ Success
//!     ▲                  │  ▲                         │
//!     │       settle(Err)│  │ trigger                 │ trigger
//!     │                  ▼  │                         │
//!     │                 Error ◀───────────────────────┘ (via Loading)
//! ```

use crate::domain::{FetchError, Quote};
use std::collections::BTreeSet;

/// Status of the quote fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing has been requested yet.
    #[default]
    Idle,
    /// A fetch is outstanding.
    Loading,
    /// The most recent fetch failed.
    Error,
    /// The most recent fetch succeeded.
    Success,
}

/// Ticket identifying one trigger of the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Owner of the fetch state and the last successfully loaded quote.
///
/// The quote survives later loads and failures; only a newer success replaces
/// it.
#[derive(Debug, Default)]
pub struct ContentLoader {
    state: LoadState,
    content: Option<Quote>,
    last_error: Option<FetchError>,
    issued: u64,
    outstanding: BTreeSet<RequestId>,
}

impl ContentLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fetch: moves to [`LoadState::Loading`], clears the previous
    /// error and returns the ticket the result must be settled with.
    ///
    /// Triggering while already loading is allowed. Both fetches stay
    /// outstanding and both results are applied when they arrive.
    pub fn trigger(&mut self) -> RequestId {
        self.issued += 1;
        let request = RequestId(self.issued);

        if !self.outstanding.is_empty() {
            tracing::debug!(%request, in_flight = self.outstanding.len(), "overlapping fetch triggered");
        }
        self.outstanding.insert(request);
        self.state = LoadState::Loading;
        self.last_error = None;

        tracing::debug!(%request, "fetch triggered");
        request
    }

    /// Records the result of a fetch.
    ///
    /// Every issued ticket is applied exactly once: a quote replaces the
    /// stored content and a failure is recorded. While a newer ticket is
    /// still outstanding the state stays [`LoadState::Loading`].
    ///
    /// Returns `false` and changes nothing when `request` was never issued or
    /// has already settled.
    pub fn settle(&mut self, request: RequestId, outcome: Result<Quote, FetchError>) -> bool {
        if !self.outstanding.remove(&request) {
            tracing::debug!(%request, "ignoring result for unknown or settled ticket");
            return false;
        }
        let superseded = self.outstanding.iter().any(|pending| *pending > request);

        let settled = match outcome {
            Ok(quote) => {
                tracing::debug!(%request, title = %quote.title, superseded, "fetch succeeded");
                self.content = Some(quote);
                self.last_error = None;
                LoadState::Success
            }
            Err(error) => {
                tracing::warn!(%request, %error, superseded, "fetch failed");
                self.last_error = Some(error);
                LoadState::Error
            }
        };
        if !superseded {
            self.state = settled;
        }
        true
    }

    #[must_use]
    pub const fn state(&self) -> LoadState {
        self.state
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    #[must_use]
    pub fn has_error(&self) -> bool {
        self.state == LoadState::Error
    }

    /// The "just succeeded" signal fed to the transient notice.
    #[must_use]
    pub fn just_succeeded(&self) -> bool {
        self.state == LoadState::Success
    }

    #[must_use]
    pub const fn content(&self) -> Option<&Quote> {
        self.content.as_ref()
    }

    #[must_use]
    pub const fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    /// Number of issued tickets that have not settled yet.
    #[must_use]
    pub fn outstanding(&self) -> usize {
        self.outstanding.len()
    }
}
