//! Application state and view model computation.
//!
//! [`AppState`] composes the three concerns of the plugin as plain fields:
//! the [`ContentLoader`], the [`TransientNotice`] and the [`TimerQueue`] the
//! notice schedules into. Rendering never reads them directly; it goes
//! through [`AppState::compute_viewmodel`], which evaluates the status view
//! and the notice as pure functions of this state.
//!
//! # Example
//!
//! ```rust
//! use quoteboard::app::{AppState, ManualClock};
//! use quoteboard::Theme;
//!
//! let state = AppState::new("https://example.test/quote", Theme::default(), Box::new(ManualClock::default()));
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.notice.is_none());
//! ```

use super::clock::Clock;
use super::loader::{ContentLoader, RequestId};
use super::notice::TransientNotice;
use super::timer::TimerQueue;
use crate::fetch::FetchRequest;
use crate::ui::status::status_view;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FooterInfo, HeaderInfo, NoticeInfo, UIViewModel};
use std::time::Duration;

const TITLE: &str = " Quoteboard ";
const SUCCESS_HEADLINE: &str = "Success!";
const SUCCESS_MESSAGE: &str = "We loaded your quote successfully";

/// Horizontal padding kept free on each side of the status area.
const CONTENT_MARGIN: usize = 2;

/// Central state container for the plugin.
#[derive(Debug)]
pub struct AppState {
    /// Fetch status and the last loaded quote.
    pub loader: ContentLoader,

    /// Success banner.
    pub notice: TransientNotice,

    /// Pending deadlines (the notice's hide).
    pub timers: TimerQueue,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Time source used for every deadline.
    pub clock: Box<dyn Clock>,

    /// Endpoint fetched on mount and refresh.
    pub quote_url: String,
}

impl AppState {
    /// Creates a state with the default 1500 ms notice duration.
    #[must_use]
    pub fn new(quote_url: impl Into<String>, theme: Theme, clock: Box<dyn Clock>) -> Self {
        Self {
            loader: ContentLoader::new(),
            notice: TransientNotice::default(),
            timers: TimerQueue::new(),
            theme,
            clock,
            quote_url: quote_url.into(),
        }
    }

    /// Replaces the success banner duration.
    #[must_use]
    pub fn with_notice_duration(mut self, duration: Duration) -> Self {
        self.notice = TransientNotice::new(duration);
        self
    }

    pub(crate) fn fetch_request(&self, request: RequestId) -> FetchRequest {
        FetchRequest::new(self.quote_url.clone(), request)
    }

    /// Transforms the current state into a renderable view model.
    ///
    /// `rows` is accepted for symmetry with the renderer; layout only depends
    /// on the width.
    #[must_use]
    pub fn compute_viewmodel(&self, _rows: usize, cols: usize) -> UIViewModel {
        let width = cols.saturating_sub(CONTENT_MARGIN * 2).max(1);

        UIViewModel {
            header: HeaderInfo {
                title: TITLE.to_string(),
            },
            notice: self.notice.is_visible().then(|| NoticeInfo {
                headline: SUCCESS_HEADLINE.to_string(),
                message: SUCCESS_MESSAGE.to_string(),
            }),
            status: status_view(
                self.loader.is_loading(),
                self.loader.has_error(),
                self.loader.content(),
                width,
            ),
            footer: self.compute_footer(),
        }
    }

    /// Refresh is advertised as unavailable while a fetch is outstanding.
    fn compute_footer(&self) -> FooterInfo {
        let refresh_enabled = !self.loader.is_loading();
        let keybindings = if refresh_enabled {
            "r/Enter: new quote  q/Esc: quit"
        } else {
            "r/Enter: loading...  q/Esc: quit"
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
            refresh_enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ManualClock;
    use crate::domain::{FetchError, Quote};
    use crate::ui::status::StatusView;

    fn state() -> AppState {
        AppState::new("https://example.test/quote", Theme::default(), Box::new(ManualClock::default()))
    }

    #[test]
    fn idle_state_renders_nothing() {
        let vm = state().compute_viewmodel(24, 80);
        assert_eq!(vm.status, StatusView::Nothing);
        assert!(vm.footer.refresh_enabled);
        assert!(vm.notice.is_none());
    }

    #[test]
    fn loading_disables_refresh_and_shows_spinner() {
        let mut state = state();
        state.loader.trigger();

        let vm = state.compute_viewmodel(24, 80);
        assert!(matches!(vm.status, StatusView::Spinner(_)));
        assert!(!vm.footer.refresh_enabled);
    }

    #[test]
    fn error_hides_stale_content() {
        let mut state = state();
        let first = state.loader.trigger();
        state.loader.settle(first, Ok(Quote::new("T", "B")));
        let second = state.loader.trigger();
        state.loader.settle(second, Err(FetchError::Status(500)));

        let vm = state.compute_viewmodel(24, 80);
        assert!(matches!(vm.status, StatusView::Error(_)));
    }

    #[test]
    fn notice_duration_is_configurable() {
        let state = state().with_notice_duration(Duration::from_millis(300));
        assert_eq!(state.notice.duration(), Duration::from_millis(300));
    }
}
