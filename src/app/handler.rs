//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place where [`AppState`] changes. After any
//! loader transition it feeds the loader's success signal into the transient
//! notice, so the banner's edge detection sees every state the user could
//! have seen.
//!
//! ```text
//! Mount/Refresh ──▶ loader.trigger ──▶ Action::FetchQuote
//! FetchSettled  ──▶ loader.settle  ──▶ notice.observe ──▶ Action::ArmTimer
//! TimerFired    ──▶ timers.take_due ──▶ notice.expire
//! ```

use crate::app::loader::{LoadState, RequestId};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{FetchError, Quote};

/// Events triggered by the host, the user, or fetch completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The plugin is ready to fetch (permissions granted).
    Mount,

    /// The user asked for a new quote.
    Refresh,

    /// The host finished a request issued by [`Action::FetchQuote`].
    FetchSettled {
        /// Ticket the request was issued with.
        request: RequestId,
        /// Decoded quote or the reason the fetch failed.
        outcome: std::result::Result<Quote, FetchError>,
    },

    /// A host timer armed by [`Action::ArmTimer`] fired.
    TimerFired,

    /// The user asked to close the pane.
    Close,

    /// The plugin is being torn down by the host.
    Unmount,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`: whether the pane needs redrawing, and the side
/// effects to run in order.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the shim's error path uniform.
///
/// # Example
///
/// ```rust
/// use quoteboard::app::{handle_event, Action, AppState, Event, ManualClock};
/// use quoteboard::Theme;
///
/// let mut state = AppState::new("https://example.test/quote", Theme::default(), Box::new(ManualClock::default()));
/// let (render, actions) = handle_event(&mut state, &Event::Mount)?;
/// assert!(render);
/// assert!(matches!(actions[0], Action::FetchQuote(_)));
/// # Ok::<(), quoteboard::QuoteboardError>(())
/// ```
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event_name(event)).entered();

    match event {
        Event::Mount => {
            if state.loader.state() != LoadState::Idle {
                tracing::debug!("already mounted, skipping initial fetch");
                return Ok((false, vec![]));
            }
            Ok((true, start_fetch(state)))
        }
        Event::Refresh => {
            if state.loader.is_loading() {
                tracing::debug!("refresh ignored while loading");
                return Ok((false, vec![]));
            }
            Ok((true, start_fetch(state)))
        }
        Event::FetchSettled { request, outcome } => {
            if !state.loader.settle(*request, outcome.clone()) {
                return Ok((false, vec![]));
            }
            Ok((true, sync_notice(state)))
        }
        Event::TimerFired => {
            let now = state.clock.now();
            let changed = state
                .timers
                .take_due(now)
                .into_iter()
                .fold(false, |changed, id| state.notice.expire(id) || changed);
            tracing::trace!(now_ms = now.as_millis() as u64, changed, "timer tick");
            Ok((changed, vec![]))
        }
        Event::Close => {
            state.notice.teardown(&mut state.timers);
            Ok((false, vec![Action::CloseSelf]))
        }
        Event::Unmount => {
            state.notice.teardown(&mut state.timers);
            Ok((false, vec![]))
        }
    }
}

/// Triggers the loader and lets the notice see the falling edge.
fn start_fetch(state: &mut AppState) -> Vec<Action> {
    let request = state.loader.trigger();
    let mut actions = vec![Action::FetchQuote(state.fetch_request(request))];
    actions.extend(sync_notice(state));
    actions
}

fn sync_notice(state: &mut AppState) -> Vec<Action> {
    let now = state.clock.now();
    let signal = state.loader.just_succeeded();
    state
        .notice
        .observe(signal, now, &mut state.timers)
        .map(|delay| Action::ArmTimer { delay })
        .into_iter()
        .collect()
}

const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::Mount => "Mount",
        Event::Refresh => "Refresh",
        Event::FetchSettled { .. } => "FetchSettled",
        Event::TimerFired => "TimerFired",
        Event::Close => "Close",
        Event::Unmount => "Unmount",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ManualClock;
    use crate::ui::Theme;
    use std::time::Duration;

    fn state() -> (AppState, ManualClock) {
        let clock = ManualClock::default();
        let state = AppState::new("https://example.test/quote", Theme::default(), Box::new(clock.clone()));
        (state, clock)
    }

    fn fetched(actions: &[Action]) -> RequestId {
        actions
            .iter()
            .find_map(|action| match action {
                Action::FetchQuote(request) => Some(request.request),
                _ => None,
            })
            .expect("fetch action")
    }

    #[test]
    fn mount_fetches_once() {
        let (mut state, _clock) = state();
        let (_, actions) = handle_event(&mut state, &Event::Mount).unwrap();
        assert_eq!(actions.len(), 1);
        assert_eq!(
            actions[0],
            Action::FetchQuote(crate::fetch::FetchRequest::new("https://example.test/quote", RequestId(1)))
        );

        let (render, actions) = handle_event(&mut state, &Event::Mount).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn refresh_is_ignored_while_loading() {
        let (mut state, _clock) = state();
        handle_event(&mut state, &Event::Mount).unwrap();
        let (render, actions) = handle_event(&mut state, &Event::Refresh).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn success_arms_notice_timer() {
        let (mut state, _clock) = state();
        let (_, actions) = handle_event(&mut state, &Event::Mount).unwrap();
        let request = fetched(&actions);

        let (render, actions) = handle_event(
            &mut state,
            &Event::FetchSettled {
                request,
                outcome: Ok(Quote::new("T", "B")),
            },
        )
        .unwrap();
        assert!(render);
        assert_eq!(actions, vec![Action::ArmTimer { delay: Duration::from_millis(1500) }]);
        assert!(state.notice.is_visible());
    }

    #[test]
    fn failure_arms_nothing() {
        let (mut state, _clock) = state();
        let (_, actions) = handle_event(&mut state, &Event::Mount).unwrap();
        let request = fetched(&actions);

        let (render, actions) = handle_event(
            &mut state,
            &Event::FetchSettled {
                request,
                outcome: Err(FetchError::Status(502)),
            },
        )
        .unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert!(!state.notice.is_visible());
    }

    #[test]
    fn early_tick_does_not_hide_notice() {
        let (mut state, clock) = state();
        let (_, actions) = handle_event(&mut state, &Event::Mount).unwrap();
        handle_event(
            &mut state,
            &Event::FetchSettled {
                request: fetched(&actions),
                outcome: Ok(Quote::new("T", "B")),
            },
        )
        .unwrap();

        clock.advance(Duration::from_millis(1000));
        assert_eq!(handle_event(&mut state, &Event::TimerFired).unwrap(), (false, vec![]));
        assert!(state.notice.is_visible());

        clock.advance(Duration::from_millis(500));
        assert_eq!(handle_event(&mut state, &Event::TimerFired).unwrap(), (true, vec![]));
        assert!(!state.notice.is_visible());
    }

    #[test]
    fn close_tears_down_notice() {
        let (mut state, _clock) = state();
        let (_, actions) = handle_event(&mut state, &Event::Mount).unwrap();
        handle_event(
            &mut state,
            &Event::FetchSettled {
                request: fetched(&actions),
                outcome: Ok(Quote::new("T", "B")),
            },
        )
        .unwrap();

        let (_, actions) = handle_event(&mut state, &Event::Close).unwrap();
        assert_eq!(actions, vec![Action::CloseSelf]);
        assert!(!state.notice.is_visible());
        assert!(state.timers.is_empty());
    }

    #[test]
    fn unmount_cancels_pending_hide() {
        let (mut state, clock) = state();
        let (_, actions) = handle_event(&mut state, &Event::Mount).unwrap();
        handle_event(
            &mut state,
            &Event::FetchSettled {
                request: fetched(&actions),
                outcome: Ok(Quote::new("T", "B")),
            },
        )
        .unwrap();
        assert_eq!(state.timers.len(), 1);

        let (render, actions) = handle_event(&mut state, &Event::Unmount).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert!(state.timers.is_empty());
        assert!(!state.notice.has_pending_hide());

        clock.advance(Duration::from_millis(1500));
        assert_eq!(handle_event(&mut state, &Event::TimerFired).unwrap(), (false, vec![]));
    }
}
