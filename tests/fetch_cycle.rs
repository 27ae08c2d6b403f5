//! End-to-end fetch/render scenarios driven through `handle_event` with a
//! manual clock standing in for wall time.

use quoteboard::app::{handle_event, Action, AppState, Clock, Event, ManualClock, RequestId};
use quoteboard::fetch::decode_response;
use quoteboard::ui::StatusView;
use quoteboard::{FetchError, Quote, Theme};
use std::time::Duration;

const URL: &str = "https://example.test/quote";

struct Harness {
    state: AppState,
    clock: ManualClock,
    armed: Vec<Duration>,
}

impl Harness {
    fn new() -> Self {
        let clock = ManualClock::default();
        let state = AppState::new(URL, Theme::default(), Box::new(clock.clone()));
        Self {
            state,
            clock,
            armed: Vec::new(),
        }
    }

    fn send(&mut self, event: Event) -> (bool, Vec<Action>) {
        let (render, actions) = handle_event(&mut self.state, &event).unwrap();
        for action in &actions {
            if let Action::ArmTimer { delay } = action {
                self.armed.push(*delay);
            }
        }
        (render, actions)
    }

    /// Mounts or refreshes and returns the issued ticket.
    fn trigger(&mut self, event: Event) -> RequestId {
        let (_, actions) = self.send(event);
        actions
            .iter()
            .find_map(|action| match action {
                Action::FetchQuote(request) => Some(request.request),
                _ => None,
            })
            .expect("a fetch should have been issued")
    }

    fn settle(&mut self, request: RequestId, outcome: Result<Quote, FetchError>) {
        self.send(Event::FetchSettled { request, outcome });
    }

    fn advance(&mut self, ms: u64) {
        self.clock.advance(Duration::from_millis(ms));
        self.send(Event::TimerFired);
    }

    fn status(&self) -> StatusView {
        self.state.compute_viewmodel(24, 80).status
    }

    fn notice_visible(&self) -> bool {
        self.state.compute_viewmodel(24, 80).notice.is_some()
    }
}

fn content(view: &StatusView) -> Option<(String, String)> {
    match view {
        StatusView::Content(card) => Some((card.title.clone(), card.lines.join(" "))),
        _ => None,
    }
}

#[test]
fn quote_resolving_after_50ms_replaces_spinner() {
    let mut h = Harness::new();
    let request = h.trigger(Event::Mount);

    for _ in 0..5 {
        assert!(matches!(h.status(), StatusView::Spinner(_)));
        h.advance(10);
    }

    h.settle(request, Ok(Quote::new("T", "B")));
    assert_eq!(content(&h.status()), Some(("T".to_string(), "B".to_string())));
    assert!(!h.state.loader.is_loading());
}

#[test]
fn rejection_then_successful_refresh() {
    let mut h = Harness::new();
    let first = h.trigger(Event::Mount);
    h.settle(first, Err(FetchError::Status(503)));
    assert!(matches!(h.status(), StatusView::Error(_)));
    assert!(!h.notice_visible());

    let second = h.trigger(Event::Refresh);
    assert!(matches!(h.status(), StatusView::Spinner(_)));
    h.settle(second, Ok(Quote::new("Recovered", "Second time lucky")));

    assert_eq!(
        content(&h.status()),
        Some(("Recovered".to_string(), "Second time lucky".to_string()))
    );
    assert!(h.notice_visible());
}

#[test]
fn rejection_keeps_previous_content_stored() {
    let mut h = Harness::new();
    let first = h.trigger(Event::Mount);
    h.settle(first, Ok(Quote::new("Kept", "Still here")));

    let second = h.trigger(Event::Refresh);
    h.settle(second, decode_response(500, b""));

    assert!(matches!(h.status(), StatusView::Error(_)));
    assert_eq!(h.state.loader.content(), Some(&Quote::new("Kept", "Still here")));
}

#[test]
fn notice_hides_after_exactly_1500ms() {
    let mut h = Harness::new();
    let request = h.trigger(Event::Mount);
    h.settle(request, Ok(Quote::new("T", "B")));

    assert!(h.notice_visible());
    assert_eq!(h.armed, vec![Duration::from_millis(1500)]);

    h.advance(1499);
    assert!(h.notice_visible());
    h.advance(1);
    assert!(!h.notice_visible());
}

#[test]
fn sustained_success_does_not_extend_notice() {
    let mut h = Harness::new();
    let request = h.trigger(Event::Mount);
    h.settle(request, Ok(Quote::new("T", "B")));

    h.advance(700);
    assert!(h.state.loader.just_succeeded());
    let now = h.clock.now();
    let state = &mut h.state;
    let rearm = state
        .notice
        .observe(state.loader.just_succeeded(), now, &mut state.timers);
    assert_eq!(rearm, None);
    assert_eq!(state.timers.len(), 1);

    // Mounting again in Success starts nothing either.
    let (_, actions) = h.send(Event::Mount);
    assert!(actions.is_empty());
    assert_eq!(h.armed.len(), 1);

    h.advance(800);
    assert!(!h.notice_visible());
}

#[test]
fn refresh_before_hide_rearms_from_new_success() {
    let mut h = Harness::new();
    let first = h.trigger(Event::Mount);
    h.settle(first, Ok(Quote::new("one", "1")));

    h.advance(1000);
    let second = h.trigger(Event::Refresh);
    h.advance(100);
    h.settle(second, Ok(Quote::new("two", "2")));
    assert_eq!(h.armed.len(), 2);

    h.advance(400); // 1500 ms after the first success
    assert!(h.notice_visible());
    h.advance(1100); // 1500 ms after the second success
    assert!(!h.notice_visible());
}

#[test]
fn loading_only_between_trigger_and_settle() {
    let mut h = Harness::new();
    assert!(!h.state.loader.is_loading());

    let outcomes = [
        Ok(Quote::new("a", "b")),
        Err(FetchError::EmptyList),
        Err(FetchError::Decode("nope".into())),
        Ok(Quote::new("c", "d")),
    ];
    let mut first = true;
    for outcome in outcomes {
        let event = if first { Event::Mount } else { Event::Refresh };
        first = false;

        let request = h.trigger(event);
        assert!(h.state.loader.is_loading());
        h.settle(request, outcome);
        assert!(!h.state.loader.is_loading());
        assert!(!(h.state.loader.just_succeeded() && h.state.loader.has_error()));
    }
}

#[test]
fn close_cancels_pending_hide() {
    let mut h = Harness::new();
    let request = h.trigger(Event::Mount);
    h.settle(request, Ok(Quote::new("T", "B")));

    let (_, actions) = h.send(Event::Close);
    assert_eq!(actions, vec![Action::CloseSelf]);
    assert!(h.state.timers.is_empty());

    let (render, _) = h.send(Event::TimerFired);
    assert!(!render);
}
