//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the Quoteboard library and the Zellij
//! plugin system: it translates host events into library [`Event`]s and
//! library [`Action`]s into host calls.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: Request `WebAccess`; once granted, mount (first fetch)
//! 3. **Update**: Keys, web results and timer ticks go through `handle_event`
//! 4. **Render**: Call the library render function
//!
//! # Event Mapping
//!
//! - `Key(r)` / `Key(Enter)` → `Event::Refresh`
//! - `Key(q)` / `Key(Esc)` → `Event::Close`
//! - `WebRequestResult` → `Event::FetchSettled` (only for our own requests)
//! - `Timer` → `Event::TimerFired`
//! - `PermissionRequestResult(Granted)` → `Event::Mount`
//! - `BeforeClose` → `Event::Unmount`

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use quoteboard::fetch::{decode_response, request_from_context, FetchRequest};
use quoteboard::{handle_event, Action, Config, Event};

register_plugin!(State);

/// Plugin state wrapper around the library's `AppState`.
struct State {
    app: quoteboard::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: quoteboard::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        quoteboard::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(quote_url = %config.quote_url, "parsed configuration");
        self.app = quoteboard::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::Timer,
            EventType::PermissionRequestResult,
            EventType::BeforeClose,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Returns `true` when the pane should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match Self::map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_result(status, &body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::TimerFired,
            zellij_tile::prelude::Event::PermissionRequestResult(PermissionStatus::Granted) => {
                tracing::debug!("web access granted - mounting");
                Event::Mount
            }
            zellij_tile::prelude::Event::PermissionRequestResult(PermissionStatus::Denied) => {
                tracing::warn!("web access denied - quotes cannot be fetched");
                return false;
            }
            zellij_tile::prelude::Event::BeforeClose => Event::Unmount,
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for action in actions {
                    Self::execute_action(&action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        quoteboard::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            zellij_tile::prelude::Event::BeforeClose => "BeforeClose".to_string(),
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(key: &KeyWithModifier) -> Option<Event> {
        match key.bare_key {
            BareKey::Char('r') | BareKey::Enter => Some(Event::Refresh),
            BareKey::Char('q') | BareKey::Esc => Some(Event::Close),
            _ => None,
        }
    }

    /// Ignores results whose context does not carry one of our tickets.
    fn map_web_result(status: u16, body: &[u8], context: &BTreeMap<String, String>) -> Option<Event> {
        let Some(request) = request_from_context(context) else {
            tracing::debug!(status, "ignoring web result without a quoteboard ticket");
            return None;
        };

        tracing::debug!(%request, status, body_len = body.len(), "web request settled");
        Some(Event::FetchSettled {
            request,
            outcome: decode_response(status, body),
        })
    }

    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::FetchQuote(request) => Self::issue_request(request),
            Action::ArmTimer { delay } => set_timeout(delay.as_secs_f64()),
            Action::CloseSelf => close_self(),
        }
    }

    fn issue_request(request: &FetchRequest) {
        web_request(
            &request.url,
            HttpVerb::Get,
            request.headers(),
            vec![],
            request.context(),
        );
    }
}
