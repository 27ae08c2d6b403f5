//! Quoteboard: a Zellij plugin that fetches a quote and renders its fetch
//! states.
//!
//! The pane shows a loading indicator while a request is outstanding, a
//! generic error banner when it fails, and the quote once it arrives. Every
//! successful load also flashes a success banner that hides itself after a
//! fixed delay.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← host events / calls
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - ContentLoader    (fetch state machine)           │
//! │  - TransientNotice  (edge-triggered banner)         │
//! │  - TimerQueue/Clock (cancellable deadlines)         │
//! │  - handle_event     (events → state → actions)      │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────────────┐   ┌──────────────────────────┐
//! │ UI Layer (ui/)        │   │ Fetch Layer (fetch/)     │
//! │ - status view         │   │ - request tagging        │
//! │ - components, theme   │   │ - response decoding      │
//! └───────────────────────┘   └──────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (quote, errors) · Infrastructure (paths)    │
//! │  Observability (OpenTelemetry file export)          │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/quoteboard.wasm" {
//!         quote_url "https://dummyjson.com/quotes/random"
//!         notice_ms "1500"
//!         theme "catppuccin-latte"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use quoteboard::app::{handle_event, Action, AppState, Event, ManualClock};
//! use quoteboard::{Quote, Theme};
//!
//! let mut state = AppState::new("https://example.test/quote", Theme::default(), Box::new(ManualClock::default()));
//! let (_, actions) = handle_event(&mut state, &Event::Mount)?;
//! let Action::FetchQuote(request) = &actions[0] else { unreachable!() };
//!
//! handle_event(&mut state, &Event::FetchSettled {
//!     request: request.request,
//!     outcome: Ok(Quote::new("T", "B")),
//! })?;
//! assert!(state.notice.is_visible());
//! # Ok::<(), quoteboard::QuoteboardError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod fetch;
pub mod infrastructure;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event};
pub use domain::{FetchError, Quote, QuoteboardError, Result};
pub use ui::Theme;

use std::collections::BTreeMap;
use std::time::Duration;

/// Endpoint used when `quote_url` is not configured.
pub const DEFAULT_QUOTE_URL: &str = "https://dummyjson.com/quotes/random";

/// Plugin configuration parsed from Zellij's configuration map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Endpoint fetched on mount and on every refresh.
    pub quote_url: String,

    /// How long the success banner stays visible. Default: 1500 ms.
    pub notice_duration: Duration,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file; `~` maps to the sandbox's `/host`.
    pub theme_file: Option<String>,

    /// Tracing filter (`trace`, `debug`, `info`, ...). Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quote_url: DEFAULT_QUOTE_URL.to_string(),
            notice_duration: app::DEFAULT_NOTICE_DURATION,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Blank strings count as unset. `notice_ms` falls back to the default
    /// when it is missing, zero, or not a number.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use std::time::Duration;
    /// use quoteboard::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("quote_url".to_string(), "https://example.test/q".to_string());
    /// map.insert("notice_ms".to_string(), "900".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.quote_url, "https://example.test/q");
    /// assert_eq!(config.notice_duration, Duration::from_millis(900));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|raw| raw.trim())
                .filter(|raw| !raw.is_empty())
                .map(String::from)
        };

        let notice_duration = value("notice_ms")
            .and_then(|raw| raw.parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .map_or(app::DEFAULT_NOTICE_DURATION, Duration::from_millis);

        Self {
            quote_url: value("quote_url").unwrap_or_else(|| DEFAULT_QUOTE_URL.to_string()),
            notice_duration,
            theme_name: value("theme"),
            theme_file: value("theme_file"),
            trace_level: value("trace_level"),
        }
    }

    /// Resolves the configured theme: file first, then name, then default.
    ///
    /// Failures are logged and fall back to the default theme.
    #[must_use]
    pub fn resolve_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            match Theme::from_file(&path) {
                Ok(theme) => return theme,
                Err(e) => {
                    tracing::warn!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                }
            }
        } else if let Some(theme_name) = &self.theme_name {
            match Theme::from_name(theme_name) {
                Some(theme) => return theme,
                None => tracing::warn!(theme_name = %theme_name, "unknown theme, using default"),
            }
        }
        Theme::default()
    }
}

/// Builds the plugin state for `config` on the wall clock.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(quote_url = %config.quote_url, "initializing quoteboard plugin");

    AppState::new(
        config.quote_url.clone(),
        config.resolve_theme(),
        Box::new(app::MonotonicClock::new()),
    )
    .with_notice_duration(config.notice_duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_yields_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn invalid_or_blank_values_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("quote_url", "   "),
            ("notice_ms", "soon"),
            ("theme", ""),
        ]));
        assert_eq!(config.quote_url, DEFAULT_QUOTE_URL);
        assert_eq!(config.notice_duration, Duration::from_millis(1500));
        assert_eq!(config.theme_name, None);

        let config = Config::from_zellij(&map(&[("notice_ms", "0")]));
        assert_eq!(config.notice_duration, Duration::from_millis(1500));
    }

    #[test]
    fn theme_resolution_falls_back_to_default() {
        let named = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            ..Config::default()
        };
        assert_eq!(named.resolve_theme().name, "catppuccin-latte");

        let unknown = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Config::default()
        };
        assert_eq!(unknown.resolve_theme(), Theme::default());

        let missing_file = Config {
            theme_file: Some("/nope/theme.toml".to_string()),
            theme_name: Some("catppuccin-latte".to_string()),
            ..Config::default()
        };
        assert_eq!(missing_file.resolve_theme(), Theme::default());
    }

    #[test]
    fn initialize_applies_notice_duration() {
        let config = Config {
            notice_duration: Duration::from_millis(250),
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.notice.duration(), Duration::from_millis(250));
        assert_eq!(state.quote_url, DEFAULT_QUOTE_URL);
    }
}
