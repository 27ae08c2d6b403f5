//! Edge-triggered success banner.
//!
//! [`TransientNotice`] turns the loader's "just succeeded" level into a banner
//! that is shown on every false→true edge and hidden again after a fixed
//! duration. Each edge schedules exactly one hide in the [`TimerQueue`]; a
//! newer edge cancels the older hide, and a hide only takes effect when its id
//! is still the pending one.

use super::timer::{TimerId, TimerQueue};
use std::time::Duration;

/// How long the success banner stays up by default.
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_millis(1500);

/// Whether the banner is on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

/// Banner state machine: `Hidden ⇄ Visible`.
#[derive(Debug)]
pub struct TransientNotice {
    visibility: Visibility,
    last_signal: bool,
    pending: Option<TimerId>,
    duration: Duration,
}

impl Default for TransientNotice {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_DURATION)
    }
}

impl TransientNotice {
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self {
            visibility: Visibility::Hidden,
            last_signal: false,
            pending: None,
            duration,
        }
    }

    /// Feeds the current signal level.
    ///
    /// On a rising edge the banner becomes visible and a hide is scheduled
    /// `duration` after `now`, replacing any hide still pending. Returns the
    /// delay the host timer has to be armed with, or `None` when no edge was
    /// seen.
    pub fn observe(&mut self, signal: bool, now: Duration, timers: &mut TimerQueue) -> Option<Duration> {
        let rising = signal && !self.last_signal;
        self.last_signal = signal;
        if !rising {
            return None;
        }

        if let Some(previous) = self.pending.take() {
            timers.cancel(previous);
        }
        self.visibility = Visibility::Visible;
        self.pending = Some(timers.schedule(now, self.duration));

        tracing::debug!(duration_ms = self.duration.as_millis() as u64, "success notice shown");
        Some(self.duration)
    }

    /// Handles a fired deadline. Hides the banner only when `timer` is the
    /// pending hide; returns whether anything changed.
    pub fn expire(&mut self, timer: TimerId) -> bool {
        if self.pending != Some(timer) {
            return false;
        }
        self.pending = None;
        self.visibility = Visibility::Hidden;
        tracing::debug!("success notice hidden");
        true
    }

    /// Cancels the pending hide and hides the banner.
    pub fn teardown(&mut self, timers: &mut TimerQueue) {
        if let Some(pending) = self.pending.take() {
            timers.cancel(pending);
        }
        self.visibility = Visibility::Hidden;
    }

    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub const fn has_pending_hide(&self) -> bool {
        self.pending.is_some()
    }
}
