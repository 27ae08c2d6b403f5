//! Cancellable deadlines.
//!
//! Zellij's `set_timeout` cannot be cancelled and its `Timer` event carries
//! no identifier, so the plugin never trusts a host tick on its own. Every
//! deadline lives in a [`TimerQueue`]; a host tick only asks which deadlines
//! are due at the current clock reading. Cancelled deadlines are removed from
//! the queue and therefore never fire.

use std::time::Duration;

/// Identifier of a scheduled deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingTimer {
    id: TimerId,
    deadline: Duration,
}

/// Queue of pending deadlines keyed by [`TimerId`].
#[derive(Debug, Default)]
pub struct TimerQueue {
    next_id: u64,
    pending: Vec<PendingTimer>,
}

impl TimerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a deadline `delay` after `now` and returns its id.
    pub fn schedule(&mut self, now: Duration, delay: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.pending.push(PendingTimer {
            id,
            deadline: now + delay,
        });
        tracing::trace!(timer = id.0, deadline_ms = (now + delay).as_millis() as u64, "timer scheduled");
        id
    }

    /// Removes a pending deadline. Returns `false` if it already fired or was
    /// cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|timer| timer.id != id);
        let removed = self.pending.len() != before;
        if removed {
            tracing::trace!(timer = id.0, "timer cancelled");
        }
        removed
    }

    /// Removes and returns every deadline at or before `now`, earliest first.
    pub fn take_due(&mut self, now: Duration) -> Vec<TimerId> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|timer| timer.deadline <= now);
        self.pending = pending;
        due.sort_by_key(|timer| (timer.deadline, timer.id));
        due.into_iter().map(|timer| timer.id).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn deadlines_fire_once_and_in_order() {
        let mut timers = TimerQueue::new();
        let late = timers.schedule(ms(0), ms(300));
        let early = timers.schedule(ms(0), ms(100));

        assert!(timers.take_due(ms(99)).is_empty());
        assert_eq!(timers.take_due(ms(300)), vec![early, late]);
        assert!(timers.take_due(ms(10_000)).is_empty());
        assert!(timers.is_empty());
    }

    #[test]
    fn cancelled_deadline_never_fires() {
        let mut timers = TimerQueue::new();
        let id = timers.schedule(ms(10), ms(50));
        assert!(timers.cancel(id));
        assert!(!timers.cancel(id));
        assert!(timers.take_due(ms(1_000)).is_empty());
    }
}
