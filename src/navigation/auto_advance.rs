// SPDX-License-Identifier: MPL-2.0
//! Automatic forward navigation.
//!
//! The timer fires at a fixed rate from startup. Each tick requests the next
//! slide unless a transition is running or a touch is being tracked. The
//! first user interaction stops it for good.

use super::timer::{TimerId, TimerQueue};
use crate::domain::ui::AutoAdvanceInterval;
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct AutoAdvance {
    interval: Option<AutoAdvanceInterval>,
    pending: Option<TimerId>,
    cancelled: bool,
}

impl AutoAdvance {
    /// Creates the timer; `None` disables auto-advance from the start.
    #[must_use]
    pub fn new(interval: Option<AutoAdvanceInterval>) -> Self {
        Self {
            interval,
            pending: None,
            cancelled: interval.is_none(),
        }
    }

    #[must_use]
    pub fn interval(&self) -> Option<AutoAdvanceInterval> {
        self.interval
    }

    /// Whether the timer will still fire.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.cancelled
    }

    /// Schedules the next tick one interval after `from`.
    pub fn arm<E>(&mut self, timers: &mut TimerQueue<E>, from: Instant, event: E) {
        if self.cancelled {
            return;
        }
        if let Some(interval) = self.interval {
            if let Some(previous) = self.pending.take() {
                timers.cancel(previous);
            }
            self.pending = Some(timers.schedule(from + interval.as_duration(), event));
        }
    }

    /// Handles a due tick. Returns whether a forward navigation should be
    /// requested.
    pub fn on_tick(&mut self, is_animating: bool, tracking_gesture: bool) -> bool {
        self.pending = None;
        if self.cancelled {
            return false;
        }
        let navigate = !is_animating && !tracking_gesture;
        if !navigate {
            tracing::trace!(is_animating, tracking_gesture, "auto-advance skipped");
        }
        navigate
    }

    /// Stops the timer permanently. Returns `true` only the first time.
    pub fn cancel<E>(&mut self, timers: &mut TimerQueue<E>) -> bool {
        if self.cancelled {
            return false;
        }
        self.cancelled = true;
        if let Some(pending) = self.pending.take() {
            timers.cancel(pending);
        }
        tracing::debug!("auto-advance stopped");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn arm_schedules_one_interval_ahead() {
        let start = Instant::now();
        let mut timers = TimerQueue::new();
        let mut auto = AutoAdvance::new(Some(AutoAdvanceInterval::new(10)));

        auto.arm(&mut timers, start, ());

        assert_eq!(timers.next_deadline(), Some(start + Duration::from_secs(10)));
        assert!(auto.is_active());
    }

    #[test]
    fn rearming_replaces_pending_tick() {
        let start = Instant::now();
        let mut timers = TimerQueue::new();
        let mut auto = AutoAdvance::new(Some(AutoAdvanceInterval::new(10)));

        auto.arm(&mut timers, start, ());
        auto.arm(&mut timers, start + Duration::from_secs(1), ());

        assert_eq!(timers.len(), 1);
        assert_eq!(timers.next_deadline(), Some(start + Duration::from_secs(11)));
    }

    #[test]
    fn disabled_timer_never_schedules() {
        let mut timers: TimerQueue<()> = TimerQueue::new();
        let mut auto = AutoAdvance::new(None);

        auto.arm(&mut timers, Instant::now(), ());

        assert!(timers.is_empty());
        assert!(!auto.is_active());
    }

    #[test]
    fn tick_skips_while_busy() {
        let mut auto = AutoAdvance::new(Some(AutoAdvanceInterval::default()));
        assert!(auto.on_tick(false, false));
        assert!(!auto.on_tick(true, false));
        assert!(!auto.on_tick(false, true));
    }

    #[test]
    fn cancel_is_one_shot_and_permanent() {
        let start = Instant::now();
        let mut timers = TimerQueue::new();
        let mut auto = AutoAdvance::new(Some(AutoAdvanceInterval::new(10)));
        auto.arm(&mut timers, start, ());

        assert!(auto.cancel(&mut timers));
        assert!(!auto.cancel(&mut timers));
        assert!(timers.is_empty());

        auto.arm(&mut timers, start, ());
        assert!(timers.is_empty());
        assert!(!auto.on_tick(false, false));
    }
}
