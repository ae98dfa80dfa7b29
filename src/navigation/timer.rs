// SPDX-License-Identifier: MPL-2.0
//! Cancellable deferred events.
//!
//! All waiting in the deck is expressed as events due at an [`Instant`].
//! The owner drains due events on every tick, in deadline order, and can
//! cancel any pending event through the handle returned when it was
//! scheduled.

use std::time::Instant;

/// Handle to a scheduled event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Entry<E> {
    id: TimerId,
    due: Instant,
    event: E,
}

/// Queue of events waiting for their deadline.
///
/// Events with equal deadlines fire in scheduling order.
#[derive(Debug, Clone)]
pub struct TimerQueue<E> {
    entries: Vec<Entry<E>>,
    next_id: u64,
}

impl<E> TimerQueue<E> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedules `event` to fire at `due`.
    pub fn schedule(&mut self, due: Instant, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        // Keep entries sorted by (due, id); ids only grow, so inserting after
        // every entry with due <= new due preserves FIFO among ties.
        let position = self.entries.partition_point(|entry| entry.due <= due);
        self.entries.insert(position, Entry { id, due, event });
        id
    }

    /// Cancels a pending event. Returns `false` if it already fired or was
    /// cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        if let Some(position) = self.entries.iter().position(|entry| entry.id == id) {
            self.entries.remove(position);
            true
        } else {
            false
        }
    }

    /// Cancels every pending event.
    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    /// Removes and returns the earliest event due at or before `now`,
    /// together with its deadline.
    pub fn pop_due(&mut self, now: Instant) -> Option<(Instant, E)> {
        if self.entries.first().is_some_and(|entry| entry.due <= now) {
            let entry = self.entries.remove(0);
            Some((entry.due, entry.event))
        } else {
            None
        }
    }

    /// Deadline of the next pending event.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.first().map(|entry| entry.due)
    }

    /// Whether an event with this handle is still pending.
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Number of pending events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no events are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}
