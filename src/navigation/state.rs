// SPDX-License-Identifier: MPL-2.0
//! Navigation state shared by the transition engine and the input dispatcher.

/// Where the deck is and whether it may move.
///
/// `current_index` changes only when a transition reaches its midpoint, and
/// no transition may start while `is_animating` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub(crate) current_index: usize,
    pub(crate) is_animating: bool,
    pub(crate) auto_advance_active: bool,
}

impl NavigationState {
    /// State at startup: first slide, idle.
    #[must_use]
    pub fn new(auto_advance_active: bool) -> Self {
        Self {
            current_index: 0,
            is_animating: false,
            auto_advance_active,
        }
    }

    /// Index of the slide whose content is authoritative.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Whether a transition holds the lock.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    /// Whether the auto-advance timer is still running.
    #[must_use]
    pub fn auto_advance_active(&self) -> bool {
        self.auto_advance_active
    }
}
