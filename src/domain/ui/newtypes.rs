// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for navigation and presentation
//! values, ensuring they are always within valid ranges.

use crate::config::defaults::{
    DEFAULT_AUTO_ADVANCE_SECS, DEFAULT_SWIPE_THRESHOLD_PX, DEFAULT_TRANSITION_MS,
    MAX_AUTO_ADVANCE_SECS, MAX_SWIPE_THRESHOLD_PX, MAX_TRANSITION_MS, MIN_AUTO_ADVANCE_SECS,
    MIN_SWIPE_THRESHOLD_PX, MIN_TRANSITION_MS,
};
use std::time::Duration;

// =============================================================================
// TransitionDuration
// =============================================================================

/// Total duration of one slide transition.
///
/// The midpoint (index commit, content reveal) happens at half of it and the
/// lock is released at the full duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionDuration(u64);

impl TransitionDuration {
    /// Creates a new duration from milliseconds, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_TRANSITION_MS, MAX_TRANSITION_MS))
    }

    /// Returns the duration in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the full duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Returns the offset of the midpoint phase.
    #[must_use]
    pub fn midpoint(self) -> Duration {
        Duration::from_millis(self.0 / 2)
    }
}

impl Default for TransitionDuration {
    fn default() -> Self {
        Self(DEFAULT_TRANSITION_MS)
    }
}

// =============================================================================
// SwipeThreshold
// =============================================================================

/// Minimum horizontal travel, in logical pixels, for a touch to count as a swipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a new threshold, clamping the value to the valid range.
    #[must_use]
    pub fn new(pixels: f32) -> Self {
        Self(pixels.clamp(MIN_SWIPE_THRESHOLD_PX, MAX_SWIPE_THRESHOLD_PX))
    }

    /// Returns the raw pixel value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(DEFAULT_SWIPE_THRESHOLD_PX)
    }
}

// =============================================================================
// AutoAdvanceInterval
// =============================================================================

/// Interval in seconds between automatic forward navigations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoAdvanceInterval(u32);

impl AutoAdvanceInterval {
    /// Creates a new interval, clamping to the valid range.
    #[must_use]
    pub fn new(secs: u32) -> Self {
        Self(secs.clamp(MIN_AUTO_ADVANCE_SECS, MAX_AUTO_ADVANCE_SECS))
    }

    /// Returns the value in seconds.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the interval as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }
}

impl Default for AutoAdvanceInterval {
    fn default() -> Self {
        Self(DEFAULT_AUTO_ADVANCE_SECS)
    }
}

// =============================================================================
// Opacity
// =============================================================================

/// Opacity of a slide panel, guaranteed to be within `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Opacity(f32);

impl Opacity {
    /// Fully transparent.
    pub const TRANSPARENT: Self = Self(0.0);
    /// Fully opaque.
    pub const OPAQUE: Self = Self(1.0);

    /// Creates a new opacity, clamping to `0.0..=1.0`. NaN becomes transparent.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::TRANSPARENT;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self::OPAQUE
    }
}

// =============================================================================
// Direction
// =============================================================================

/// Direction of travel of a transition.
///
/// Forward content enters from the right, matching left-to-right reading
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward higher indices.
    Forward,
    /// Toward lower indices.
    Backward,
}

impl Direction {
    /// Direction of a move from `from` to `to`: forward iff `to > from`.
    #[must_use]
    pub fn between(from: usize, to: usize) -> Self {
        if to > from {
            Self::Forward
        } else {
            Self::Backward
        }
    }

    /// `+1` for forward, `-1` for backward.
    #[must_use]
    pub fn sign(self) -> i8 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    /// The reverse direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

// =============================================================================
// SlideOffset
// =============================================================================

/// Horizontal resting position of a slide panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideOffset {
    /// One full panel width to the left.
    OffLeft,
    /// On stage.
    #[default]
    Center,
    /// One full panel width to the right.
    OffRight,
}

impl SlideOffset {
    /// The off-stage side a panel sits on when offset by `direction`.
    #[must_use]
    pub fn toward(direction: Direction) -> Self {
        match direction {
            Direction::Forward => Self::OffRight,
            Direction::Backward => Self::OffLeft,
        }
    }

    /// Signed offset in panel widths (`-1.0`, `0.0`, `1.0`).
    #[must_use]
    pub fn as_fraction(self) -> f32 {
        match self {
            Self::OffLeft => -1.0,
            Self::Center => 0.0,
            Self::OffRight => 1.0,
        }
    }
}
