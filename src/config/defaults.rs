// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Transition**: Slide transition duration and crossfade levels
//! - **Swipe**: Touch gesture recognition distance
//! - **Auto-advance**: Automatic forward navigation interval
//! - **Frame**: Redraw cadence of the stage

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Default total duration of a slide transition (in milliseconds).
pub const DEFAULT_TRANSITION_MS: u64 = 1000;

/// Minimum allowed transition duration (in milliseconds).
pub const MIN_TRANSITION_MS: u64 = 100;

/// Maximum allowed transition duration (in milliseconds).
///
/// Kept below the shortest auto-advance interval so an automatic advance
/// never lands inside the previous transition.
pub const MAX_TRANSITION_MS: u64 = 1900;

/// Opacity the outgoing slide fades to while it slides away.
pub const OUTGOING_OPACITY: f32 = 0.5;

/// Delay before the first slide's content is revealed after startup
/// (in milliseconds).
pub const INITIAL_REVEAL_DELAY_MS: u64 = 500;

// ==========================================================================
// Swipe Defaults
// ==========================================================================

/// Default horizontal distance a touch must travel to count as a swipe
/// (in logical pixels).
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 40.0;

/// Minimum swipe threshold (in logical pixels).
pub const MIN_SWIPE_THRESHOLD_PX: f32 = 10.0;

/// Maximum swipe threshold (in logical pixels).
pub const MAX_SWIPE_THRESHOLD_PX: f32 = 200.0;

// ==========================================================================
// Auto-advance Defaults
// ==========================================================================

/// Whether auto-advance runs until the first user interaction.
pub const DEFAULT_AUTO_ADVANCE_ENABLED: bool = true;

/// Default interval between automatic forward navigations (in seconds).
pub const DEFAULT_AUTO_ADVANCE_SECS: u32 = 10;

/// Minimum auto-advance interval (in seconds).
pub const MIN_AUTO_ADVANCE_SECS: u32 = 2;

/// Maximum auto-advance interval (in seconds).
pub const MAX_AUTO_ADVANCE_SECS: u32 = 600;

// ==========================================================================
// Frame Defaults
// ==========================================================================

/// Redraw interval of the stage while anything is moving (in milliseconds).
pub const FRAME_INTERVAL_MS: u64 = 16;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Transition validation
    assert!(MIN_TRANSITION_MS > 0);
    assert!(MAX_TRANSITION_MS >= MIN_TRANSITION_MS);
    assert!(DEFAULT_TRANSITION_MS >= MIN_TRANSITION_MS);
    assert!(DEFAULT_TRANSITION_MS <= MAX_TRANSITION_MS);
    assert!(OUTGOING_OPACITY > 0.0);
    assert!(OUTGOING_OPACITY < 1.0);

    // Swipe validation
    assert!(MIN_SWIPE_THRESHOLD_PX > 0.0);
    assert!(MAX_SWIPE_THRESHOLD_PX > MIN_SWIPE_THRESHOLD_PX);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX >= MIN_SWIPE_THRESHOLD_PX);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX <= MAX_SWIPE_THRESHOLD_PX);

    // Auto-advance validation
    assert!(MIN_AUTO_ADVANCE_SECS > 0);
    assert!(MAX_AUTO_ADVANCE_SECS >= MIN_AUTO_ADVANCE_SECS);
    assert!(DEFAULT_AUTO_ADVANCE_SECS >= MIN_AUTO_ADVANCE_SECS);
    assert!(DEFAULT_AUTO_ADVANCE_SECS <= MAX_AUTO_ADVANCE_SECS);

    // A transition must finish well within one auto-advance period.
    assert!(MAX_TRANSITION_MS < MIN_AUTO_ADVANCE_SECS as u64 * 1000);

    assert!(FRAME_INTERVAL_MS > 0);
};
