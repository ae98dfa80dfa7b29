// SPDX-License-Identifier: MPL-2.0
//! Time-based animation primitives.
//!
//! Curves are CSS-style cubic Béziers; keyframe helpers take a normalized
//! phase and return the transform to apply at that point.

use std::f32::consts::TAU;
use std::time::{Duration, Instant};

/// Vertical travel of the fade-in-up entrance, in logical pixels.
pub const FADE_RISE_PX: f32 = 30.0;

/// Peak scale added by the pulse loop.
pub const PULSE_SCALE: f32 = 0.05;

/// Opacity at the rest points of the pulse loop.
pub const PULSE_MIN_OPACITY: f32 = 0.8;

/// Amplitude of the ambient floating motion, in logical pixels.
pub const FLOAT_AMPLITUDE_PX: f32 = 8.0;

/// Period of the ambient floating motion.
pub const FLOAT_PERIOD: Duration = Duration::from_millis(6000);

/// Period of the floating ornaments drawn on decorated slides.
pub const ORNAMENT_PERIOD: Duration = Duration::from_millis(8000);

// =============================================================================
// Easing
// =============================================================================

/// Cubic Bézier timing curve through `(0, 0)`, `(x1, y1)`, `(x2, y2)`, `(1, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

/// Slide movement curve: fast start, long soft landing.
pub const SLIDE_EASING: CubicBezier = CubicBezier::new(0.16, 1.0, 0.3, 1.0);

/// CSS `ease-out`.
pub const EASE_OUT: CubicBezier = CubicBezier::new(0.0, 0.0, 0.58, 1.0);

/// CSS `ease-in-out`.
pub const EASE_IN_OUT: CubicBezier = CubicBezier::new(0.42, 0.0, 0.58, 1.0);

/// Straight line.
pub const LINEAR: CubicBezier = CubicBezier::new(0.0, 0.0, 1.0, 1.0);

impl CubicBezier {
    #[must_use]
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn sample(a1: f32, a2: f32, t: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * t * a1 + 3.0 * u * t * t * a2 + t * t * t
    }

    fn slope(a1: f32, a2: f32, t: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * a1 + 6.0 * u * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    }

    /// Maps linear progress `x` in `0.0..=1.0` to eased progress.
    #[must_use]
    pub fn ease(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }

        // Newton first, bisection if the slope flattens out.
        let mut t = x;
        for _ in 0..8 {
            let error = Self::sample(self.x1, self.x2, t) - x;
            if error.abs() < 1e-6 {
                return Self::sample(self.y1, self.y2, t);
            }
            let slope = Self::slope(self.x1, self.x2, t);
            if slope.abs() < 1e-6 {
                break;
            }
            t = (t - error / slope).clamp(0.0, 1.0);
        }

        let (mut low, mut high) = (0.0_f32, 1.0_f32);
        t = x;
        for _ in 0..32 {
            let value = Self::sample(self.x1, self.x2, t);
            if (value - x).abs() < 1e-6 {
                break;
            }
            if value < x {
                low = t;
            } else {
                high = t;
            }
            t = (low + high) / 2.0;
        }
        Self::sample(self.y1, self.y2, t)
    }
}

// =============================================================================
// Tween
// =============================================================================

/// Linear progress of a timed run at `now`, in `0.0..=1.0`.
#[must_use]
pub fn progress(started_at: Instant, duration: Duration, now: Instant) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(started_at);
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}

/// Position within a repeating cycle, in `0.0..1.0`.
#[must_use]
pub fn loop_phase(started_at: Instant, period: Duration, now: Instant) -> f32 {
    if period.is_zero() {
        return 0.0;
    }
    let elapsed = now.saturating_duration_since(started_at).as_secs_f32();
    (elapsed / period.as_secs_f32()).fract()
}

/// A scalar animated from one value to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
    easing: CubicBezier,
}

impl Tween {
    /// A tween resting at `value`.
    #[must_use]
    pub fn settled(value: f32, now: Instant) -> Self {
        Self {
            from: value,
            to: value,
            started_at: now,
            duration: Duration::ZERO,
            easing: LINEAR,
        }
    }

    /// Value at `now`.
    #[must_use]
    pub fn value_at(&self, now: Instant) -> f32 {
        let t = self.easing.ease(progress(self.started_at, self.duration, now));
        self.from + (self.to - self.from) * t
    }

    /// Final value.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Whether the value is still changing at `now`.
    #[must_use]
    pub fn is_running(&self, now: Instant) -> bool {
        self.from != self.to && progress(self.started_at, self.duration, now) < 1.0
    }

    /// Starts animating toward `to` from wherever the value is at `now`.
    pub fn retarget(&mut self, to: f32, now: Instant, duration: Duration, easing: CubicBezier) {
        self.from = self.value_at(now);
        self.to = to;
        self.started_at = now;
        self.duration = duration;
        self.easing = easing;
    }

    /// Jumps to the target.
    pub fn settle(&mut self) {
        self.from = self.to;
        self.duration = Duration::ZERO;
    }
}

// =============================================================================
// Keyframes
// =============================================================================

/// Fade-in-up at linear progress `t`: returns `(opacity, downward offset)`.
#[must_use]
pub fn fade_in_up(t: f32) -> (f32, f32) {
    let eased = EASE_OUT.ease(t);
    (eased, FADE_RISE_PX * (1.0 - eased))
}

/// Rises 0 → 1 → 0 over one cycle with eased turns.
fn swell(phase: f32) -> f32 {
    let half = if phase < 0.5 {
        phase * 2.0
    } else {
        (1.0 - phase) * 2.0
    };
    EASE_IN_OUT.ease(half)
}

/// Pulse loop at `phase`: returns `(scale, opacity)`.
#[must_use]
pub fn pulse(phase: f32) -> (f32, f32) {
    let swell = swell(phase);
    (
        1.0 + PULSE_SCALE * swell,
        PULSE_MIN_OPACITY + (1.0 - PULSE_MIN_OPACITY) * swell,
    )
}

const BOUNCE_KEYFRAMES: [(f32, f32); 7] = [
    (0.0, 0.0),
    (0.2, 0.0),
    (0.4, -15.0),
    (0.5, 0.0),
    (0.6, -7.0),
    (0.8, 0.0),
    (1.0, 0.0),
];

/// Bounce loop at `phase`: vertical offset in logical pixels (negative is up).
#[must_use]
pub fn bounce(phase: f32) -> f32 {
    let phase = phase.clamp(0.0, 1.0);
    for pair in BOUNCE_KEYFRAMES.windows(2) {
        let ((start, from), (end, to)) = (pair[0], pair[1]);
        if phase <= end {
            let t = EASE_IN_OUT.ease((phase - start) / (end - start));
            return from + (to - from) * t;
        }
    }
    0.0
}

/// Ambient floating motion at `phase`: vertical offset in logical pixels.
#[must_use]
pub fn float(phase: f32) -> f32 {
    -FLOAT_AMPLITUDE_PX * swell(phase)
}

/// Slow drift of the slide ornaments: `(dx, dy, rotation in radians)`.
#[must_use]
pub fn drift(phase: f32) -> (f32, f32, f32) {
    let angle = phase * TAU;
    (6.0 * angle.cos(), -10.0 * angle.sin(), 0.08 * angle.sin())
}
