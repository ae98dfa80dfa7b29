// SPDX-License-Identifier: MPL-2.0
//! Progress bar and position dots.
//!
//! Both are pure functions of the current index and the slide count; nothing
//! is stored besides the count.

use crate::application::port::Renderer;

/// Percentage of the deck covered once slide `index` is current.
#[must_use]
pub fn progress_percent(index: usize, total: usize) -> f32 {
    if total == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)] // slide counts are tiny
    let percent = (index + 1) as f32 / total as f32 * 100.0;
    percent
}

/// Pushes indicator state to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorSync {
    total: usize,
}

impl IndicatorSync {
    /// Creates indicators for a deck of `total` slides (one dot per slide).
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self { total }
    }

    /// Number of dots.
    #[must_use]
    pub fn dot_count(&self) -> usize {
        self.total
    }

    /// Sets the progress extent for `index`.
    pub fn update_progress<R: Renderer>(&self, index: usize, renderer: &mut R) {
        renderer.set_progress(progress_percent(index, self.total));
    }

    /// Activates the dot at `index` and clears every other one.
    pub fn update_dots<R: Renderer>(&self, index: usize, renderer: &mut R) {
        for dot in 0..self.total {
            renderer.set_dot_active(dot, dot == index);
        }
    }

    /// Refreshes both indicators.
    pub fn sync<R: Renderer>(&self, index: usize, renderer: &mut R) {
        self.update_dots(index, renderer);
        self.update_progress(index, renderer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, RecordingRenderer, RenderCall, F32_EPSILON};

    #[test]
    fn progress_is_one_based_share_of_deck() {
        assert_abs_diff_eq!(progress_percent(0, 5), 20.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(progress_percent(3, 5), 80.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(progress_percent(4, 5), 100.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(progress_percent(0, 3), 33.333_33, epsilon = 1e-3);
    }

    #[test]
    fn progress_of_empty_deck_is_zero() {
        assert_eq!(progress_percent(0, 0), 0.0);
    }

    #[test]
    fn update_dots_activates_exactly_one() {
        let sync = IndicatorSync::new(4);
        let mut renderer = RecordingRenderer::new(4);
        sync.update_dots(2, &mut renderer);

        assert_eq!(renderer.active_dots(), vec![2]);
        assert_eq!(
            renderer.calls(),
            &[
                RenderCall::DotActive(0, false),
                RenderCall::DotActive(1, false),
                RenderCall::DotActive(2, true),
                RenderCall::DotActive(3, false),
            ]
        );
    }

    #[test]
    fn sync_updates_progress_and_dots() {
        let sync = IndicatorSync::new(5);
        let mut renderer = RecordingRenderer::new(5);
        sync.sync(3, &mut renderer);

        assert_eq!(renderer.active_dots(), vec![3]);
        assert_abs_diff_eq!(renderer.progress(), 80.0, epsilon = F32_EPSILON);
        assert_eq!(sync.dot_count(), 5);
    }
}
