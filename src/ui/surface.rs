// SPDX-License-Identifier: MPL-2.0
//! Animated slide surface.
//!
//! [`SlideSurface`] is the iced-side [`Renderer`]: it turns the controller's
//! discrete style mutations into tweens evaluated against its own clock,
//! which the controller advances on every tick. The stage canvas and the
//! controls read resolved values back out of it.

use super::animation::{self, Tween, EASE_OUT, FLOAT_PERIOD, ORNAMENT_PERIOD, SLIDE_EASING};
use crate::application::port::Renderer;
use crate::domain::deck::{ElementRef, LoopTarget, RevealPlan};
use crate::domain::ui::{Opacity, SlideOffset, TransitionDuration};
use std::time::{Duration, Instant};

const PROGRESS_ANIMATION: Duration = Duration::from_millis(400);

#[derive(Debug, Clone)]
struct RevealRun {
    started_at: Instant,
    plan: RevealPlan,
}

#[derive(Debug, Clone)]
struct AmbientRun {
    started_at: Instant,
    elements: Vec<ElementRef>,
}

#[derive(Debug, Clone)]
struct Panel {
    offset: Tween,
    opacity: Tween,
    active: bool,
    visible: bool,
    reveal: Option<RevealRun>,
    ambient: Option<AmbientRun>,
}

impl Panel {
    fn new(now: Instant) -> Self {
        Self {
            offset: Tween::settled(SlideOffset::OffRight.as_fraction(), now),
            opacity: Tween::settled(0.0, now),
            active: false,
            visible: false,
            reveal: None,
            ambient: None,
        }
    }
}

/// Resolved placement of an active panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelFrame {
    pub slide: usize,
    /// Horizontal offset in panel widths.
    pub offset: f32,
    pub opacity: f32,
    /// Exposed to assistive technology.
    pub visible: bool,
}

/// Resolved look of one slide element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementFrame {
    pub opacity: f32,
    /// Downward displacement in logical pixels.
    pub offset_y: f32,
}

impl Default for ElementFrame {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            offset_y: 0.0,
        }
    }
}

/// Visual state of the whole deck.
#[derive(Debug, Clone)]
pub struct SlideSurface {
    epoch: Instant,
    clock: Instant,
    transition: Duration,
    panels: Vec<Panel>,
    dots: Vec<bool>,
    progress: Tween,
}

impl SlideSurface {
    #[must_use]
    pub fn new(slide_count: usize, transition: TransitionDuration, now: Instant) -> Self {
        Self {
            epoch: now,
            clock: now,
            transition: transition.as_duration(),
            panels: vec![Panel::new(now); slide_count],
            dots: vec![false; slide_count],
            progress: Tween::settled(0.0, now),
        }
    }

    #[must_use]
    pub fn clock(&self) -> Instant {
        self.clock
    }

    /// Active panels in paint order: the panel exposed to assistive
    /// technology (the incoming one during a transition) is painted last.
    #[must_use]
    pub fn active_panels(&self) -> Vec<PanelFrame> {
        let mut frames: Vec<PanelFrame> = (0..self.panels.len())
            .filter_map(|slide| self.panel(slide))
            .collect();
        frames.sort_by_key(|frame| frame.visible);
        frames
    }

    /// Placement of a panel, or `None` when it is not drawn.
    #[must_use]
    pub fn panel(&self, slide: usize) -> Option<PanelFrame> {
        let panel = self.panels.get(slide).filter(|panel| panel.active)?;
        Some(PanelFrame {
            slide,
            offset: panel.offset.value_at(self.clock),
            opacity: panel.opacity.value_at(self.clock),
            visible: panel.visible,
        })
    }

    /// Look of an element after its entrance and ambient motion.
    #[must_use]
    pub fn element(&self, slide: usize, element: ElementRef) -> ElementFrame {
        let Some(panel) = self.panels.get(slide) else {
            return ElementFrame::default();
        };

        let mut frame = ElementFrame::default();
        let mut entered = true;
        if let Some(run) = &panel.reveal {
            if let Some(cue) = run.plan.cue_for(element) {
                let t = animation::progress(run.started_at + cue.delay, cue.duration, self.clock);
                let (opacity, offset_y) = animation::fade_in_up(t);
                frame = ElementFrame { opacity, offset_y };
                entered = t >= 1.0;
            }
        }

        if entered {
            if let Some(ambient) = &panel.ambient {
                if ambient.elements.contains(&element) {
                    let phase = animation::loop_phase(ambient.started_at, FLOAT_PERIOD, self.clock);
                    frame.offset_y += animation::float(phase);
                }
            }
        }
        frame
    }

    /// Scale and opacity of an element's icon.
    #[must_use]
    pub fn icon_pulse(&self, slide: usize, element: ElementRef) -> (f32, f32) {
        self.looping(slide, LoopTarget::Icon(element))
            .map_or((1.0, 1.0), |(started_at, period)| {
                animation::pulse(animation::loop_phase(started_at, period, self.clock))
            })
    }

    /// Vertical offset of the final message.
    #[must_use]
    pub fn final_message_offset(&self, slide: usize) -> f32 {
        self.looping(slide, LoopTarget::FinalMessage)
            .map_or(0.0, |(started_at, period)| {
                animation::bounce(animation::loop_phase(started_at, period, self.clock))
            })
    }

    fn looping(&self, slide: usize, target: LoopTarget) -> Option<(Instant, Duration)> {
        let run = self.panels.get(slide)?.reveal.as_ref()?;
        let cue = run.plan.loops.iter().find(|cue| cue.target == target)?;
        Some((run.started_at, cue.effect.period()))
    }

    /// Phase of the drifting ornaments on decorated slides.
    #[must_use]
    pub fn ornament_phase(&self) -> f32 {
        animation::loop_phase(self.epoch, ORNAMENT_PERIOD, self.clock)
    }

    /// Progress bar extent in percent.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress.value_at(self.clock)
    }

    #[must_use]
    pub fn dot_count(&self) -> usize {
        self.dots.len()
    }

    #[must_use]
    pub fn is_dot_active(&self, dot: usize) -> bool {
        self.dots.get(dot).copied().unwrap_or(false)
    }

    /// Whether anything on screen changes over time and needs redraws.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.progress.is_running(self.clock)
            || self.panels.iter().any(|panel| {
                panel.offset.is_running(self.clock)
                    || panel.opacity.is_running(self.clock)
                    || (panel.active && (panel.reveal.is_some() || panel.ambient.is_some()))
            })
    }
}

impl Renderer for SlideSurface {
    fn advance_clock(&mut self, now: Instant) {
        self.clock = self.clock.max(now);
    }

    fn set_offset(&mut self, slide: usize, offset: SlideOffset) {
        if let Some(panel) = self.panels.get_mut(slide) {
            panel
                .offset
                .retarget(offset.as_fraction(), self.clock, self.transition, SLIDE_EASING);
        }
    }

    fn set_opacity(&mut self, slide: usize, opacity: Opacity) {
        if let Some(panel) = self.panels.get_mut(slide) {
            panel
                .opacity
                .retarget(opacity.value(), self.clock, self.transition, SLIDE_EASING);
        }
    }

    fn set_active(&mut self, slide: usize, active: bool) {
        if let Some(panel) = self.panels.get_mut(slide) {
            panel.active = active;
        }
    }

    fn set_visible(&mut self, slide: usize, visible: bool) {
        if let Some(panel) = self.panels.get_mut(slide) {
            panel.visible = visible;
        }
    }

    fn flush_layout(&mut self, slide: usize) {
        if let Some(panel) = self.panels.get_mut(slide) {
            panel.offset.settle();
            panel.opacity.settle();
        }
    }

    fn clear_entrance(&mut self, slide: usize) {
        if let Some(panel) = self.panels.get_mut(slide) {
            panel.reveal = None;
        }
    }

    fn flush_entrance(&mut self, slide: usize) {
        // Entrance state is not tweened, so a cleared reveal is already
        // committed. Only make sure nothing of it lingers.
        if let Some(panel) = self.panels.get_mut(slide) {
            panel.reveal = None;
        }
    }

    fn play_entrance_sequence(&mut self, slide: usize, plan: &RevealPlan) {
        if let Some(panel) = self.panels.get_mut(slide) {
            panel.reveal = Some(RevealRun {
                started_at: self.clock,
                plan: plan.clone(),
            });
        }
    }

    fn start_ambient_motion(&mut self, slide: usize, elements: &[ElementRef]) {
        let clock = self.clock;
        if let Some(panel) = self.panels.get_mut(slide) {
            // Already floating elements keep their phase.
            let started_at = panel.ambient.as_ref().map_or(clock, |run| run.started_at);
            panel.ambient = Some(AmbientRun {
                started_at,
                elements: elements.to_vec(),
            });
        }
    }

    fn set_progress(&mut self, percent: f32) {
        self.progress
            .retarget(percent, self.clock, PROGRESS_ANIMATION, EASE_OUT);
    }

    fn set_dot_active(&mut self, dot: usize, active: bool) {
        if let Some(flag) = self.dots.get_mut(dot) {
            *flag = active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::deck::{ElementCategory, SlideElement, SlideManifest};
    use crate::test_utils::assert_abs_diff_eq;

    fn surface() -> (SlideSurface, Instant) {
        let now = Instant::now();
        (SlideSurface::new(3, TransitionDuration::new(1000), now), now)
    }

    #[test]
    fn incoming_panel_keeps_sliding_after_midpoint() {
        use crate::deck::SlideRegistry;
        use crate::navigation::{ControllerSettings, DeckController};

        let slides = (0..3)
            .map(|i| {
                SlideManifest::new(format!("Slide {i}"))
                    .with_group(ElementCategory::Card, vec![SlideElement::new("card")])
            })
            .collect();
        let registry = SlideRegistry::new("Deck", slides).expect("non-empty deck");
        let settings = ControllerSettings::default().without_auto_advance();
        let start = Instant::now();
        let surface = SlideSurface::new(3, settings.transition, start);
        let mut deck = DeckController::new(registry, settings, surface, start);

        assert!(deck.next(start).is_started());
        deck.tick(start + Duration::from_millis(500));
        assert_eq!(deck.current_index(), 1);

        let incoming = deck.renderer().panel(1).expect("incoming panel drawn");
        assert!(incoming.offset > 0.0, "offset {}", incoming.offset);
        assert!(incoming.opacity < 1.0, "opacity {}", incoming.opacity);
        assert!(deck.renderer().is_animating());

        deck.tick(start + Duration::from_millis(1000));
        let settled = deck.renderer().panel(1).expect("incoming panel drawn");
        assert_abs_diff_eq!(settled.offset, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(settled.opacity, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn flush_entrance_leaves_panel_tweens_running() {
        let (mut surface, now) = surface();
        surface.set_active(1, true);
        surface.set_offset(1, SlideOffset::Center);
        surface.advance_clock(now + Duration::from_millis(100));

        surface.clear_entrance(1);
        surface.flush_entrance(1);

        let frame = surface.panel(1).expect("active panel");
        assert!(frame.offset > 0.0 && frame.offset < 1.0, "{}", frame.offset);
        assert!(surface.is_animating());
    }

    #[test]
    fn inactive_panels_are_not_drawn() {
        let (mut surface, _) = surface();
        surface.set_active(1, true);
        let panels = surface.active_panels();
        assert_eq!(panels.len(), 1);
        assert_eq!(panels[0].slide, 1);
        assert!(surface.panel(0).is_none());
    }

    #[test]
    fn flush_commits_without_animating() {
        let (mut surface, now) = surface();
        surface.set_active(0, true);
        surface.set_offset(0, SlideOffset::Center);
        surface.set_opacity(0, Opacity::OPAQUE);
        surface.flush_layout(0);

        let frame = surface.panel(0).expect("active panel");
        assert_eq!(frame.offset, 0.0);
        assert_eq!(frame.opacity, 1.0);
        assert!(!surface.is_animating());
        assert_eq!(surface.clock(), now);
    }

    #[test]
    fn offsets_animate_over_transition() {
        let (mut surface, now) = surface();
        surface.set_active(0, true);
        surface.set_offset(0, SlideOffset::Center);
        surface.flush_layout(0);

        surface.set_offset(0, SlideOffset::OffLeft);
        assert_eq!(surface.panel(0).map(|p| p.offset), Some(0.0));

        surface.advance_clock(now + Duration::from_millis(500));
        let halfway = surface.panel(0).map_or(0.0, |p| p.offset);
        assert!(halfway < -0.5 && halfway > -1.0, "{halfway}");
        assert!(surface.is_animating());

        surface.advance_clock(now + Duration::from_millis(1000));
        assert_eq!(surface.panel(0).map(|p| p.offset), Some(-1.0));
    }

    #[test]
    fn incoming_panel_paints_last() {
        let (mut surface, _) = surface();
        surface.set_active(0, true);
        surface.set_active(1, true);
        surface.set_visible(0, true);
        let order: Vec<usize> = surface.active_panels().iter().map(|p| p.slide).collect();
        assert_eq!(order, vec![1, 0]);
    }

    #[test]
    fn staggered_elements_stay_hidden_until_their_delay() {
        let (mut surface, now) = surface();
        let manifest = SlideManifest::new("Castles").with_group(
            ElementCategory::Card,
            vec![SlideElement::new("keep"), SlideElement::new("moat")],
        );
        surface.set_active(1, true);
        surface.play_entrance_sequence(1, &RevealPlan::for_slide(&manifest));

        let second = ElementRef::new(ElementCategory::Card, 1);
        surface.advance_clock(now + Duration::from_millis(350));
        assert_eq!(surface.element(1, second).opacity, 0.0);

        surface.advance_clock(now + Duration::from_millis(1200));
        let frame = surface.element(1, second);
        assert_abs_diff_eq!(frame.opacity, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(frame.offset_y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn clear_entrance_shows_elements_at_rest() {
        let (mut surface, _) = surface();
        let manifest = SlideManifest::new("x")
            .with_group(ElementCategory::Text, vec![SlideElement::new("a")]);
        surface.play_entrance_sequence(0, &RevealPlan::for_slide(&manifest));
        surface.clear_entrance(0);
        assert_eq!(
            surface.element(0, ElementRef::new(ElementCategory::Text, 0)),
            ElementFrame::default()
        );
    }

    #[test]
    fn final_message_bounces_only_when_present() {
        let (mut surface, now) = surface();
        let manifest = SlideManifest::new("End").with_final_message("Farewell");
        surface.play_entrance_sequence(0, &RevealPlan::for_slide(&manifest));
        surface.advance_clock(now + Duration::from_millis(1400));
        assert!(surface.final_message_offset(0) < 0.0);
        assert_eq!(surface.final_message_offset(1), 0.0);
    }

    #[test]
    fn progress_and_dots_follow_renderer_calls() {
        let (mut surface, now) = surface();
        surface.set_progress(40.0);
        surface.set_dot_active(2, true);
        surface.set_dot_active(7, true);

        surface.advance_clock(now + Duration::from_secs(1));
        assert_abs_diff_eq!(surface.progress(), 40.0, epsilon = 1e-4);
        assert!(surface.is_dot_active(2));
        assert!(!surface.is_dot_active(7));
        assert_eq!(surface.dot_count(), 3);
    }

    #[test]
    fn clock_never_moves_backwards() {
        let (mut surface, now) = surface();
        surface.advance_clock(now + Duration::from_secs(2));
        surface.advance_clock(now);
        assert_eq!(surface.clock(), now + Duration::from_secs(2));
    }
}
