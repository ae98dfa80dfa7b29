// SPDX-License-Identifier: MPL-2.0
//! User interface for the deck.
//!
//! Follows the Elm-style "state down, messages up" pattern: the
//! [`surface`] holds what the controller last asked for, the [`stage`] and
//! [`controls`] read it back and emit input events.
//!
//! - [`animation`] - Easing curves, tweens and keyframe tracks
//! - [`surface`] - Animated render target implementing the renderer port
//! - [`stage`] - Canvas drawing the slides
//! - [`controls`] - Arrows, position dots and progress bar
//! - [`styles`] - Centralized widget styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod animation;
pub mod controls;
pub mod design_tokens;
pub mod stage;
pub mod styles;
pub mod surface;
