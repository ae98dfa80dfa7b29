// SPDX-License-Identifier: MPL-2.0
//! Deck domain types.
//!
//! This module contains slide manifests and the reveal plans derived from
//! them. Nothing here knows about files or rendering.

pub mod reveal;
pub mod types;

pub use reveal::{
    EntranceCue, EntranceEffect, LoopCue, LoopTarget, LoopingEffect, RevealPlan,
};
pub use types::{
    ElementCategory, ElementGroup, ElementRef, SlideElement, SlideKind, SlideManifest, Stagger,
};
