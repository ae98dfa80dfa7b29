// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with no presentation framework dependencies.
//!
//! # Modules
//!
//! - [`deck`]: Slide manifests and reveal plans ([`SlideManifest`](deck::SlideManifest),
//!   [`RevealPlan`](deck::RevealPlan))
//! - [`input`]: Input events ([`InputEvent`](input::InputEvent))
//! - [`ui`]: UI value objects ([`TransitionDuration`](ui::TransitionDuration),
//!   [`Opacity`](ui::Opacity), [`SlideOffset`](ui::SlideOffset))

pub mod deck;
pub mod input;
pub mod ui;
