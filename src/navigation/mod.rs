// SPDX-License-Identifier: MPL-2.0
//! Slide navigation core.
//!
//! Everything here is framework independent: time comes in as [`Instant`]s
//! and visual effects go out through the
//! [`Renderer`](crate::application::port::Renderer) port.
//!
//! [`Instant`]: std::time::Instant

pub mod auto_advance;
pub mod controller;
pub mod indicators;
pub mod input;
pub mod state;
pub mod timer;
pub mod transition;

pub use controller::{ControllerSettings, DeckController};
pub use indicators::{progress_percent, IndicatorSync};
pub use input::{Dispatch, InputDispatcher, NavRequest};
pub use state::NavigationState;
pub use transition::{GoToOutcome, Phase, Transition, TransitionEngine};
