// SPDX-License-Identifier: MPL-2.0
//! Deck loading and the slide registry.

pub mod loader;
pub mod registry;

pub use loader::{load_from_path, parse_deck};
pub use registry::SlideRegistry;
