// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that presentation adapters implement.
//! These traits use only domain types, ensuring the navigation core remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`renderer`]: Slide surface mutation (offsets, opacity, reveal, indicators)
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles)
//! - No `async fn`: callers own scheduling and pass explicit instants
//!
//! # Example
//!
//! ```ignore
//! use iced_slides::application::port::Renderer;
//! use iced_slides::domain::ui::{Opacity, SlideOffset};
//!
//! fn park(renderer: &mut impl Renderer, slide: usize) {
//!     renderer.set_offset(slide, SlideOffset::OffRight);
//!     renderer.set_opacity(slide, Opacity::TRANSPARENT);
//!     renderer.flush_layout(slide);
//! }
//! ```

pub mod renderer;

pub use renderer::Renderer;
