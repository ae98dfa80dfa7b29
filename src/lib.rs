// SPDX-License-Identifier: MPL-2.0
//! `iced_slides` presents a slide deck with animated transitions, built with
//! the Iced GUI framework.
//!
//! The navigation core ([`navigation`]) is framework-independent: it drives
//! any [`application::port::Renderer`] from explicit timestamps, so it runs
//! the same under the Iced surface and in headless tests.

#![doc(html_root_url = "https://docs.rs/iced_slides/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod deck;
pub mod domain;
pub mod error;
pub mod navigation;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
