// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the deck controls.

pub mod button;
pub mod progress;
pub mod tooltip;
