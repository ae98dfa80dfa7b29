// SPDX-License-Identifier: MPL-2.0
//! Application layer - interfaces between the navigation core and its
//! collaborators.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Presentation layer implements application layer ports
//! - The navigation core only talks to ports

pub mod port;
