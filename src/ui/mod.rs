// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `ViewContext`, a `Message` and an `Event` for the parent.
//!
//! - [`gallery`] - Navigation bar, hero, search bar and thumbnail grid
//! - [`placeholder`] - Shimmer tiles shown while there are no results
//! - [`detail_modal`] - Preview, metadata, download and share actions
//! - [`notifications`] - Toast notification system for user feedback
//! - [`thumbnails`] - Bounded cache of decoded thumbnail handles
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod detail_modal;
pub mod gallery;
pub mod notifications;
pub mod placeholder;
pub mod styles;
pub mod theming;
pub mod thumbnails;
