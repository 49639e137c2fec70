// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a desktop image-search gallery built with the Iced GUI framework.
//!
//! It queries the Pixabay image search API, shows the results as a thumbnail
//! grid and opens a detail modal with download and share actions. Layers follow
//! a domain / application / infrastructure split, with the Iced shell in [`app`]
//! and [`ui`].

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod logging;
pub mod ui;
