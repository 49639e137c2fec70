// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`, plus thin wrappers around system services.
//!
//! # Available Adapters
//!
//! - [`http`]: Shared HTTP client and byte fetching
//! - [`pixabay`]: Pixabay search (implements [`ImageSearch`])
//! - [`share`]: Social share URLs and the OS URL opener
//! - [`download`]: Save-to-disk for image downloads
//!
//! [`ImageSearch`]: crate::application::port::ImageSearch

pub mod download;
pub mod http;
pub mod pixabay;
pub mod share;

pub use pixabay::{PixabayClient, SearchSettings};
pub use share::ShareTarget;
