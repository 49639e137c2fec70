// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery types with ZERO external dependencies.
//!
//! This module contains pure domain types and rules. It has no dependencies
//! on external crates (except `std`) so it stays trivially testable.
//!
//! # Modules
//!
//! - [`gallery`]: Image records ([`ImageRecord`](gallery::ImageRecord)),
//!   search sequencing ([`SearchTracker`](gallery::SearchTracker)) and the
//!   result status shown by the placeholder ([`ResultStatus`](gallery::ResultStatus))

pub mod gallery;
