// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`search`]: Stock-photo search
//!
//! # Design Notes
//!
//! - Traits use domain types only (no Iced handles, no HTTP types)
//! - Traits are `Send + Sync` so adapters can be shared as `Arc<dyn _>`
//! - Async methods return boxed futures that callers wrap in Iced `Task`s

pub mod search;

pub use search::{ImageSearch, SearchError, SearchFuture};
