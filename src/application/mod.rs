// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`gallery`]: The session's gallery state store
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services
//!
//! # Example
//!
//! ```ignore
//! use iced_gallery::application::port::ImageSearch;
//! use iced_gallery::infrastructure::PixabayClient;
//!
//! // Infrastructure implements the port trait
//! let search: Arc<dyn ImageSearch> = Arc::new(PixabayClient::new(settings));
//! ```

pub mod gallery;
pub mod port;
