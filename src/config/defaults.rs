// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Search**: API endpoint and result paging
//! - **Gallery**: Thumbnail cache bounds
//! - **Share**: Address handed to share providers

// ==========================================================================
// Search Defaults
// ==========================================================================

/// Pixabay REST endpoint for image search.
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://pixabay.com/api/";

/// Results per page when the config does not say otherwise (provider default).
pub const DEFAULT_PER_PAGE: u32 = 20;

/// Smallest page size accepted by the provider.
pub const MIN_PER_PAGE: u32 = 3;

/// Largest page size accepted by the provider.
pub const MAX_PER_PAGE: u32 = 200;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Number of decoded thumbnails kept in memory.
pub const DEFAULT_THUMBNAIL_CACHE_SIZE: usize = 256;

/// Minimum thumbnail cache capacity.
pub const MIN_THUMBNAIL_CACHE_SIZE: usize = 16;

/// Maximum thumbnail cache capacity.
pub const MAX_THUMBNAIL_CACHE_SIZE: usize = 4096;

// ==========================================================================
// Share Defaults
// ==========================================================================

/// Canonical gallery address seeded into share flows.
pub const DEFAULT_SHARE_PAGE_URL: &str = "https://pixabay.com/";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_PER_PAGE <= DEFAULT_PER_PAGE);
    assert!(DEFAULT_PER_PAGE <= MAX_PER_PAGE);
    assert!(MIN_THUMBNAIL_CACHE_SIZE <= DEFAULT_THUMBNAIL_CACHE_SIZE);
    assert!(DEFAULT_THUMBNAIL_CACHE_SIZE <= MAX_THUMBNAIL_CACHE_SIZE);
};
