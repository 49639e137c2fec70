// SPDX-License-Identifier: MPL-2.0
//! Image search port definition.
//!
//! One call performs exactly one request. The empty query is valid and asks
//! the provider for its default selection.

use crate::domain::gallery::ImageRecord;
use crate::error::Error;
use futures_util::future::BoxFuture;
use std::fmt;

// =============================================================================
// SearchError
// =============================================================================

/// Errors that can occur while searching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The request could not be sent or the response body could not be read.
    Transport(String),

    /// The provider answered with a non-success HTTP status.
    Status(u16),

    /// The response body was not the expected JSON shape.
    Decode(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Transport(msg) => write!(f, "search request failed: {msg}"),
            SearchError::Status(code) => write!(f, "search provider returned HTTP {code}"),
            SearchError::Decode(msg) => write!(f, "search response could not be decoded: {msg}"),
        }
    }
}

impl std::error::Error for SearchError {}

impl From<SearchError> for Error {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::Transport(msg) => Error::Http(msg),
            SearchError::Status(code) => Error::Http(format!("HTTP status: {code}")),
            SearchError::Decode(msg) => Error::Decode(msg),
        }
    }
}

// =============================================================================
// ImageSearch
// =============================================================================

/// Boxed future returned by [`ImageSearch::search`].
pub type SearchFuture = BoxFuture<'static, Result<Vec<ImageRecord>, SearchError>>;

/// Trait for stock-photo search providers.
///
/// Implementations must not panic on provider errors; every failure comes
/// back as a [`SearchError`]. Results keep the provider's order.
pub trait ImageSearch: Send + Sync {
    /// Searches for `query`.
    fn search(&self, query: &str) -> SearchFuture;
}
