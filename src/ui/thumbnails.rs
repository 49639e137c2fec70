// SPDX-License-Identifier: MPL-2.0
//! In-memory cache of decoded image handles keyed by URL.
//!
//! Handles for the URLs of the current grid are pinned and never evicted.
//! Everything else (modal previews, grids of earlier searches) lives in a
//! bounded LRU. The cache also remembers which URLs are being fetched and
//! which failed, so each URL is fetched at most once while it stays known.

use crate::error::Error;
use iced::widget::image::Handle;
use lru::LruCache;
use std::collections::{HashMap, HashSet};
use std::num::NonZeroUsize;

/// Load state of one URL.
#[derive(Debug, Clone)]
pub enum ThumbnailState {
    /// Never requested (or evicted).
    Unknown,
    Pending,
    Ready(Handle),
    Failed,
}

#[derive(Debug)]
pub struct ThumbnailCache {
    ready: LruCache<String, Handle>,
    /// URLs of the grid currently on screen.
    pinned: HashSet<String>,
    pinned_ready: HashMap<String, Handle>,
    pending: HashSet<String>,
    failed: HashSet<String>,
}

impl ThumbnailCache {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            ready: LruCache::new(NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN)),
            pinned: HashSet::new(),
            pinned_ready: HashMap::new(),
            pending: HashSet::new(),
            failed: HashSet::new(),
        }
    }

    fn is_ready(&self, url: &str) -> bool {
        self.pinned_ready.contains_key(url) || self.ready.contains(url)
    }

    /// Marks `url` as pending. Returns `true` if the caller should fetch it.
    pub fn request(&mut self, url: &str) -> bool {
        if self.is_ready(url) || self.pending.contains(url) || self.failed.contains(url) {
            return false;
        }
        self.pending.insert(url.to_string());
        true
    }

    /// Requests every URL in `urls`, returning those that need fetching.
    ///
    /// URLs already in the LRU are promoted.
    pub fn request_all<'a>(&mut self, urls: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        urls.into_iter()
            .filter(|url| {
                self.ready.promote(*url);
                self.request(url)
            })
            .map(str::to_string)
            .collect()
    }

    /// Replaces the pinned set with the URLs of a new grid.
    ///
    /// Handles of the previous grid move into the LRU; handles the LRU
    /// already holds for the new grid are taken out of it.
    pub fn pin_grid<'a>(&mut self, urls: impl IntoIterator<Item = &'a str>) {
        let next: HashSet<String> = urls.into_iter().map(str::to_string).collect();

        let unpinned: Vec<String> = self
            .pinned_ready
            .keys()
            .filter(|url| !next.contains(*url))
            .cloned()
            .collect();
        for url in unpinned {
            if let Some(handle) = self.pinned_ready.remove(&url) {
                self.ready.put(url, handle);
            }
        }

        for url in &next {
            if let Some(handle) = self.ready.pop(url) {
                self.pinned_ready.insert(url.clone(), handle);
            }
        }

        self.pinned = next;
    }

    /// Stores the outcome of a fetch.
    pub fn complete(&mut self, url: &str, result: Result<Vec<u8>, Error>) {
        self.pending.remove(url);
        match result {
            Ok(bytes) => {
                let handle = Handle::from_bytes(bytes);
                if self.pinned.contains(url) {
                    self.pinned_ready.insert(url.to_string(), handle);
                } else {
                    self.ready.put(url.to_string(), handle);
                }
            }
            Err(err) => {
                tracing::debug!(%url, error = %err, "thumbnail fetch failed");
                self.failed.insert(url.to_string());
            }
        }
    }

    #[must_use]
    pub fn state(&self, url: &str) -> ThumbnailState {
        if let Some(handle) = self.pinned_ready.get(url).or_else(|| self.ready.peek(url)) {
            ThumbnailState::Ready(handle.clone())
        } else if self.pending.contains(url) {
            ThumbnailState::Pending
        } else if self.failed.contains(url) {
            ThumbnailState::Failed
        } else {
            ThumbnailState::Unknown
        }
    }

    /// Number of ready handles, pinned ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pinned_ready.len() + self.ready.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
