// SPDX-License-Identifier: MPL-2.0
//! Image record returned by the stock-photo search provider.
//!
//! Records are read-only snapshots: nothing in the application mutates one
//! after it has been decoded.

/// One search hit.
///
/// # Example
///
/// ```
/// use iced_gallery::domain::gallery::ImageRecord;
///
/// let record = ImageRecord {
///     id: 7,
///     preview_url: None,
///     display_url: "https://cdn.example/7_640.jpg".into(),
///     uploader: "alice".into(),
///     uploader_id: 42,
///     kind: "photo".into(),
///     tags: "cat, pet,  animal".into(),
///     views: 10,
///     downloads: 2,
///     likes: 1,
/// };
///
/// assert_eq!(record.tag_list(), vec!["cat", "pet", "animal"]);
/// assert!(!record.has_preview());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    /// Provider-side identifier.
    pub id: u64,
    /// Small preview image. `None` when the provider omitted it.
    pub preview_url: Option<String>,
    /// Medium-resolution image used by the grid.
    pub display_url: String,
    /// Uploader display name.
    pub uploader: String,
    /// Uploader identifier.
    pub uploader_id: u64,
    /// Content type tag ("photo", "illustration", ...).
    pub kind: String,
    /// Comma-delimited tag list, as delivered.
    pub tags: String,
    pub views: u64,
    pub downloads: u64,
    pub likes: u64,
}

impl ImageRecord {
    /// Returns whether a preview URL is available.
    #[must_use]
    pub fn has_preview(&self) -> bool {
        self.preview_url.is_some()
    }

    /// Splits the tag list into trimmed, non-empty tags.
    #[must_use]
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .collect()
    }
}
