// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::SearchError;
use crate::domain::gallery::{ImageRecord, SearchSeq};
use crate::error::Error;
use crate::infrastructure::download::SavedImage;
use crate::ui::detail_modal;
use crate::ui::gallery;
use crate::ui::notifications;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Detail(detail_modal::Message),
    Notification(notifications::NotificationMessage),
    /// A search finished, successfully or not.
    SearchCompleted {
        seq: SearchSeq,
        result: Result<Vec<ImageRecord>, SearchError>,
    },
    /// Bytes for a grid thumbnail or modal preview arrived.
    ThumbnailLoaded {
        url: String,
        result: Result<Vec<u8>, Error>,
    },
    /// `Ok(None)` means the save dialog was cancelled.
    DownloadFinished(Result<Option<SavedImage>, Error>),
    ShareOpened(Result<(), Error>),
    EscapePressed,
    Tick(Instant), // Periodic tick for toasts and the placeholder shimmer
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `en-US`, `fr`).
    pub lang: Option<String>,
    /// Search text to start with instead of the empty query.
    pub query: Option<String>,
    /// Pixabay API key, taking precedence over the environment and config.
    pub api_key: Option<String>,
    /// Optional data directory override (for state files).
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<String>,
}
