// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the main `update` function and the specialized
//! handlers for the gallery, the detail modal and async completions.

use super::{notifications, persisted_state::AppState, Message};
use crate::application::gallery::GalleryState;
use crate::application::port::{ImageSearch, SearchError};
use crate::domain::gallery::{ImageRecord, SearchOutcome, SearchSeq, SearchTracker};
use crate::error::Error;
use crate::infrastructure::download::{self, SavedImage};
use crate::infrastructure::{http, share};
use crate::ui::detail_modal::{self, Event as DetailEvent};
use crate::ui::gallery::{self, Event as GalleryEvent};
use crate::ui::thumbnails::ThumbnailCache;
use iced::Task;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub gallery: &'a mut GalleryState,
    pub tracker: &'a mut SearchTracker,
    pub thumbnails: &'a mut ThumbnailCache,
    pub search: &'a Arc<dyn ImageSearch>,
    pub share_page_url: &'a str,
    pub persisted: &'a mut AppState,
    pub state_dir: Option<&'a Path>,
    pub notifications: &'a mut notifications::Manager,
    pub now: &'a mut Instant,
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Gallery(msg) => handle_gallery_message(ctx, msg),
        Message::Detail(msg) => handle_detail_message(ctx, &msg),
        Message::Notification(msg) => {
            ctx.notifications.handle_message(&msg);
            Task::none()
        }
        Message::SearchCompleted { seq, result } => handle_search_completed(ctx, seq, result),
        Message::ThumbnailLoaded { url, result } => {
            ctx.thumbnails.complete(&url, result);
            Task::none()
        }
        Message::DownloadFinished(result) => handle_download_finished(ctx, result),
        Message::ShareOpened(result) => {
            if let Err(err) = result {
                tracing::warn!(error = %err, "could not open share link");
            }
            Task::none()
        }
        Message::EscapePressed => {
            if ctx.gallery.is_modal_open() {
                ctx.gallery.close_detail();
            }
            Task::none()
        }
        Message::Tick(now) => {
            *ctx.now = now;
            ctx.notifications.tick(now);
            Task::none()
        }
    }
}

/// Handles gallery messages (typing, submitting, clicking a thumbnail).
pub fn handle_gallery_message(ctx: &mut UpdateContext<'_>, message: gallery::Message) -> Task<Message> {
    match gallery::update(message) {
        GalleryEvent::QueryChanged(text) => {
            ctx.gallery.set_query(text);
            Task::none()
        }
        GalleryEvent::SearchRequested => start_search(ctx),
        GalleryEvent::ImageActivated(record) => {
            let preview = record.preview_url.clone();
            ctx.gallery.open_detail(record);
            match preview {
                Some(url) => fetch_thumbnails(ctx, [url.as_str()]),
                None => Task::none(),
            }
        }
    }
}

/// Handles detail modal messages.
pub fn handle_detail_message(ctx: &mut UpdateContext<'_>, message: &detail_modal::Message) -> Task<Message> {
    match detail_modal::update(message) {
        DetailEvent::Closed => {
            ctx.gallery.close_detail();
            Task::none()
        }
        DetailEvent::DownloadRequested => handle_download_request(ctx),
        DetailEvent::ShareRequested(target) => {
            let address = ctx.share_page_url.to_string();
            Task::perform(share::open_share(target, address), Message::ShareOpened)
        }
    }
}

/// Issues a search for the current query text.
///
/// The query is sent as typed; an empty query is a valid search.
pub fn start_search(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let ticket = ctx.tracker.issue(ctx.gallery.query());
    tracing::debug!(seq = ticket.seq.value(), query = %ticket.query, "search issued");

    let seq = ticket.seq;
    Task::perform(ctx.search.search(&ticket.query), move |result| {
        Message::SearchCompleted { seq, result }
    })
}

/// Applies a search result unless a newer search already completed.
pub fn handle_search_completed(
    ctx: &mut UpdateContext<'_>,
    seq: SearchSeq,
    result: Result<Vec<ImageRecord>, SearchError>,
) -> Task<Message> {
    let outcome = match &result {
        Ok(records) => SearchOutcome::Succeeded {
            result_count: records.len(),
        },
        Err(_) => SearchOutcome::Failed,
    };
    let fresh = ctx.tracker.complete(seq, outcome);

    match result {
        Ok(records) if fresh => {
            ctx.gallery.set_results(records);
            let urls: Vec<String> = gallery::grid_urls(ctx.gallery.results())
                .map(str::to_string)
                .collect();
            ctx.thumbnails.pin_grid(urls.iter().map(String::as_str));
            fetch_thumbnails(ctx, urls.iter().map(String::as_str))
        }
        Ok(records) => {
            tracing::debug!(
                seq = seq.value(),
                count = records.len(),
                "discarding stale search results"
            );
            Task::none()
        }
        Err(err) => {
            tracing::warn!(seq = seq.value(), error = %err, "search failed");
            Task::none()
        }
    }
}

/// Starts fetches for the URLs the cache has not seen yet.
fn fetch_thumbnails<'u>(
    ctx: &mut UpdateContext<'_>,
    urls: impl IntoIterator<Item = &'u str>,
) -> Task<Message> {
    let tasks: Vec<Task<Message>> = ctx
        .thumbnails
        .request_all(urls)
        .into_iter()
        .map(|url| {
            let fetch_url = url.clone();
            Task::perform(
                async move { http::fetch_bytes(&fetch_url).await },
                move |result| Message::ThumbnailLoaded { url, result },
            )
        })
        .collect();

    Task::batch(tasks)
}

fn handle_download_request(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(record) = ctx.gallery.detail() else {
        return Task::none();
    };
    let Some(url) = record.preview_url.clone() else {
        return Task::none();
    };

    let file_name = download::suggested_file_name(&record.uploader, &url);
    let start_dir = ctx.persisted.last_download_directory.clone();
    Task::perform(
        download::download_with_dialog(url, file_name, start_dir),
        Message::DownloadFinished,
    )
}

fn handle_download_finished(
    ctx: &mut UpdateContext<'_>,
    result: Result<Option<SavedImage>, Error>,
) -> Task<Message> {
    match result {
        Ok(Some(saved)) => {
            ctx.notifications.clear_matching("notification-download-error");
            ctx.notifications.push(
                notifications::Notification::success("notification-download-success")
                    .with_arg("path", saved.path.display().to_string()),
            );

            ctx.persisted.set_last_download_directory_from_file(&saved.path);
            if let Some(key) = ctx.persisted.save_to(ctx.state_dir.map(Path::to_path_buf)) {
                ctx.notifications
                    .push(notifications::Notification::warning(key));
            }
        }
        Ok(None) => {}
        Err(err) => {
            ctx.notifications.push(
                notifications::Notification::error("notification-download-error")
                    .with_arg("error", err.to_string()),
            );
        }
    }
    Task::none()
}
