// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::persisted_state::AppState;
use iced_gallery::app::{App, Boot, Message};
use iced_gallery::application::port::{ImageSearch, SearchError, SearchFuture};
use iced_gallery::config::{self, Config};
use iced_gallery::domain::gallery::{ImageRecord, ResultStatus};
use iced_gallery::error::Error;
use iced_gallery::i18n::I18n;
use iced_gallery::infrastructure::download::SavedImage;
use iced_gallery::ui::detail_modal;
use iced_gallery::ui::gallery::{self, Body, Cell};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::tempdir;

/// Search backend that records every query and answers with a canned list.
#[derive(Default)]
struct RecordingSearch {
    queries: Mutex<Vec<String>>,
    response: Vec<ImageRecord>,
}

impl RecordingSearch {
    fn answering(response: Vec<ImageRecord>) -> Arc<Self> {
        Arc::new(Self {
            queries: Mutex::new(Vec::new()),
            response,
        })
    }

    fn queries(&self) -> Vec<String> {
        self.queries.lock().expect("queries lock").clone()
    }
}

impl ImageSearch for RecordingSearch {
    fn search(&self, query: &str) -> SearchFuture {
        self.queries
            .lock()
            .expect("queries lock")
            .push(query.to_string());
        let response = self.response.clone();
        Box::pin(async move { Ok(response) })
    }
}

fn record(id: u64) -> ImageRecord {
    ImageRecord {
        id,
        preview_url: Some(format!("https://cdn.example/{id}_150.jpg")),
        display_url: format!("https://cdn.example/{id}_640.jpg"),
        uploader: format!("user{id}"),
        uploader_id: id,
        kind: "photo".to_string(),
        tags: "cat, pet".to_string(),
        views: 1,
        downloads: 1,
        likes: 1,
    }
}

fn boot(search: Arc<RecordingSearch>) -> App {
    App::boot(Boot::new(Config::default(), search)).0
}

/// Feeds the result of the latest issued search back into the app.
fn complete_latest(app: &mut App, result: Result<Vec<ImageRecord>, SearchError>) {
    let seq = app.tracker().latest_issued().expect("a search was issued");
    let _ = app.update(Message::SearchCompleted { seq, result });
}

fn submit(app: &mut App, query: &str) {
    let _ = app.update(Message::Gallery(gallery::Message::QueryChanged(query.into())));
    let _ = app.update(Message::Gallery(gallery::Message::SearchSubmitted));
}

#[test]
fn start_up_searches_once_with_empty_query() {
    let search = RecordingSearch::answering(Vec::new());
    let app = boot(search.clone());

    assert_eq!(search.queries(), vec![String::new()]);
    assert_eq!(app.tracker().issued_total(), 1);
    assert_eq!(app.status(), ResultStatus::Loading);
}

#[test]
fn start_up_uses_initial_query_when_given() {
    let search = RecordingSearch::answering(Vec::new());
    let mut boot = Boot::new(Config::default(), search.clone());
    boot.initial_query = Some("sunset".into());
    let (app, _) = App::boot(boot);

    assert_eq!(search.queries(), vec!["sunset".to_string()]);
    assert_eq!(app.gallery().query(), "sunset");
}

#[test]
fn three_results_render_three_cells_and_no_placeholder() {
    let mut app = boot(RecordingSearch::answering(Vec::new()));
    complete_latest(&mut app, Ok(vec![record(1), record(2), record(3)]));

    let results = app.gallery().results();
    assert_eq!(gallery::body(results), Body::Grid);
    assert_eq!(gallery::cells(results, app.thumbnails()).len(), 3);
    assert_eq!(app.status(), ResultStatus::Loaded);
}

#[test]
fn empty_results_show_the_placeholder() {
    let mut app = boot(RecordingSearch::answering(Vec::new()));
    complete_latest(&mut app, Ok(Vec::new()));

    assert_eq!(gallery::body(app.gallery().results()), Body::Placeholder);
    assert!(gallery::cells(app.gallery().results(), app.thumbnails()).is_empty());
    assert_eq!(app.status(), ResultStatus::LoadedEmpty);
}

#[test]
fn submitted_search_with_no_hits_clears_the_grid() {
    let search = RecordingSearch::answering(Vec::new());
    let mut app = boot(search.clone());
    complete_latest(&mut app, Ok(vec![record(1), record(2)]));

    submit(&mut app, "cats");
    assert_eq!(search.queries(), vec![String::new(), "cats".to_string()]);

    complete_latest(&mut app, Ok(Vec::new()));
    assert!(app.gallery().results().is_empty());
    assert_eq!(gallery::body(app.gallery().results()), Body::Placeholder);
}

#[test]
fn closing_the_modal_keeps_the_selection() {
    let mut app = boot(RecordingSearch::answering(Vec::new()));
    let mut seven = record(7);
    seven.preview_url = Some("x".into());
    complete_latest(&mut app, Ok(vec![seven.clone()]));

    let _ = app.update(Message::Gallery(gallery::Message::ImageSelected(seven.clone())));
    assert!(app.gallery().is_modal_open());
    assert_eq!(app.gallery().selected(), Some(&seven));

    let _ = app.update(Message::Detail(detail_modal::Message::Close));
    assert!(!app.gallery().is_modal_open());
    assert_eq!(app.gallery().selected(), Some(&seven));
}

#[test]
fn escape_closes_the_modal() {
    let mut app = boot(RecordingSearch::answering(Vec::new()));
    let _ = app.update(Message::Gallery(gallery::Message::ImageSelected(record(4))));

    let _ = app.update(Message::EscapePressed);
    assert!(!app.gallery().is_modal_open());
    assert_eq!(app.gallery().selected().map(|r| r.id), Some(4));
}

#[test]
fn record_without_preview_renders_loading_cell() {
    let mut app = boot(RecordingSearch::answering(Vec::new()));
    let mut bare = record(2);
    bare.preview_url = None;
    complete_latest(&mut app, Ok(vec![record(1), bare, record(3)]));

    let url = app.gallery().results()[0].display_url.clone();
    let _ = app.update(Message::ThumbnailLoaded {
        url,
        result: Ok(vec![0u8; 8]),
    });

    let cells = gallery::cells(app.gallery().results(), app.thumbnails());
    assert_eq!(cells.len(), 3);
    assert!(matches!(cells[0], Cell::Image { .. }));
    assert!(matches!(cells[1], Cell::Loading));
    assert!(matches!(cells[2], Cell::Loading));

    // Building the whole view must not trip over the bare record.
    let _ = app.view();
}

#[test]
fn new_results_replace_old_ones() {
    let mut app = boot(RecordingSearch::answering(Vec::new()));
    complete_latest(&mut app, Ok(vec![record(1), record(2)]));

    submit(&mut app, "dogs");
    complete_latest(&mut app, Ok(vec![record(9)]));

    assert_eq!(app.gallery().results(), &[record(9)]);
}

#[test]
fn activating_a_thumbnail_always_opens_it() {
    let mut app = boot(RecordingSearch::answering(Vec::new()));
    let _ = app.update(Message::Gallery(gallery::Message::ImageSelected(record(1))));
    let _ = app.update(Message::Gallery(gallery::Message::ImageSelected(record(2))));

    assert!(app.gallery().is_modal_open());
    assert_eq!(app.gallery().selected().map(|r| r.id), Some(2));
}

#[test]
fn failed_search_leaves_results_untouched() {
    let mut app = boot(RecordingSearch::answering(Vec::new()));
    complete_latest(&mut app, Ok(vec![record(1)]));

    submit(&mut app, "boom");
    complete_latest(&mut app, Err(SearchError::Status(500)));

    assert_eq!(app.gallery().results(), &[record(1)]);
    assert_eq!(app.tracker().in_flight(), 0);
}

#[test]
fn stale_completion_does_not_overwrite_newer_results() {
    let mut app = boot(RecordingSearch::answering(Vec::new()));
    complete_latest(&mut app, Ok(Vec::new()));

    submit(&mut app, "slow");
    let slow = app.tracker().latest_issued().expect("slow search issued");
    submit(&mut app, "fast");

    complete_latest(&mut app, Ok(vec![record(2)]));
    let _ = app.update(Message::SearchCompleted {
        seq: slow,
        result: Ok(vec![record(1)]),
    });

    assert_eq!(app.gallery().results(), &[record(2)]);
}

fn boot_with_state_dir(dir: &Path) -> App {
    let mut boot = Boot::new(Config::default(), RecordingSearch::answering(Vec::new()));
    boot.state_dir = Some(dir.to_path_buf());
    App::boot(boot).0
}

fn toast_keys(app: &App) -> Vec<String> {
    app.notifications()
        .visible()
        .map(|n| n.message_key().to_string())
        .collect()
}

#[test]
fn successful_download_shows_toast_and_remembers_directory() {
    let dir = tempdir().expect("create temp dir");
    let state_dir = dir.path().join("data");
    let saved_path = dir.path().join("pictures").join("user1.jpg");
    let mut app = boot_with_state_dir(&state_dir);

    let _ = app.update(Message::DownloadFinished(Err(Error::Http("timeout".into()))));
    assert_eq!(toast_keys(&app), vec!["notification-download-error"]);

    let _ = app.update(Message::DownloadFinished(Ok(Some(SavedImage {
        path: saved_path.clone(),
        bytes: 42,
    }))));

    assert_eq!(toast_keys(&app), vec!["notification-download-success"]);
    assert_eq!(
        app.app_state().last_download_directory,
        Some(dir.path().join("pictures"))
    );

    let (reloaded, warning) = AppState::load_from(Some(state_dir));
    assert!(warning.is_none());
    assert_eq!(&reloaded, app.app_state());
}

#[test]
fn cancelled_download_changes_nothing() {
    let dir = tempdir().expect("create temp dir");
    let mut app = boot_with_state_dir(dir.path());

    let _ = app.update(Message::DownloadFinished(Ok(None)));

    assert!(toast_keys(&app).is_empty());
    assert_eq!(app.app_state(), &AppState::default());
    assert!(std::fs::read_dir(dir.path())
        .expect("read state dir")
        .next()
        .is_none());
}

#[test]
fn failed_download_shows_error_and_keeps_state() {
    let dir = tempdir().expect("create temp dir");
    let mut app = boot_with_state_dir(dir.path());

    let _ = app.update(Message::DownloadFinished(Err(Error::Io("disk full".into()))));

    assert_eq!(toast_keys(&app), vec!["notification-download-error"]);
    let toast = app.notifications().visible().next().expect("error toast");
    assert!(toast
        .message_args()
        .iter()
        .any(|(name, value)| name == "error" && value.contains("disk full")));
    assert!(app.app_state().last_download_directory.is_none());
}

#[test]
fn grid_thumbnails_survive_a_small_cache() {
    let mut config = Config::default();
    config.search.per_page = Some(50);
    config.gallery.thumbnail_cache_size = Some(16);
    let mut app = App::boot(Boot::new(config, RecordingSearch::answering(Vec::new()))).0;

    let records: Vec<ImageRecord> = (1..=50).map(record).collect();
    complete_latest(&mut app, Ok(records.clone()));
    for record in &records {
        let _ = app.update(Message::ThumbnailLoaded {
            url: record.display_url.clone(),
            result: Ok(vec![0u8; 8]),
        });
    }

    // Opening many images fills the LRU with previews.
    for record in records.iter().take(30) {
        let _ = app.update(Message::Gallery(gallery::Message::ImageSelected(record.clone())));
        let _ = app.update(Message::ThumbnailLoaded {
            url: record.preview_url.clone().expect("preview url"),
            result: Ok(vec![0u8; 8]),
        });
        let _ = app.update(Message::EscapePressed);
    }

    let cells = gallery::cells(app.gallery().results(), app.thumbnails());
    assert_eq!(cells.len(), 50);
    assert!(cells.iter().all(|cell| matches!(cell, Cell::Image { .. })));
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &path).expect("write config");
    let loaded = config::load_from_path(&path).expect("load config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    let mut french = Config::default();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &path).expect("write config");
    let loaded = config::load_from_path(&path).expect("load config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "fr");
}
