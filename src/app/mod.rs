// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration for the gallery.
//!
//! The `App` struct wires together the gallery state, the search tracker,
//! the thumbnail cache and localization, and translates messages into side
//! effects like searches, thumbnail fetches, downloads and share requests.

mod message;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::gallery::GalleryState;
use crate::application::port::ImageSearch;
use crate::config::{self, Config};
use crate::domain::gallery::{ResultStatus, SearchTracker};
use crate::i18n::I18n;
use crate::infrastructure::{PixabayClient, SearchSettings};
use crate::ui::notifications;
use crate::ui::theming::ResolvedTheme;
use crate::ui::thumbnails::ThumbnailCache;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 500;
pub const MIN_WINDOW_WIDTH: u32 = 650;

/// One full shimmer cycle of the placeholder tiles.
const SHIMMER_PERIOD: Duration = Duration::from_millis(1600);

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: GalleryState,
    tracker: SearchTracker,
    thumbnails: ThumbnailCache,
    search: Arc<dyn ImageSearch>,
    /// Address handed to the share providers.
    share_page_url: String,
    theme: ResolvedTheme,
    /// Persisted application state (last download directory).
    app_state: persisted_state::AppState,
    /// Directory the state file is saved to; `None` resolves the default.
    state_dir: Option<PathBuf>,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    started_at: Instant,
    /// Time of the latest tick, drives the shimmer animation.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("query", &self.gallery.query())
            .field("results", &self.gallery.results().len())
            .field("status", &self.tracker.status())
            .field("modal_open", &self.gallery.is_modal_open())
            .finish()
    }
}

/// Everything needed to build an [`App`] without touching disk or network.
///
/// `App::new` fills this from config files and the command line; tests
/// build it directly with a fake search backend.
pub struct Boot {
    pub config: Config,
    pub search: Arc<dyn ImageSearch>,
    pub lang: Option<String>,
    pub initial_query: Option<String>,
    pub app_state: persisted_state::AppState,
    /// Overrides where `app_state` is saved.
    pub state_dir: Option<PathBuf>,
    /// i18n keys of warnings to show as toasts on start-up.
    pub warnings: Vec<String>,
}

impl Boot {
    #[must_use]
    pub fn new(config: Config, search: Arc<dyn ImageSearch>) -> Self {
        Self {
            config,
            search,
            lang: None,
            initial_query: None,
            app_state: persisted_state::AppState::default(),
            state_dir: None,
            warnings: Vec::new(),
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires a `Fn` boot closure
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config and persisted state, then boots the gallery against
    /// the Pixabay backend.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let (app_state, state_warning) = persisted_state::AppState::load();

        let settings = SearchSettings::from_config(&config, flags.api_key);
        let mut warnings: Vec<String> = [config_warning, state_warning]
            .into_iter()
            .flatten()
            .collect();
        if !settings.has_api_key() {
            warnings.push("notification-missing-api-key".to_string());
        }

        Self::boot(Boot {
            search: Arc::new(PixabayClient::new(settings)),
            lang: flags.lang,
            initial_query: flags.query,
            app_state,
            state_dir: None,
            warnings,
            config,
        })
    }

    /// Builds the application and issues the start-up search.
    ///
    /// Exactly one search runs at start-up, with the initial query (empty
    /// unless one was given on the command line).
    pub fn boot(boot: Boot) -> (Self, Task<Message>) {
        let Boot {
            config,
            search,
            lang,
            initial_query,
            app_state,
            state_dir,
            warnings,
        } = boot;

        let now = Instant::now();
        let mut gallery = GalleryState::new();
        if let Some(query) = initial_query {
            gallery.set_query(query);
        }

        let mut app = App {
            i18n: I18n::new(lang, &config),
            gallery,
            tracker: SearchTracker::new(),
            thumbnails: ThumbnailCache::new(config.thumbnail_cache_size()),
            search,
            share_page_url: config.share_page_url().to_string(),
            theme: config.general.theme_mode.resolve(),
            app_state,
            state_dir,
            notifications: notifications::Manager::new(),
            started_at: now,
            now,
        };

        for key in warnings {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        let task = {
            let mut ctx = app.update_context();
            update::start_search(&mut ctx)
        };
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.notifications.has_notifications(),
            self.gallery.results().is_empty(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();
        update::update(&mut ctx, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            thumbnails: &self.thumbnails,
            notifications: &self.notifications,
            status: self.tracker.status(),
            theme: self.theme,
            shimmer_phase: self.shimmer_phase(),
        })
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            gallery: &mut self.gallery,
            tracker: &mut self.tracker,
            thumbnails: &mut self.thumbnails,
            search: &self.search,
            share_page_url: &self.share_page_url,
            persisted: &mut self.app_state,
            state_dir: self.state_dir.as_deref(),
            notifications: &mut self.notifications,
            now: &mut self.now,
        }
    }

    /// Shimmer phase in radians, derived from the time since start-up.
    fn shimmer_phase(&self) -> f32 {
        let elapsed = self.now.saturating_duration_since(self.started_at);
        let cycle = elapsed.as_secs_f32() / SHIMMER_PERIOD.as_secs_f32();
        cycle.fract() * std::f32::consts::TAU
    }

    #[must_use]
    pub fn gallery(&self) -> &GalleryState {
        &self.gallery
    }

    #[must_use]
    pub fn tracker(&self) -> &SearchTracker {
        &self.tracker
    }

    #[must_use]
    pub fn thumbnails(&self) -> &ThumbnailCache {
        &self.thumbnails
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn status(&self) -> ResultStatus {
        self.tracker.status()
    }

    #[must_use]
    pub fn app_state(&self) -> &persisted_state::AppState {
        &self.app_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::SearchFuture;
    use crate::domain::gallery::fixtures::record;

    struct EmptySearch;

    impl ImageSearch for EmptySearch {
        fn search(&self, _query: &str) -> SearchFuture {
            Box::pin(async { Ok(Vec::new()) })
        }
    }

    fn boot() -> App {
        App::boot(Boot::new(Config::default(), Arc::new(EmptySearch))).0
    }

    #[test]
    fn boot_issues_one_search() {
        let app = boot();
        assert_eq!(app.tracker().issued_total(), 1);
        assert_eq!(app.status(), ResultStatus::Loading);
    }

    #[test]
    fn boot_shows_warnings_as_toasts() {
        let mut boot = Boot::new(Config::default(), Arc::new(EmptySearch));
        boot.warnings = vec!["notification-missing-api-key".into()];
        let (app, _) = App::boot(boot);
        assert_eq!(app.notifications().visible_count(), 1);
    }

    #[test]
    fn shimmer_phase_stays_within_one_turn() {
        let mut app = boot();
        app.now = app.started_at + Duration::from_millis(2_500);
        let phase = app.shimmer_phase();
        assert!((0.0..std::f32::consts::TAU).contains(&phase));
    }

    #[test]
    fn title_is_localized() {
        let app = boot();
        assert_eq!(app.title(), app.i18n.tr("window-title"));
    }

    #[test]
    fn debug_output_names_query() {
        let mut app = boot();
        app.gallery.set_results(vec![record(1)]);
        let debug = format!("{app:?}");
        assert!(debug.contains("results: 1"));
    }
}
