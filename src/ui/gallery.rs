// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: navigation bar, hero text, search bar and thumbnail grid.
//!
//! When there are no results the grid is replaced by the placeholder.

use crate::application::gallery::GalleryState;
use crate::domain::gallery::{ImageRecord, ResultStatus};
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::placeholder;
use crate::ui::styles;
use crate::ui::thumbnails::{ThumbnailCache, ThumbnailState};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Handle;
use iced::widget::{button, container, image, scrollable, text, text_input, Column, Container, Row, Text};
use iced::{Color, ContentFit, Element, Length};

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a GalleryState,
    pub thumbnails: &'a ThumbnailCache,
    pub status: ResultStatus,
    pub shimmer_color: Color,
    /// Animation phase of the placeholder shimmer, in radians.
    pub shimmer_phase: f32,
}

/// Messages emitted by the gallery.
#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    SearchSubmitted,
    ImageSelected(ImageRecord),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    QueryChanged(String),
    SearchRequested,
    ImageActivated(ImageRecord),
}

#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::QueryChanged(text) => Event::QueryChanged(text),
        Message::SearchSubmitted => Event::SearchRequested,
        Message::ImageSelected(record) => Event::ImageActivated(record),
    }
}

// =============================================================================
// View model
// =============================================================================

/// What the area below the search bar shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body {
    Placeholder,
    Grid,
}

/// Placeholder whenever there are no results, whatever the reason.
#[must_use]
pub fn body(results: &[ImageRecord]) -> Body {
    if results.is_empty() {
        Body::Placeholder
    } else {
        Body::Grid
    }
}

/// One grid cell.
#[derive(Debug, Clone)]
pub enum Cell<'a> {
    /// Preview missing, or image bytes not there yet.
    Loading,
    /// Image fetch failed.
    Unavailable,
    Image {
        record: &'a ImageRecord,
        handle: Handle,
    },
}

/// Builds one cell per record, in result order.
#[must_use]
pub fn cells<'a>(results: &'a [ImageRecord], thumbnails: &ThumbnailCache) -> Vec<Cell<'a>> {
    results
        .iter()
        .map(|record| {
            if !record.has_preview() {
                return Cell::Loading;
            }
            match thumbnails.state(&record.display_url) {
                ThumbnailState::Ready(handle) => Cell::Image { record, handle },
                ThumbnailState::Failed => Cell::Unavailable,
                ThumbnailState::Pending | ThumbnailState::Unknown => Cell::Loading,
            }
        })
        .collect()
}

/// URLs the grid needs fetched: display URLs of records with a preview.
pub fn grid_urls(results: &[ImageRecord]) -> impl Iterator<Item = &str> {
    results
        .iter()
        .filter(|record| record.has_preview())
        .map(|record| record.display_url.as_str())
}

// =============================================================================
// View
// =============================================================================

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .padding(spacing::MD)
        .align_x(Horizontal::Center)
        .push(navbar(&ctx))
        .push(hero(&ctx))
        .push(search_bar(&ctx))
        .push(match body(ctx.gallery.results()) {
            Body::Placeholder => placeholder::view(placeholder::ViewContext {
                i18n: ctx.i18n,
                status: ctx.status,
                color: ctx.shimmer_color,
                phase: ctx.shimmer_phase,
            }),
            Body::Grid => grid(&ctx),
        });

    scrollable(content).height(Length::Fill).into()
}

fn navbar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Container::new(Text::new(ctx.i18n.tr("navbar-title")).size(typography::BODY_LG))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .padding(spacing::MD)
        .align_y(Vertical::Center)
        .style(styles::container::navbar)
        .into()
}

fn hero<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .align_x(Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("hero-line-1")).size(typography::HERO))
        .push(Text::new(ctx.i18n.tr("hero-line-2")).size(typography::HERO))
        .into()
}

fn search_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let input = text_input(&ctx.i18n.tr("search-placeholder"), ctx.gallery.query())
        .on_input(Message::QueryChanged)
        .on_submit(Message::SearchSubmitted)
        .size(typography::BODY_LG)
        .padding(spacing::SM)
        .width(Length::Fill);

    let submit = button(text(ctx.i18n.tr("search-button")).size(typography::BODY_LG))
        .on_press(Message::SearchSubmitted)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::primary);

    Container::new(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(input)
            .push(submit),
    )
    .max_width(sizing::SEARCH_BAR_MAX_WIDTH)
    .height(Length::Fixed(sizing::INPUT_HEIGHT))
    .align_y(Vertical::Center)
    .into()
}

fn grid<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let cells: Vec<Element<'a, Message>> = cells(ctx.gallery.results(), ctx.thumbnails)
        .into_iter()
        .map(|cell| cell_view(ctx.i18n, cell))
        .collect();

    Row::with_children(cells)
        .spacing(spacing::XS)
        .wrap()
        .vertical_spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .into()
}

fn cell_view<'a>(i18n: &I18n, cell: Cell<'a>) -> Element<'a, Message> {
    let side = Length::Fixed(sizing::THUMBNAIL);

    match cell {
        Cell::Image { record, handle } => button(
            image(handle)
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Cover),
        )
        .on_press(Message::ImageSelected(record.clone()))
        .width(side)
        .height(side)
        .padding(spacing::XS)
        .style(styles::button::thumbnail)
        .into(),
        Cell::Loading | Cell::Unavailable => {
            let key = if matches!(cell, Cell::Loading) {
                "gallery-cell-loading"
            } else {
                "gallery-cell-unavailable"
            };
            container(Text::new(i18n.tr(key)).size(typography::BODY))
                .center_x(side)
                .center_y(side)
                .style(styles::container::text_cell)
                .into()
        }
    }
}
