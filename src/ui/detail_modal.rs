// SPDX-License-Identifier: MPL-2.0
//! Detail modal for the selected image.
//!
//! Shows the preview, tags, uploader and statistics, with a download button,
//! three share buttons and a close button. The modal sits on a dimmed
//! backdrop above the gallery.

use crate::domain::gallery::ImageRecord;
use crate::i18n::I18n;
use crate::infrastructure::ShareTarget;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::thumbnails::ThumbnailState;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, image, opaque, scrollable, Column, Container, Row, Stack, Text};
use iced::{ContentFit, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub record: &'a ImageRecord,
    /// Load state of the record's preview URL.
    pub preview: ThumbnailState,
}

#[derive(Debug, Clone)]
pub enum Message {
    Close,
    Download,
    Share(ShareTarget),
}

#[derive(Debug, Clone)]
pub enum Event {
    Closed,
    DownloadRequested,
    ShareRequested(ShareTarget),
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Close => Event::Closed,
        Message::Download => Event::DownloadRequested,
        Message::Share(target) => Event::ShareRequested(*target),
    }
}

/// The download button only works when there is something to download.
#[must_use]
pub fn can_download(record: &ImageRecord) -> bool {
    record.has_preview()
}

/// Layers the modal over `base`. Input never reaches `base` while it is open.
pub fn overlay<'a, M: 'a>(base: Element<'a, M>, modal: Element<'a, M>) -> Element<'a, M> {
    let backdrop = Container::new(opaque(modal))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .padding(spacing::LG)
        .style(styles::container::backdrop);

    Stack::new().push(base).push(opaque(backdrop)).into()
}

#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let body = Row::new()
        .spacing(spacing::LG)
        .padding(spacing::MD)
        .push(preview_column(&ctx))
        .push(information_column(&ctx));

    let card = Column::new().push(header(&ctx)).push(scrollable(body));

    Container::new(card)
        .max_width(sizing::MODAL_MAX_WIDTH)
        .style(styles::container::modal_card)
        .into()
}

fn header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(
        ctx.i18n
            .tr_with_args("detail-title", &[("id", &ctx.record.id.to_string())]),
    )
    .size(typography::TITLE_MD)
    .width(Length::Fill);

    let close = button(Text::new(ctx.i18n.tr("detail-close")).size(typography::BODY_LG))
        .on_press(Message::Close)
        .padding([0.0, spacing::XS])
        .style(styles::button::close);

    Container::new(
        Row::new()
            .align_y(Vertical::Center)
            .push(title)
            .push(close),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::modal_header)
    .into()
}

fn preview_column<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let height = Length::Fixed(sizing::MODAL_PREVIEW_HEIGHT);
    let preview: Element<'a, Message> = match &ctx.preview {
        ThumbnailState::Ready(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(height)
            .content_fit(ContentFit::Contain)
            .into(),
        ThumbnailState::Failed => status_box(ctx.i18n.tr("gallery-cell-unavailable"), height),
        ThumbnailState::Pending | ThumbnailState::Unknown => {
            status_box(ctx.i18n.tr("gallery-cell-loading"), height)
        }
    };

    let tags = Row::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("detail-tags")).size(typography::BODY))
        .push(Text::new(ctx.record.tag_list().join(", ")).size(typography::BODY_LG));

    Column::new()
        .width(Length::FillPortion(1))
        .spacing(spacing::SM)
        .push(preview)
        .push(tags)
        .into()
}

fn status_box<'a>(label: String, height: Length) -> Element<'a, Message> {
    container(Text::new(label).size(typography::BODY))
        .width(Length::Fill)
        .center_y(height)
        .align_x(Horizontal::Center)
        .style(styles::container::text_cell)
        .into()
}

fn stat<'a>(label: String, value: String) -> Element<'a, Message> {
    Column::new()
        .align_x(Horizontal::Center)
        .padding([spacing::XS, spacing::MD])
        .push(Text::new(label).size(typography::CAPTION))
        .push(Text::new(value).size(typography::BODY_LG))
        .into()
}

fn information_column<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let record = ctx.record;

    let uploader_row = Row::new()
        .push(stat(i18n.tr("detail-user"), record.uploader.clone()))
        .push(stat(i18n.tr("detail-user-id"), record.uploader_id.to_string()))
        .push(stat(i18n.tr("detail-type"), record.kind.clone()));

    let stats_row = Row::new()
        .push(stat(i18n.tr("detail-views"), record.views.to_string()))
        .push(stat(i18n.tr("detail-downloads"), record.downloads.to_string()))
        .push(stat(i18n.tr("detail-likes"), record.likes.to_string()));

    let download = button(Text::new(i18n.tr("detail-download-button")).size(typography::BODY_LG))
        .on_press_maybe(can_download(record).then_some(Message::Download))
        .padding([spacing::SM, spacing::XL])
        .style(styles::button::download);

    let share_buttons = ShareTarget::ALL.iter().fold(
        Row::new().spacing(spacing::XS),
        |row, target| {
            row.push(
                button(Text::new(i18n.tr(target.i18n_key())).size(typography::BODY))
                    .on_press(Message::Share(*target))
                    .padding([spacing::XS, spacing::SM])
                    .style(styles::button::share),
            )
        },
    );

    Column::new()
        .width(Length::FillPortion(1))
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("detail-information")).size(typography::TITLE_MD))
        .push(uploader_row)
        .push(stats_row)
        .push(download)
        .push(Text::new(i18n.tr("detail-share-heading")).size(typography::BODY_LG))
        .push(share_buttons)
        .into()
}
