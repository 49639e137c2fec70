// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The gallery is always rendered; the detail modal and the toasts are
//! layered on top of it.

use super::{notifications, Message};
use crate::application::gallery::GalleryState;
use crate::domain::gallery::ResultStatus;
use crate::i18n::I18n;
use crate::ui::detail_modal;
use crate::ui::gallery;
use crate::ui::notifications::Toast;
use crate::ui::theming::ResolvedTheme;
use crate::ui::thumbnails::{ThumbnailCache, ThumbnailState};
use iced::widget::{Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a GalleryState,
    pub thumbnails: &'a ThumbnailCache,
    pub notifications: &'a notifications::Manager,
    pub status: ResultStatus,
    pub theme: ResolvedTheme,
    pub shimmer_phase: f32,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let base = gallery::view(gallery::ViewContext {
        i18n: ctx.i18n,
        gallery: ctx.gallery,
        thumbnails: ctx.thumbnails,
        status: ctx.status,
        shimmer_color: ctx.theme.shimmer_color(),
        shimmer_phase: ctx.shimmer_phase,
    })
    .map(Message::Gallery);

    let content = match ctx.gallery.detail() {
        Some(record) => {
            let preview = record
                .preview_url
                .as_deref()
                .map_or(ThumbnailState::Failed, |url| ctx.thumbnails.state(url));
            let modal = detail_modal::view(detail_modal::ViewContext {
                i18n: ctx.i18n,
                record,
                preview,
            })
            .map(Message::Detail);
            detail_modal::overlay(base, modal)
        }
        None => base,
    };

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Container::new(Stack::new().push(content).push(toasts))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
