// SPDX-License-Identifier: MPL-2.0
//! Placeholder shown whenever the result list is empty.
//!
//! It is the same component whether a search is in flight, returned nothing,
//! or has not run yet. Only the caption differs. A row of pulsing tiles
//! stands in for the grid.

use crate::domain::gallery::ResultStatus;
use crate::i18n::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length};

/// Number of shimmer tiles.
pub const TILE_COUNT: usize = 8;

/// Phase offset between neighbouring tiles, in radians.
const TILE_PHASE_STEP: f32 = 0.6;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub status: ResultStatus,
    pub color: Color,
    pub phase: f32,
}

/// i18n key of the caption for `status`.
#[must_use]
pub fn caption_key(status: ResultStatus) -> &'static str {
    match status {
        ResultStatus::NotLoaded => "placeholder-status-not-loaded",
        ResultStatus::Loading => "placeholder-status-loading",
        ResultStatus::LoadedEmpty | ResultStatus::Loaded => "placeholder-status-empty",
    }
}

/// Opacity of tile `index` at animation `phase`.
#[must_use]
pub fn tile_alpha(index: usize, phase: f32) -> f32 {
    let wave = 0.5 + 0.5 * (phase - index as f32 * TILE_PHASE_STEP).sin();
    opacity::SHIMMER_LOW + (opacity::SHIMMER_HIGH - opacity::SHIMMER_LOW) * wave
}

#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view<'a, M: 'a>(ctx: ViewContext<'a>) -> Element<'a, M> {
    let caption = Text::new(ctx.i18n.tr(caption_key(ctx.status)))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let side = Length::Fixed(sizing::THUMBNAIL);
    let tiles = (0..TILE_COUNT).map(|index| {
        Container::new(Text::new(""))
            .width(side)
            .height(side)
            .style(styles::container::shimmer(ctx.color, tile_alpha(index, ctx.phase)))
            .into()
    });

    let grid = Row::with_children(tiles)
        .spacing(spacing::XS)
        .wrap()
        .vertical_spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center);

    Column::new()
        .width(Length::Fill)
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(caption)
        .push(grid)
        .into()
}
