// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn filled(base: Color, hover: Color, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => hover,
        button::Status::Disabled => Color {
            a: opacity::OVERLAY_MEDIUM,
            ..base
        },
        button::Status::Active | button::Status::Pressed => base,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: if matches!(status, button::Status::Hovered) {
            shadow::MD
        } else {
            shadow::SM
        },
        snap: true,
    }
}

/// Primary action (search submit).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style::default(),
    }
}

/// Download button in the detail modal.
pub fn download(_theme: &Theme, status: button::Status) -> button::Style {
    filled(palette::SUCCESS_500, palette::SUCCESS_400, status)
}

/// Share buttons in the detail modal.
pub fn share(_theme: &Theme, status: button::Status) -> button::Style {
    filled(palette::PRIMARY_600, palette::PRIMARY_500, status)
}

/// Outlined close button in the modal header.
pub fn close(theme: &Theme, status: button::Status) -> button::Style {
    let text = theme.palette().text;
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color: text,
        border: Border {
            color: text,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Clickable thumbnail: no chrome, slight fade on hover.
pub fn thumbnail(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: 1.0 - opacity::OVERLAY_HOVER,
            ..WHITE
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color: Color::TRANSPARENT,
        border: Border {
            radius: radius::XL.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
