// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme mode.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Default to dark on detection error
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// Resolves to a concrete Iced theme.
    #[must_use]
    pub fn resolve(self) -> ResolvedTheme {
        if self.is_dark() {
            ResolvedTheme::Dark
        } else {
            ResolvedTheme::Light
        }
    }
}

/// Theme mode with `System` resolved once at start-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

impl ResolvedTheme {
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        match self {
            ResolvedTheme::Light => Theme::Light,
            ResolvedTheme::Dark => Theme::Dark,
        }
    }

    /// Base color of the placeholder shimmer tiles.
    #[must_use]
    pub fn shimmer_color(self) -> Color {
        match self {
            ResolvedTheme::Light => palette::GRAY_200,
            ResolvedTheme::Dark => palette::GRAY_700,
        }
    }
}
