// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for the editing sidebar panels.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Style for the header bar.
pub fn toolbar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            width: 0.0,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Style for floating dropdown surfaces (the language switcher menu).
pub fn dropdown(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: palette.background.strong.color,
        },
        ..Default::default()
    }
}

/// Surface slightly offset from the background, used for cards and the
/// sidebar so they stay visually distinct in both theme modes.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;
    let luminance = base.r + base.g + base.b;
    let (r, g, b) = if luminance < 1.5 {
        (
            (base.r + 0.10).min(1.0),
            (base.g + 0.10).min(1.0),
            (base.b + 0.10).min(1.0),
        )
    } else {
        (
            (base.r - 0.06).max(0.0),
            (base.g - 0.06).max(0.0),
            (base.b - 0.06).max(0.0),
        )
    };

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            r,
            g,
            b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            width: 0.0,
            ..Default::default()
        },
        ..Default::default()
    }
}
