// SPDX-License-Identifier: MPL-2.0
//! Styles for the meme editor surfaces: toolbars, stage, and caption fields.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::{container, text_input};
use iced::{Background, Border, Color, Theme};

/// Style for the top and bottom editor toolbars.
///
/// Follows the global theme mode (light/dark) while staying visually subtle.
pub fn toolbar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// The stage is always black so letterboxing matches the exported meme.
pub fn stage(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BLACK)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Caption text field drawn over the photo: `fill` text, no box.
///
/// A faint outline appears while the field is hovered or focused so the
/// user can see where they are typing.
pub fn caption_input(fill: Color) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    move |_theme, status| {
        let outline = match status {
            text_input::Status::Active | text_input::Status::Disabled => Color::TRANSPARENT,
            text_input::Status::Hovered => Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::WHITE
            },
            text_input::Status::Focused { .. } => Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::WHITE
            },
        };

        text_input::Style {
            background: Background::Color(Color::TRANSPARENT),
            border: Border {
                color: outline,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            icon: fill,
            placeholder: Color {
                a: opacity::OVERLAY_STRONG,
                ..fill
            },
            value: fill,
            selection: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::PRIMARY_400
            },
        }
    }
}

/// Settings column background.
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
