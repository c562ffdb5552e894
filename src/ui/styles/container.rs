// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Surface of a workflow section (analysis, outfits, moodboards).
pub fn section(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Recommendation and outfit cards.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Inline error message.
pub fn error_banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.12,
            ..palette::ERROR_500
        })),
        text_color: Some(palette::ERROR_500),
        border: Border {
            color: palette::ERROR_500,
            width: border::WIDTH_MD,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

/// Filled square showing one palette color.
pub fn swatch(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            color: theme.extended_palette().background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}
