// SPDX-License-Identifier: MPL-2.0
//! Color palette swatch.

use crate::domain::analysis::parse_color_code;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{Container, Row, Text};
use iced::{Color, Element, Length};

/// Converts a `#rrggbb`/`#rgb` code into an iced color.
#[must_use]
pub fn color_of(code: &str) -> Option<Color> {
    parse_color_code(code).map(|(r, g, b)| Color::from_rgb8(r, g, b))
}

/// Swatch followed by the code. Codes that do not parse are shown as text only.
pub fn view<'a, Message: 'a>(code: &str) -> Element<'a, Message> {
    let label = Text::new(code.to_string()).size(typography::CAPTION);

    match color_of(code) {
        Some(color) => Row::new()
            .spacing(spacing::XXS)
            .align_y(Vertical::Center)
            .push(
                Container::new(Text::new(""))
                    .width(Length::Fixed(sizing::SWATCH))
                    .height(Length::Fixed(sizing::SWATCH))
                    .style(styles::container::swatch(color)),
            )
            .push(label)
            .into(),
        None => label.into(),
    }
}
