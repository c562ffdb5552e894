// SPDX-License-Identifier: MPL-2.0
//! Inline error banner.
//!
//! Every workflow renders its current error (validation or remote) through
//! this component so failures always look the same.

use crate::error::WorkflowError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{Container, Row, Text};
use iced::{Element, Length};

/// Renders `error` as a localized banner.
pub fn view<'a, Message: 'a>(i18n: &I18n, error: &WorkflowError) -> Element<'a, Message> {
    banner(i18n.tr(error.i18n_key()))
}

/// Renders an already localized message as a banner.
pub fn banner<'a, Message: 'a>(message: String) -> Element<'a, Message> {
    let content = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(Text::new("⚠").size(typography::BODY))
        .push(Text::new(message).size(typography::BODY));

    Container::new(content)
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .style(styles::container::error_banner)
        .into()
}
