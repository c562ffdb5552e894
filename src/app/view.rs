// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The three workflow sections are stacked in a single scrollable page,
//! below an optional startup warning.

use super::Message;
use crate::application::port::StyleService;
use crate::i18n::fluent::I18n;
use crate::ui::components::error_display;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{analysis, moodboards, outfits, styles};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, scrollable, Column, Container, Row, Text},
    Element, Length,
};
use std::path::Path;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub service: &'a dyn StyleService,
    pub analysis: &'a analysis::State,
    pub outfits: &'a outfits::State,
    pub moodboards: &'a moodboards::State,
    pub moodboard_dir: Option<&'a Path>,
    /// i18n key of the startup warning, if any.
    pub warning: Option<&'a str>,
}

/// Renders the page.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut page = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_LG));

    if let Some(key) = ctx.warning {
        page = page.push(view_warning(ctx.i18n, key));
    }

    let analysis = analysis::view(analysis::ViewContext {
        i18n: ctx.i18n,
        state: ctx.analysis,
        service: ctx.service,
    })
    .map(Message::Analysis);

    let outfits = outfits::view(outfits::ViewContext {
        i18n: ctx.i18n,
        state: ctx.outfits,
    })
    .map(Message::Outfits);

    let moodboards = moodboards::view(moodboards::ViewContext {
        i18n: ctx.i18n,
        state: ctx.moodboards,
        image_dir: ctx.moodboard_dir,
    })
    .map(Message::Moodboards);

    page = page.push(analysis).push(outfits).push(moodboards);

    scrollable(
        Container::new(page)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn view_warning<'a>(i18n: &I18n, key: &str) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Container::new(error_display::banner(i18n.tr(key))).width(Length::Fill))
        .push(
            button(Text::new(i18n.tr("dismiss-button")).size(typography::BODY))
                .style(styles::button::unselected)
                .on_press(Message::DismissWarning),
        )
        .into()
}
