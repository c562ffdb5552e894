// SPDX-License-Identifier: MPL-2.0
//! Moodboard browser.
//!
//! Lists the curated moodboards. "Explore This" toggles the gallery of
//! example outfits under a moodboard. Galleries expand independently, so
//! several can be open at once. Purely local: no network access.

use crate::domain::moodboard::{Moodboard, MoodboardId, MOODBOARDS};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, image, Column, Container, Row, Text},
    Element, Length,
};
use std::collections::HashSet;
use std::path::Path;

/// State for the moodboard browser (tracks which galleries are expanded).
#[derive(Debug, Clone, Default)]
pub struct State {
    expanded: HashSet<MoodboardId>,
}

impl State {
    /// Create a browser with every gallery collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a moodboard's gallery is visible.
    pub fn is_expanded(&self, id: MoodboardId) -> bool {
        self.expanded.contains(&id)
    }

    /// Toggle the gallery of moodboard `id`. Other galleries are untouched.
    pub fn explore(&mut self, id: MoodboardId) {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }
}

/// Messages emitted by the moodboard browser.
#[derive(Debug, Clone)]
pub enum Message {
    Explore(MoodboardId),
}

/// Process a moodboard message.
pub fn update(state: &mut State, message: Message) {
    match message {
        Message::Explore(id) => state.explore(id),
    }
}

/// Contextual data needed to render the moodboard browser.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    /// Directory holding the artwork; file names are shown when unset.
    pub image_dir: Option<&'a Path>,
}

/// Render the moodboard browser.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let boards = MOODBOARDS
        .iter()
        .fold(Column::new().spacing(spacing::LG), |column, board| {
            column.push(build_moodboard(&ctx, board))
        });

    let content = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .push(Text::new(ctx.i18n.tr("moodboards-title")).size(typography::TITLE_MD))
        .push(boards);

    Container::new(content)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::section)
        .into()
}

fn build_moodboard<'a>(ctx: &ViewContext<'a>, board: &'static Moodboard) -> Element<'a, Message> {
    let is_expanded = ctx.state.is_expanded(board.id);

    let toggle_label = if is_expanded {
        ctx.i18n.tr("moodboard-hide-button")
    } else {
        ctx.i18n.tr("moodboard-explore-button")
    };
    let toggle_style = if is_expanded {
        styles::button::selected
    } else {
        styles::button::primary
    };

    let summary = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(build_artwork(ctx.image_dir, board.image, sizing::MOODBOARD_WIDTH))
        .push(
            Column::new()
                .spacing(spacing::SM)
                .width(Length::Fill)
                .push(Text::new(board.description).size(typography::BODY))
                .push(
                    button(Text::new(toggle_label).size(typography::BODY))
                        .style(toggle_style)
                        .on_press(Message::Explore(board.id)),
                ),
        );

    let mut column = Column::new().spacing(spacing::SM).push(summary);

    if is_expanded {
        let gallery = board
            .recommendation_images
            .iter()
            .fold(Row::new().spacing(spacing::SM), |row, name| {
                row.push(build_artwork(ctx.image_dir, name, sizing::GALLERY_IMAGE_WIDTH))
            });

        column = column
            .push(Text::new(ctx.i18n.tr("moodboard-gallery-heading")).size(typography::TITLE_SM))
            .push(gallery.wrap());
    }

    Container::new(column)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

fn build_artwork<'a>(image_dir: Option<&Path>, name: &'static str, width: f32) -> Element<'a, Message> {
    match image_dir {
        Some(dir) => image(image::Handle::from_path(dir.join(name)))
            .width(Length::Fixed(width))
            .into(),
        None => Container::new(Text::new(name).size(typography::CAPTION))
            .width(Length::Fixed(width))
            .into(),
    }
}
