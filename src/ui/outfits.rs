// SPDX-License-Identifier: MPL-2.0
//! Outfit generation workflow.
//!
//! The user toggles garments into two sets (tops and bottoms) and asks the
//! style service to combine them. Selections survive generation; only the
//! user deselects.

use crate::application::port::ServiceResult;
use crate::config::OutfitsConfig;
use crate::domain::outfit::{GarmentId, GarmentKind, GarmentSelection, OutfitPair};
use crate::domain::request::RequestId;
use crate::error::{RemoteAction, ValidationError, WorkflowError};
use crate::i18n::fluent::I18n;
use crate::ui::components::error_display;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Observable phase of the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Nothing selected.
    Empty,
    /// Only tops or only bottoms selected.
    PartialSelection,
    /// At least one top and one bottom selected.
    ReadySelection,
    Generating,
    /// Outfits (possibly none) received.
    Generated,
    Failed,
}

/// State of the outfit generation workflow.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Garments offered for selection, in display order.
    available_tops: Vec<GarmentId>,
    available_bottoms: Vec<GarmentId>,
    selection: GarmentSelection,
    outfits: Vec<OutfitPair>,
    generated: bool,
    error: Option<WorkflowError>,
    in_flight: Option<RequestId>,
    last_request: RequestId,
}

/// Messages emitted by the outfit section.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleTop(GarmentId),
    ToggleBottom(GarmentId),
    Generate,
    GenerationCompleted {
        request: RequestId,
        result: ServiceResult<Vec<OutfitPair>>,
    },
}

/// Side effects the parent application must carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Ask the style service for outfits and answer with
    /// [`Message::GenerationCompleted`].
    Generate {
        request: RequestId,
        tops: Vec<GarmentId>,
        bottoms: Vec<GarmentId>,
    },
}

impl State {
    /// Create a state offering the garments listed in `catalog`.
    #[must_use]
    pub fn new(catalog: &OutfitsConfig) -> Self {
        Self {
            available_tops: catalog.tops.iter().map(GarmentId::new).collect(),
            available_bottoms: catalog.bottoms.iter().map(GarmentId::new).collect(),
            ..Self::default()
        }
    }

    /// Adds `id` to the tops, or removes it if already selected.
    pub fn toggle_top(&mut self, id: GarmentId) {
        self.selection.toggle(GarmentKind::Top, id);
        self.clear_validation_error();
    }

    /// Adds `id` to the bottoms, or removes it if already selected.
    pub fn toggle_bottom(&mut self, id: GarmentId) {
        self.selection.toggle(GarmentKind::Bottom, id);
        self.clear_validation_error();
    }

    /// A changed selection answers a validation error; remote failures stay.
    fn clear_validation_error(&mut self) {
        if self.error.as_ref().is_some_and(WorkflowError::is_validation) {
            self.error = None;
        }
    }

    /// Requests outfits for the current selection.
    ///
    /// Needs at least one top and one bottom, otherwise records
    /// [`ValidationError::EmptyGarmentSelection`] and issues nothing.
    pub fn generate(&mut self) -> Effect {
        if self.in_flight.is_some() {
            return Effect::None;
        }
        if !self.selection.is_complete() {
            self.error = Some(ValidationError::EmptyGarmentSelection.into());
            return Effect::None;
        }

        self.outfits.clear();
        self.generated = false;
        self.error = None;
        self.last_request = self.last_request.next();
        let request = self.last_request;
        self.in_flight = Some(request);

        let tops: Vec<GarmentId> = self.selection.tops().iter().cloned().collect();
        let bottoms: Vec<GarmentId> = self.selection.bottoms().iter().cloned().collect();
        tracing::debug!(
            request = request.value(),
            tops = tops.len(),
            bottoms = bottoms.len(),
            "outfit generation requested"
        );

        Effect::Generate {
            request,
            tops,
            bottoms,
        }
    }

    /// Applies the outcome of generation `request`.
    pub fn complete_generation(
        &mut self,
        request: RequestId,
        result: ServiceResult<Vec<OutfitPair>>,
    ) {
        if self.in_flight != Some(request) {
            tracing::debug!(request = request.value(), "dropping stale outfit result");
            return;
        }
        self.in_flight = None;

        match result {
            Ok(outfits) => {
                self.outfits = outfits;
                self.generated = true;
            }
            Err(err) => {
                tracing::warn!(error = %err, "outfit generation failed");
                self.error = Some(WorkflowError::RemoteCall(RemoteAction::GenerateOutfits, err));
            }
        }
    }

    #[must_use]
    pub fn status(&self) -> Status {
        if self.in_flight.is_some() {
            Status::Generating
        } else if self.error.is_some() {
            Status::Failed
        } else if self.generated {
            Status::Generated
        } else if self.selection.is_complete() {
            Status::ReadySelection
        } else if self.selection.is_empty() {
            Status::Empty
        } else {
            Status::PartialSelection
        }
    }

    #[must_use]
    pub fn selection(&self) -> &GarmentSelection {
        &self.selection
    }

    #[must_use]
    pub fn outfits(&self) -> &[OutfitPair] {
        &self.outfits
    }

    #[must_use]
    pub fn error(&self) -> Option<&WorkflowError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn is_generating(&self) -> bool {
        self.in_flight.is_some()
    }
}

/// Process an outfit message and return the effect for the parent.
pub fn update(state: &mut State, message: Message) -> Effect {
    match message {
        Message::ToggleTop(id) => {
            state.toggle_top(id);
            Effect::None
        }
        Message::ToggleBottom(id) => {
            state.toggle_bottom(id);
            Effect::None
        }
        Message::Generate => state.generate(),
        Message::GenerationCompleted { request, result } => {
            state.complete_generation(request, result);
            Effect::None
        }
    }
}

/// Contextual data needed to render the outfit section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Render the outfit section.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let state = ctx.state;
    let generating = state.is_generating();

    let tops = build_picker(
        ctx.i18n.tr("outfits-select-tops"),
        &state.available_tops,
        state.selection.tops(),
        Message::ToggleTop,
    );
    let bottoms = build_picker(
        ctx.i18n.tr("outfits-select-bottoms"),
        &state.available_bottoms,
        state.selection.bottoms(),
        Message::ToggleBottom,
    );

    let label = if generating {
        ctx.i18n.tr("generating-button")
    } else {
        ctx.i18n.tr("generate-button")
    };
    let generate = button(Text::new(label).size(typography::BODY))
        .style(styles::button::primary)
        .on_press_maybe((!generating).then_some(Message::Generate));

    let mut content = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .push(Text::new(ctx.i18n.tr("outfits-title")).size(typography::TITLE_MD))
        .push(tops)
        .push(bottoms)
        .push(generate);

    if let Some(error) = state.error() {
        content = content.push(error_display::view(ctx.i18n, error));
    }

    // Results stay visible under a later validation message.
    if state.generated {
        content = content.push(build_results(ctx.i18n, state.outfits()));
    }

    Container::new(content)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::section)
        .into()
}

fn build_picker<'a>(
    title: String,
    available: &[GarmentId],
    selected: &std::collections::BTreeSet<GarmentId>,
    on_toggle: fn(GarmentId) -> Message,
) -> Element<'a, Message> {
    let chips = available.iter().fold(
        Row::new().spacing(spacing::XS).align_y(Vertical::Center),
        |row, id| {
            let style = if selected.contains(id) {
                styles::button::selected
            } else {
                styles::button::unselected
            };
            row.push(
                button(Text::new(id.to_string()).size(typography::BODY))
                    .style(style)
                    .on_press(on_toggle(id.clone())),
            )
        },
    );

    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(chips.wrap())
        .into()
}

fn build_results<'a>(i18n: &I18n, outfits: &[OutfitPair]) -> Element<'a, Message> {
    let heading = Text::new(i18n.tr("outfits-heading")).size(typography::TITLE_SM);

    if outfits.is_empty() {
        return Column::new()
            .spacing(spacing::XS)
            .push(heading)
            .push(Text::new(i18n.tr("outfits-empty")).size(typography::BODY))
            .into();
    }

    let top_label = i18n.tr("outfit-top");
    let bottom_label = i18n.tr("outfit-bottom");

    outfits
        .iter()
        .fold(
            Column::new().spacing(spacing::XS).push(heading),
            |column, outfit| {
                column.push(
                    Container::new(Text::new(format!(
                        "{top_label}: {} · {bottom_label}: {}",
                        outfit.top, outfit.bottom
                    )))
                    .padding(spacing::SM)
                    .width(Length::Fill)
                    .style(styles::container::card),
                )
            },
        )
        .into()
}
