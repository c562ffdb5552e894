// SPDX-License-Identifier: MPL-2.0
//! Rendering of the analysis workflow.

use super::{Message, State, Thumbnail};
use crate::application::port::StyleService;
use crate::domain::analysis::{AnalysisResult, RecommendationItem};
use crate::i18n::fluent::I18n;
use crate::ui::components::{error_display, swatch};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    font::Weight,
    widget::{button, image, Column, Container, Row, Text},
    Element, Font, Length,
};

/// Contextual data needed to render the analysis workflow.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    /// Resolves catalog image addresses for the placeholder text.
    pub service: &'a dyn StyleService,
}

/// Render the analysis workflow.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("analysis-title")).size(typography::TITLE_MD);

    let mut content = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .push(title)
        .push(build_controls(&ctx))
        .push(build_selection(&ctx));

    if let Some(error) = ctx.state.error() {
        content = content.push(error_display::view(ctx.i18n, error));
    }

    if let Some(report) = ctx.state.report() {
        content = content
            .push(build_analysis(ctx.i18n, &report.analysis))
            .push(build_recommendations(&ctx, &report.recommendations));
    }

    Container::new(content)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::section)
        .into()
}

fn build_controls<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let analyzing = ctx.state.is_analyzing();

    let choose = button(Text::new(ctx.i18n.tr("choose-image-button")).size(typography::BODY))
        .style(styles::button::unselected)
        .on_press(Message::PickFile);

    let analyze_label = if analyzing {
        ctx.i18n.tr("analyzing-button")
    } else {
        ctx.i18n.tr("analyze-button")
    };
    // Stays enabled without a file so the validation message can be shown.
    let analyze = button(Text::new(analyze_label).size(typography::BODY))
        .style(styles::button::primary)
        .on_press_maybe((!analyzing).then_some(Message::Analyze));

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(choose);

    if ctx.state.selection().is_some() {
        row = row.push(
            button(Text::new(ctx.i18n.tr("clear-image-button")).size(typography::BODY))
                .style(styles::button::unselected)
                .on_press(Message::ClearSelection),
        );
    }

    row.push(analyze).into()
}

fn build_selection<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let Some(file) = ctx.state.selection() else {
        return Text::new(ctx.i18n.tr("analysis-no-file"))
            .size(typography::BODY)
            .into();
    };

    let mut column = Column::new().spacing(spacing::XS);

    if let Some(preview) = ctx.state.preview() {
        column = column.push(
            image(preview.handle().clone()).height(Length::Fixed(sizing::PREVIEW_HEIGHT)),
        );
    }

    let mut caption = file.name().to_string();
    if let Some((width, height)) = ctx.state.preview().and_then(|p| p.dimensions()) {
        let (width, height) = (width.to_string(), height.to_string());
        let dimensions = ctx.i18n.tr_with_args(
            "analysis-preview-dimensions",
            &[("width", width.as_str()), ("height", height.as_str())],
        );
        caption = format!("{caption} · {dimensions}");
    }

    column
        .push(Text::new(caption).size(typography::CAPTION))
        .into()
}

fn build_analysis<'a>(i18n: &I18n, analysis: &AnalysisResult) -> Element<'a, Message> {
    let palette = analysis
        .colors
        .iter()
        .fold(Row::new().spacing(spacing::SM), |row, code| {
            row.push(swatch::view(code))
        });

    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(i18n.tr("analysis-heading")).size(typography::TITLE_SM))
        .push(build_field(i18n.tr("analysis-caption"), &analysis.caption))
        .push(build_field(i18n.tr("analysis-season"), &analysis.season))
        .push(build_field(
            i18n.tr("analysis-aesthetic-category"),
            &analysis.aesthetic_category,
        ))
        .push(build_field(
            i18n.tr("analysis-aesthetic-vibe"),
            &analysis.aesthetic_vibe,
        ))
        .push(build_field(
            i18n.tr("analysis-display-name"),
            &analysis.display_name,
        ))
        .push(bold(format!("{}:", i18n.tr("analysis-color-palette"))))
        .push(palette.wrap())
        .into()
}

fn build_recommendations<'a>(
    ctx: &ViewContext<'a>,
    items: &[RecommendationItem],
) -> Element<'a, Message> {
    let heading = Text::new(ctx.i18n.tr("recommendations-heading")).size(typography::TITLE_SM);

    if items.is_empty() {
        return Column::new()
            .spacing(spacing::XS)
            .push(heading)
            .push(Text::new(ctx.i18n.tr("recommendations-empty")).size(typography::BODY))
            .into();
    }

    // Service rank order, never re-sorted.
    let cards = items.iter().fold(Row::new().spacing(spacing::MD), |row, item| {
        row.push(build_card(ctx, item))
    });

    Column::new()
        .spacing(spacing::SM)
        .push(heading)
        .push(cards.wrap().vertical_spacing(spacing::MD))
        .into()
}

fn build_card<'a>(ctx: &ViewContext<'a>, item: &RecommendationItem) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match ctx.state.thumbnail(&item.id) {
        Some(Thumbnail::Ready(handle)) => image(handle.clone())
            .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
            .into(),
        Some(Thumbnail::Loading) => Container::new(Text::new("…").size(typography::TITLE_SM))
            .center_y(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
            .into(),
        Some(Thumbnail::Unavailable) | None => {
            Text::new(ctx.service.catalog_image_url(&item.id))
                .size(typography::CAPTION)
                .into()
        }
    };

    let mut details = Column::new()
        .spacing(spacing::XXS)
        .push(picture)
        .push(build_field(
            ctx.i18n.tr("recommendation-product"),
            &item.product_display_name,
        ))
        .push(build_field(
            ctx.i18n.tr("recommendation-base-colour"),
            &item.base_colour,
        ))
        .push(build_field(ctx.i18n.tr("recommendation-season"), &item.season));

    if !item.aesthetic_category.is_empty() {
        details = details.push(build_field(
            ctx.i18n.tr("recommendation-aesthetic-category"),
            &item.aesthetic_category,
        ));
    }

    details = details.push(build_field(
        ctx.i18n.tr("recommendation-similarity"),
        &item.similarity.to_string(),
    ));

    Container::new(details)
        .padding(spacing::SM)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .style(styles::container::card)
        .into()
}

/// "Label: value" line.
fn build_field<'a>(label: String, value: &str) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XXS)
        .push(bold(format!("{label}:")))
        .push(Text::new(value.to_string()).size(typography::BODY))
        .into()
}

fn bold<'a>(content: String) -> Text<'a> {
    Text::new(content).size(typography::BODY).font(Font {
        weight: Weight::Bold,
        ..Font::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{AnalysisReport, Similarity};
    use crate::domain::upload::SelectedFile;
    use crate::test_utils::FakeStyleService;
    use crate::ui::analysis::Effect;

    #[test]
    fn empty_view_renders() {
        let i18n = I18n::default();
        let state = State::new();
        let service = FakeStyleService::new();
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
            service: &service,
        });
    }

    #[test]
    fn analyzed_view_renders() {
        let i18n = I18n::default();
        let service = FakeStyleService::new();
        let mut state = State::new();
        state.select_file(Some(SelectedFile::new("shirt.png", vec![0])));
        let Effect::Analyze { request, .. } = state.analyze() else {
            panic!("expected Analyze effect");
        };
        state.complete_analysis(
            request,
            Ok(AnalysisReport {
                analysis: AnalysisResult {
                    colors: vec!["#ffffff".to_string(), "navy".to_string()],
                    ..AnalysisResult::default()
                },
                recommendations: vec![RecommendationItem {
                    id: "42".to_string(),
                    similarity: Similarity::new(0.87),
                    ..RecommendationItem::default()
                }],
            }),
        );

        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
            service: &service,
        });
    }
}
