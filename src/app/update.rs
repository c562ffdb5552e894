// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Component `update` functions only mutate their own state and describe the
//! work they need as an effect. The handlers here turn those effects into
//! `Task`s against the injected style service, the file system and the
//! native file dialog.

use super::Message;
use crate::application::port::StyleService;
use crate::i18n::fluent::I18n;
use crate::media;
use crate::ui::{analysis, moodboards, outfits};
use iced::Task;
use std::path::PathBuf;
use std::sync::Arc;

/// Mutable view over the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub service: &'a Arc<dyn StyleService>,
    pub analysis: &'a mut analysis::State,
    pub outfits: &'a mut outfits::State,
    pub moodboards: &'a mut moodboards::State,
}

/// Handles messages for the analysis workflow.
pub fn handle_analysis_message(
    ctx: &mut UpdateContext<'_>,
    message: analysis::Message,
) -> Task<Message> {
    let effect = analysis::update(ctx.analysis, message);
    run_analysis_effect(ctx.i18n, ctx.service, effect)
}

/// Handles messages for the outfit workflow.
pub fn handle_outfits_message(
    ctx: &mut UpdateContext<'_>,
    message: outfits::Message,
) -> Task<Message> {
    match outfits::update(ctx.outfits, message) {
        outfits::Effect::None => Task::none(),
        outfits::Effect::Generate {
            request,
            tops,
            bottoms,
        } => Task::perform(ctx.service.generate_outfits(tops, bottoms), move |result| {
            Message::Outfits(outfits::Message::GenerationCompleted { request, result })
        }),
    }
}

/// Handles messages for the moodboard browser.
pub fn handle_moodboards_message(
    ctx: &mut UpdateContext<'_>,
    message: moodboards::Message,
) -> Task<Message> {
    moodboards::update(ctx.moodboards, message);
    Task::none()
}

/// Turns an analysis effect into a task.
pub fn run_analysis_effect(
    i18n: &I18n,
    service: &Arc<dyn StyleService>,
    effect: analysis::Effect,
) -> Task<Message> {
    match effect {
        analysis::Effect::None => Task::none(),
        analysis::Effect::OpenFileDialog => {
            handle_open_file_dialog(i18n.tr("image-file-dialog-filter"))
        }
        analysis::Effect::LoadFile { request, path } => load_file(request, path),
        analysis::Effect::Analyze { request, file } => {
            Task::perform(service.analyze(file), move |result| {
                Message::Analysis(analysis::Message::AnalysisCompleted { request, result })
            })
        }
        analysis::Effect::FetchThumbnails { request, ids } => {
            Task::batch(ids.into_iter().map(|id| {
                Task::perform(service.fetch_catalog_image(id.clone()), move |result| {
                    Message::Analysis(analysis::Message::ThumbnailLoaded {
                        request,
                        id,
                        result,
                    })
                })
            }))
        }
    }
}

/// Opens the native file picker filtered to images.
pub fn handle_open_file_dialog(filter_label: String) -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter(filter_label, media::extensions::IMAGE_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        |path| Message::Analysis(analysis::Message::FilePicked(path)),
    )
}

/// Reads `path` off the UI thread.
fn load_file(request: crate::domain::request::RequestId, path: PathBuf) -> Task<Message> {
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || media::load_selected_file(&path))
                .await
                .map_err(|e| e.to_string())
                .and_then(|result| result.map_err(|e| e.to_string()))
        },
        move |result| Message::Analysis(analysis::Message::FileLoaded { request, result }),
    )
}
