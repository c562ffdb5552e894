// SPDX-License-Identifier: MPL-2.0
//! Image analysis workflow.
//!
//! The user chooses an image, sees a preview, submits it to the style service
//! and gets back a style analysis with ranked catalog recommendations.
//!
//! This module follows the "state down, messages up" pattern: [`update`]
//! mutates [`State`] and returns an [`Effect`] that the parent application
//! turns into a task. Completions carry the [`RequestId`] they were issued
//! with; anything that does not match the current request is dropped.

mod messages;
mod view;

pub use messages::{Effect, Message};
pub use view::{view, ViewContext};

use crate::application::port::ServiceResult;
use crate::domain::analysis::AnalysisReport;
use crate::domain::request::RequestId;
use crate::domain::upload::SelectedFile;
use crate::error::{RemoteAction, ValidationError, WorkflowError};
use crate::media::{self, PreviewHandle, PreviewRegistry};
use iced::widget::image;
use std::collections::HashMap;
use std::path::PathBuf;

/// Observable phase of the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// No file selected.
    Idle,
    /// File and preview present, nothing analyzed yet.
    FileChosen,
    /// Analysis request in flight.
    Analyzing,
    /// Analysis and recommendations shown.
    Analyzed,
    /// Error shown. A previously selected file is kept.
    Failed,
}

/// Catalog image of one recommendation.
#[derive(Debug, Clone)]
pub enum Thumbnail {
    Loading,
    Ready(image::Handle),
    /// Fetch failed; the view falls back to showing the address.
    Unavailable,
}

/// Local state of the analysis workflow.
#[derive(Debug, Default)]
pub struct State {
    selection: Option<SelectedFile>,
    preview: Option<PreviewHandle>,
    /// Analysis and recommendations travel together in one report.
    report: Option<AnalysisReport>,
    thumbnails: HashMap<String, Thumbnail>,
    error: Option<WorkflowError>,
    /// Request the current report was produced by.
    report_request: Option<RequestId>,
    in_flight: Option<RequestId>,
    /// The in-flight request belongs to a selection that has since changed.
    superseded: bool,
    pending_load: Option<RequestId>,
    last_request: RequestId,
    previews: PreviewRegistry,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state whose previews are counted by `previews`.
    #[must_use]
    pub fn with_registry(previews: PreviewRegistry) -> Self {
        Self {
            previews,
            ..Self::default()
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Operations
    // ─────────────────────────────────────────────────────────────────────

    /// Selects `file` for analysis, or clears the selection with `None`.
    ///
    /// Any previous analysis, recommendations, error and preview are
    /// discarded; the old preview is released before the new one is created.
    /// A request still in flight stays in flight until it completes, so no
    /// second analysis can start, but its result is discarded.
    pub fn select_file(&mut self, file: Option<SelectedFile>) {
        self.preview = None;
        self.clear_report();
        self.error = None;
        self.pending_load = None;
        if let Some(request) = self.in_flight {
            self.superseded = true;
            tracing::debug!(request = request.value(), "analysis superseded by new selection");
        }

        match file {
            Some(file) => {
                self.preview = Some(self.previews.create(&file));
                self.selection = Some(file);
            }
            None => self.selection = None,
        }
    }

    /// Starts analyzing the selected file.
    ///
    /// Without a selection this records [`ValidationError::NoFileSelected`]
    /// and issues nothing. While a request is already in flight it is a no-op.
    pub fn analyze(&mut self) -> Effect {
        if self.in_flight.is_some() {
            return Effect::None;
        }

        let Some(file) = self.selection.clone() else {
            self.error = Some(ValidationError::NoFileSelected.into());
            return Effect::None;
        };

        self.clear_report();
        self.error = None;
        let request = self.next_request();
        self.in_flight = Some(request);
        tracing::debug!(request = request.value(), file = file.name(), "analysis requested");

        Effect::Analyze { request, file }
    }

    /// Applies the outcome of analysis `request`.
    pub fn complete_analysis(
        &mut self,
        request: RequestId,
        result: ServiceResult<AnalysisReport>,
    ) -> Effect {
        if self.in_flight != Some(request) {
            tracing::debug!(request = request.value(), "dropping stale analysis result");
            return Effect::None;
        }
        self.in_flight = None;

        if std::mem::take(&mut self.superseded) {
            tracing::debug!(request = request.value(), "dropping superseded analysis result");
            return Effect::None;
        }

        match result {
            Ok(report) => {
                let ids: Vec<String> = report
                    .recommendations
                    .iter()
                    .map(|item| item.id.clone())
                    .collect();
                self.thumbnails = ids
                    .iter()
                    .map(|id| (id.clone(), Thumbnail::Loading))
                    .collect();
                self.report = Some(report);
                self.report_request = Some(request);

                if ids.is_empty() {
                    Effect::None
                } else {
                    Effect::FetchThumbnails { request, ids }
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "analysis failed");
                self.error = Some(WorkflowError::RemoteCall(RemoteAction::Analyze, err));
                Effect::None
            }
        }
    }

    /// Releases the preview. Called when the owning window goes away.
    pub fn release(&mut self) {
        self.preview = None;
    }

    // ─────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────

    #[must_use]
    pub fn status(&self) -> Status {
        if self.in_flight.is_some() {
            Status::Analyzing
        } else if self.report.is_some() {
            Status::Analyzed
        } else if self.error.is_some() {
            Status::Failed
        } else if self.selection.is_some() {
            Status::FileChosen
        } else {
            Status::Idle
        }
    }

    #[must_use]
    pub fn is_analyzing(&self) -> bool {
        self.in_flight.is_some()
    }

    #[must_use]
    pub fn selection(&self) -> Option<&SelectedFile> {
        self.selection.as_ref()
    }

    #[must_use]
    pub fn preview(&self) -> Option<&PreviewHandle> {
        self.preview.as_ref()
    }

    #[must_use]
    pub fn report(&self) -> Option<&AnalysisReport> {
        self.report.as_ref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&WorkflowError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn thumbnail(&self, id: &str) -> Option<&Thumbnail> {
        self.thumbnails.get(id)
    }

    /// Registry counting the previews this workflow created.
    #[must_use]
    pub fn previews(&self) -> &PreviewRegistry {
        &self.previews
    }

    // ─────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────

    fn next_request(&mut self) -> RequestId {
        self.last_request = self.last_request.next();
        self.last_request
    }

    fn clear_report(&mut self) {
        self.report = None;
        self.report_request = None;
        self.thumbnails.clear();
    }

    fn request_load(&mut self, path: PathBuf) -> Effect {
        let request = self.next_request();
        self.pending_load = Some(request);
        Effect::LoadFile { request, path }
    }

    fn complete_load(&mut self, request: RequestId, result: Result<SelectedFile, String>) {
        if self.pending_load != Some(request) {
            tracing::debug!(request = request.value(), "dropping stale file load");
            return;
        }

        match result {
            Ok(file) => self.select_file(Some(file)),
            Err(reason) => {
                tracing::warn!(%reason, "selected file could not be read");
                self.select_file(None);
                self.error = Some(ValidationError::UnreadableFile.into());
            }
        }
    }

    fn complete_thumbnail(&mut self, request: RequestId, id: String, result: ServiceResult<Vec<u8>>) {
        if self.report_request != Some(request) {
            return;
        }

        let thumbnail = match result {
            Ok(bytes) => Thumbnail::Ready(image::Handle::from_bytes(bytes)),
            Err(_) => Thumbnail::Unavailable,
        };
        self.thumbnails.insert(id, thumbnail);
    }
}

/// Process an analysis message and return the effect for the parent.
pub fn update(state: &mut State, message: Message) -> Effect {
    match message {
        Message::PickFile => Effect::OpenFileDialog,
        Message::FilePicked(None) | Message::ClearSelection => {
            state.select_file(None);
            Effect::None
        }
        Message::FileDropped(path) if !media::extensions::is_image_path(&path) => {
            tracing::debug!(path = %path.display(), "ignoring dropped non-image file");
            Effect::None
        }
        Message::FilePicked(Some(path)) | Message::FileDropped(path) => state.request_load(path),
        Message::FileLoaded { request, result } => {
            state.complete_load(request, result);
            Effect::None
        }
        Message::Analyze => state.analyze(),
        Message::AnalysisCompleted { request, result } => state.complete_analysis(request, result),
        Message::ThumbnailLoaded {
            request,
            id,
            result,
        } => {
            state.complete_thumbnail(request, id, result);
            Effect::None
        }
    }
}
