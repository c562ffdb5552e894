// SPDX-License-Identifier: MPL-2.0
//! Analysis workflow message/effect types re-exported by the facade.

use crate::application::port::ServiceResult;
use crate::domain::analysis::AnalysisReport;
use crate::domain::request::RequestId;
use crate::domain::upload::SelectedFile;
use std::path::PathBuf;

/// Messages handled by the analysis workflow.
#[derive(Debug, Clone)]
pub enum Message {
    /// Open the native file picker.
    PickFile,
    /// File picker closed; `None` when the dialog was cancelled.
    FilePicked(Option<PathBuf>),
    /// A file was dropped onto the window.
    FileDropped(PathBuf),
    /// Reading a picked or dropped file finished.
    FileLoaded {
        request: RequestId,
        result: Result<SelectedFile, String>,
    },
    ClearSelection,
    Analyze,
    AnalysisCompleted {
        request: RequestId,
        result: ServiceResult<AnalysisReport>,
    },
    ThumbnailLoaded {
        request: RequestId,
        id: String,
        result: ServiceResult<Vec<u8>>,
    },
}

/// Side effects the parent application must carry out.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    OpenFileDialog,
    /// Read `path` from disk and answer with [`Message::FileLoaded`].
    LoadFile { request: RequestId, path: PathBuf },
    /// Submit `file` to the style service and answer with
    /// [`Message::AnalysisCompleted`].
    Analyze {
        request: RequestId,
        file: SelectedFile,
    },
    /// Fetch the catalog image of each id and answer with
    /// [`Message::ThumbnailLoaded`].
    FetchThumbnails { request: RequestId, ids: Vec<String> },
}
