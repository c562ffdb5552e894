// SPDX-License-Identifier: MPL-2.0
//! Local handling of the image chosen for analysis.
//!
//! Reading the file from disk, guessing its MIME type for the upload, and
//! keeping track of the preview handles shown while a file is selected.

pub mod preview;

pub use preview::{PreviewHandle, PreviewRegistry};

use crate::domain::upload::SelectedFile;
use crate::error::{Error, Result};
use std::io::Cursor;
use std::path::Path;

/// Fallback content type when the payload is not a recognised image.
pub const GENERIC_MIME_TYPE: &str = "application/octet-stream";

/// Supported media extensions
pub mod extensions {
    /// Extensions offered by the file picker.
    pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp", "tiff", "tif"];

    /// Checks if a path carries one of the picker extensions.
    #[must_use]
    pub fn is_image_path<P: AsRef<std::path::Path>>(path: P) -> bool {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
    }
}

/// Guesses the MIME type of an image payload from its magic bytes.
#[must_use]
pub fn sniff_mime_type(bytes: &[u8]) -> &'static str {
    image_rs::guess_format(bytes).map_or(GENERIC_MIME_TYPE, |format| format.to_mime_type())
}

/// Reads the pixel dimensions from the image header without decoding it.
///
/// Returns `None` if the payload is not an image the decoder understands.
#[must_use]
pub fn image_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    image_rs::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .ok()?
        .into_dimensions()
        .ok()
}

/// Reads a file from disk into a [`SelectedFile`].
///
/// The file name is the last path component; the payload is read in full.
///
/// # Errors
/// Returns [`Error::Io`] if the file cannot be read.
pub fn load_selected_file<P: AsRef<Path>>(path: P) -> Result<SelectedFile> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .map_err(|e| Error::Io(format!("Failed to read {}: {e}", path.display())))?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    tracing::debug!(file = %name, size = bytes.len(), "loaded file for analysis");
    Ok(SelectedFile::new(name, bytes))
}
