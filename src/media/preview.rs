// SPDX-License-Identifier: MPL-2.0
//! Preview handles for the selected image.
//!
//! A [`PreviewHandle`] owns the displayable image of the current selection.
//! Each handle is counted by the [`PreviewRegistry`] that issued it until it
//! is dropped, so replacing or clearing a selection provably releases the
//! previous preview.

use crate::domain::upload::SelectedFile;
use iced::widget::image;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Issues preview handles and tracks how many are alive.
#[derive(Debug, Clone, Default)]
pub struct PreviewRegistry {
    live: Arc<AtomicUsize>,
}

impl PreviewRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a preview of `file`.
    #[must_use]
    pub fn create(&self, file: &SelectedFile) -> PreviewHandle {
        let live = self.live.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::trace!(file = file.name(), live, "preview created");

        PreviewHandle {
            handle: image::Handle::from_bytes(file.bytes().to_vec()),
            dimensions: super::image_dimensions(file.bytes()),
            live: Arc::clone(&self.live),
        }
    }

    /// Number of previews that have been created and not yet released.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }
}

/// Displayable preview of a selected file. Released on drop.
pub struct PreviewHandle {
    handle: image::Handle,
    dimensions: Option<(u32, u32)>,
    live: Arc<AtomicUsize>,
}

impl PreviewHandle {
    /// Image handle for the `image` widget.
    #[must_use]
    pub fn handle(&self) -> &image::Handle {
        &self.handle
    }

    /// Pixel dimensions, if the payload is a decodable image.
    #[must_use]
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.dimensions
    }
}

impl fmt::Debug for PreviewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewHandle")
            .field("dimensions", &self.dimensions)
            .finish_non_exhaustive()
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        let previous = self.live.fetch_sub(1, Ordering::SeqCst);
        tracing::trace!(live = previous.saturating_sub(1), "preview released");
    }
}
