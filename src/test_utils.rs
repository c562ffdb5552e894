// SPDX-License-Identifier: MPL-2.0
//! Test helpers shared by the unit tests.
//!
//! [`FakeStyleService`] answers every call with an empty success (catalog
//! images are always missing) and counts the calls it receives, so the
//! application shell can be driven without a network.

use crate::application::port::{ServiceError, ServiceResult, StyleService};
use crate::domain::analysis::AnalysisReport;
use crate::domain::outfit::{GarmentId, OutfitPair};
use crate::domain::upload::SelectedFile;
use futures_util::future::{BoxFuture, FutureExt};
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory [`StyleService`] counting its calls.
#[derive(Debug, Default)]
pub struct FakeStyleService {
    analyze_calls: AtomicUsize,
    generate_calls: AtomicUsize,
    image_calls: AtomicUsize,
}

impl FakeStyleService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn analyze_calls(&self) -> usize {
        self.analyze_calls.load(Ordering::SeqCst)
    }

    pub fn generate_calls(&self) -> usize {
        self.generate_calls.load(Ordering::SeqCst)
    }

    pub fn image_calls(&self) -> usize {
        self.image_calls.load(Ordering::SeqCst)
    }
}

impl StyleService for FakeStyleService {
    fn analyze(&self, _file: SelectedFile) -> BoxFuture<'static, ServiceResult<AnalysisReport>> {
        self.analyze_calls.fetch_add(1, Ordering::SeqCst);
        async { Ok(AnalysisReport::default()) }.boxed()
    }

    fn generate_outfits(
        &self,
        _tops: Vec<GarmentId>,
        _bottoms: Vec<GarmentId>,
    ) -> BoxFuture<'static, ServiceResult<Vec<OutfitPair>>> {
        self.generate_calls.fetch_add(1, Ordering::SeqCst);
        async { Ok(Vec::new()) }.boxed()
    }

    fn fetch_catalog_image(&self, _id: String) -> BoxFuture<'static, ServiceResult<Vec<u8>>> {
        self.image_calls.fetch_add(1, Ordering::SeqCst);
        async { Err(ServiceError::Status(404)) }.boxed()
    }

    fn catalog_image_url(&self, id: &str) -> String {
        format!("http://fake.local/images/{id}.jpg")
    }
}
