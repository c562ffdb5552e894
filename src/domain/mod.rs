// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects. It depends only on
//! `std` so that the workflows built on top of it stay testable without a
//! renderer or a network.
//!
//! # Modules
//!
//! - [`analysis`]: Style analysis output ([`AnalysisResult`](analysis::AnalysisResult),
//!   [`RecommendationItem`](analysis::RecommendationItem), [`Similarity`](analysis::Similarity))
//! - [`outfit`]: Garment identifiers and generated pairs ([`GarmentId`](outfit::GarmentId),
//!   [`OutfitPair`](outfit::OutfitPair))
//! - [`moodboard`]: The static moodboard catalog ([`Moodboard`](moodboard::Moodboard))
//! - [`request`]: Correlation ids for asynchronous calls ([`RequestId`](request::RequestId))
//! - [`upload`]: The image chosen for analysis ([`SelectedFile`](upload::SelectedFile))

pub mod analysis;
pub mod moodboard;
pub mod outfit;
pub mod request;
pub mod upload;
