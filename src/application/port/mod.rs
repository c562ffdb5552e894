// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the workflows remain
//! independent of the concrete transport.
//!
//! # Available Ports
//!
//! - [`style_service`]: Remote style analysis, outfit generation and catalog images
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no `reqwest` types)
//! - Traits are `Send + Sync` so they can be shared behind an `Arc`
//! - Methods return boxed futures; callers wrap them in Iced's `Task`

pub mod style_service;

// Re-export main types for convenience
pub use style_service::{ServiceError, ServiceResult, StyleService};
