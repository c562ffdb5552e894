// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared by the workflow sections.
//!
//! - [`error_display`] - Inline error banner for validation and remote failures
//! - [`swatch`] - Color palette swatch with its code

pub mod error_display;
pub mod swatch;
