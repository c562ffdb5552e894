// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Sections
//!
//! - [`analysis`] - Image selection, preview, analysis and recommendations
//! - [`outfits`] - Garment selection and outfit generation
//! - [`moodboards`] - Curated moodboards with expandable galleries
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (error banner, color swatch)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod analysis;
pub mod components;
pub mod design_tokens;
pub mod moodboards;
pub mod outfits;
pub mod styles;
pub mod theming;
