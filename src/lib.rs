// SPDX-License-Identifier: MPL-2.0
//! `style_spark` is a desktop client for a remote style analysis service,
//! built with the Iced GUI framework.
//!
//! It uploads a garment photo for analysis and catalog recommendations,
//! generates outfit combinations from picked tops and bottoms, and browses a
//! fixed set of curated moodboards. Text is localized with Fluent.

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod media;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
