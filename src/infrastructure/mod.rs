// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`http`]: Style service over HTTP (implements [`StyleService`])
//!
//! [`StyleService`]: crate::application::port::StyleService

pub mod http;

pub use http::{Endpoints, HttpStyleService};
