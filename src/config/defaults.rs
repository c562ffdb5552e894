// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Service**: Style service address and request timeout
//! - **Outfits**: Garments offered in the outfit picker

// ==========================================================================
// Service Defaults
// ==========================================================================

/// Default base address of the style service.
pub const DEFAULT_SERVICE_BASE_URL: &str = "http://127.0.0.1:5000";

/// Default path, relative to the base address, serving catalog images.
pub const DEFAULT_CATALOG_IMAGE_PATH: &str = "/static/catalog_images/";

/// Default request timeout (in seconds). Analysis runs a vision model
/// server-side, so this is generous.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Minimum request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 600;

// ==========================================================================
// Outfit Picker Defaults
// ==========================================================================

/// Tops offered for selection when the config lists none.
pub const DEFAULT_TOPS: [&str; 3] = ["top1_id", "top2_id", "top3_id"];

/// Bottoms offered for selection when the config lists none.
pub const DEFAULT_BOTTOMS: [&str; 3] = ["bottom1_id", "bottom2_id", "bottom3_id"];
