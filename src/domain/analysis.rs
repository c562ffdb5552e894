// SPDX-License-Identifier: MPL-2.0
//! Style analysis output and ranked catalog recommendations.
//!
//! An [`AnalysisReport`] bundles the analysis of one submitted image with the
//! recommendations computed for it. The two halves only ever travel together,
//! so a workflow holding a report can never show one without the other.

use std::fmt;

// =============================================================================
// AnalysisResult
// =============================================================================

/// Structured style analysis for one submitted image.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnalysisResult {
    pub caption: String,
    pub season: String,
    pub aesthetic_category: String,
    pub aesthetic_vibe: String,
    pub display_name: String,
    /// Dominant colors in the order reported by the service (usually `#rrggbb`).
    pub colors: Vec<String>,
}

// =============================================================================
// Similarity
// =============================================================================

/// Similarity score between the submitted image and a catalog entry.
///
/// The service reports a fraction in `[0, 1]`. Values outside that range are
/// clamped to it and `NaN` reads as zero, so the label never exceeds `100.0%`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Similarity(f64);

impl Similarity {
    /// Wraps a similarity fraction, clamped to `[0, 1]`.
    #[must_use]
    pub fn new(fraction: f64) -> Self {
        if fraction.is_nan() {
            return Self(0.0);
        }
        Self(fraction.clamp(0.0, 1.0))
    }

    /// Returns the raw fraction.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the similarity as a percentage (0.87 → 87.0).
    #[must_use]
    pub fn as_percent(self) -> f64 {
        self.0 * 100.0
    }
}

impl fmt::Display for Similarity {
    /// Formats as a percentage with one decimal place, e.g. `87.0%`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.as_percent())
    }
}

// =============================================================================
// RecommendationItem
// =============================================================================

/// A catalog entry ranked by similarity to the analyzed image.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecommendationItem {
    pub id: String,
    pub product_display_name: String,
    pub base_colour: String,
    pub season: String,
    pub aesthetic_category: String,
    pub similarity: Similarity,
}

/// File name under which the catalog serves the image of item `id`.
#[must_use]
pub fn catalog_image_file_name(id: &str) -> String {
    format!("{id}.jpg")
}

// =============================================================================
// AnalysisReport
// =============================================================================

/// A successful analysis: the result and its recommendations, in service rank order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnalysisReport {
    pub analysis: AnalysisResult,
    pub recommendations: Vec<RecommendationItem>,
}

// =============================================================================
// Color codes
// =============================================================================

/// Parses a `#rrggbb` or `#rgb` color code into its RGB components.
///
/// Returns `None` for anything else (named colors, malformed codes).
#[must_use]
pub fn parse_color_code(code: &str) -> Option<(u8, u8, u8)> {
    let hex = code.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        3 => {
            let mut channels = hex
                .chars()
                .map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
            Some((channels.next()??, channels.next()??, channels.next()??))
        }
        _ => None,
    }
}
