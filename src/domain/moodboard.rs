// SPDX-License-Identifier: MPL-2.0
//! The curated moodboard catalog.
//!
//! Moodboards are fixed at compile time. Image references are file names
//! relative to the configured moodboard artwork directory.

use std::fmt;

/// Identifier of a moodboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MoodboardId(u32);

impl MoodboardId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for MoodboardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A curated style theme with an illustrative image and linked example outfits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Moodboard {
    pub id: MoodboardId,
    pub image: &'static str,
    pub description: &'static str,
    /// Example outfit images, in display order.
    pub recommendation_images: &'static [&'static str],
}

/// All moodboards, in display order.
pub const MOODBOARDS: [Moodboard; 3] = [
    Moodboard {
        id: MoodboardId::new(1),
        image: "moodboard1.jpg",
        description: "Effortless sophistication with a neutral palette for the modern chic woman.",
        recommendation_images: &["reco1-1.jpg", "reco1-2.jpg", "reco1-3.jpg", "reco1-4.jpg"],
    },
    Moodboard {
        id: MoodboardId::new(2),
        image: "moodboard2.jpg",
        description: "Playful charm meets sunny optimism in a soft, casual denim look.",
        recommendation_images: &["reco2-1.jpg", "reco2-2.jpg", "reco2-3.jpg", "reco2-4.jpg"],
    },
    Moodboard {
        id: MoodboardId::new(3),
        image: "moodboard3.jpg",
        description: "A relaxed, preppy ensemble with utilitarian flair and coastal vibes.",
        recommendation_images: &["reco3-1.jpg", "reco3-2.jpg", "reco3-3.jpg", "reco3-4.jpg"],
    },
];
