// SPDX-License-Identifier: MPL-2.0
//! Garment identifiers, garment selections and generated outfit pairs.

use std::collections::BTreeSet;
use std::fmt;

// =============================================================================
// GarmentId
// =============================================================================

/// Opaque identifier of a garment in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GarmentId(String);

impl GarmentId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GarmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GarmentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for GarmentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Which half of an outfit a garment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GarmentKind {
    Top,
    Bottom,
}

// =============================================================================
// GarmentSelection
// =============================================================================

/// The user's chosen tops and bottoms.
///
/// Both halves are sets: membership is unique and order is irrelevant. They
/// only change through [`GarmentSelection::toggle`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GarmentSelection {
    tops: BTreeSet<GarmentId>,
    bottoms: BTreeSet<GarmentId>,
}

impl GarmentSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` to the set of `kind` if absent, removes it otherwise.
    pub fn toggle(&mut self, kind: GarmentKind, id: GarmentId) {
        let set = match kind {
            GarmentKind::Top => &mut self.tops,
            GarmentKind::Bottom => &mut self.bottoms,
        };
        if !set.remove(&id) {
            set.insert(id);
        }
    }

    #[must_use]
    pub fn contains(&self, kind: GarmentKind, id: &GarmentId) -> bool {
        match kind {
            GarmentKind::Top => self.tops.contains(id),
            GarmentKind::Bottom => self.bottoms.contains(id),
        }
    }

    #[must_use]
    pub fn tops(&self) -> &BTreeSet<GarmentId> {
        &self.tops
    }

    #[must_use]
    pub fn bottoms(&self) -> &BTreeSet<GarmentId> {
        &self.bottoms
    }

    /// Returns `true` when nothing is selected on either side.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tops.is_empty() && self.bottoms.is_empty()
    }

    /// Returns `true` when at least one top and one bottom are selected.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.tops.is_empty() && !self.bottoms.is_empty()
    }
}

// =============================================================================
// OutfitPair
// =============================================================================

/// One generated top/bottom combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutfitPair {
    pub top: GarmentId,
    pub bottom: GarmentId,
}
