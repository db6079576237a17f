//! Street/sidewalk lane classification.
//!
//! Classification depends only on the column: a centered band of
//! `lane_count` columns is street, everything outside it is sidewalk.  The
//! classifier is pure and O(1) — every vehicle kind consults it before
//! committing a move, and the spawner uses it to select valid columns.

use std::fmt;

use corridor_core::WorldConfig;

/// What a grid cell is made of.  Fixed for the simulation's lifetime:
/// terrain is laid down once at world initialization and never changes.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainKind {
    Street,
    Sidewalk,
}

impl fmt::Display for TerrainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerrainKind::Street   => write!(f, "street"),
            TerrainKind::Sidewalk => write!(f, "sidewalk"),
        }
    }
}

/// The half-open interval `[start, end)` of street columns.
///
/// Invariant (guaranteed by `WorldConfig::validate`):
/// `0 <= start < end <= grid_width`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StreetBounds {
    /// First street column (inclusive).
    pub start: u32,
    /// One past the last street column (exclusive).
    pub end: u32,
}

impl StreetBounds {
    /// Derive the centered street band from a validated configuration.
    pub fn from_config(config: &WorldConfig) -> Self {
        Self {
            start: config.street_start(),
            end:   config.street_end(),
        }
    }

    /// `true` if column `x` lies outside the street band.
    #[inline]
    pub fn is_sidewalk(&self, x: u32) -> bool {
        x < self.start || x >= self.end
    }

    /// `true` if column `x` lies inside the street band.
    #[inline]
    pub fn is_street(&self, x: u32) -> bool {
        !self.is_sidewalk(x)
    }

    /// Classify column `x`.
    #[inline]
    pub fn classify(&self, x: u32) -> TerrainKind {
        if self.is_sidewalk(x) {
            TerrainKind::Sidewalk
        } else {
            TerrainKind::Street
        }
    }

    /// Iterator over the street columns.
    #[inline]
    pub fn lanes(&self) -> std::ops::Range<u32> {
        self.start..self.end
    }

    /// The two outermost street columns — the taxi spawn lanes.
    /// For a single-lane street both entries are the same column.
    #[inline]
    pub fn boundary_lanes(&self) -> [u32; 2] {
        [self.start, self.end - 1]
    }

    #[inline]
    pub fn lane_count(&self) -> u32 {
        self.end - self.start
    }
}

impl fmt::Display for StreetBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
