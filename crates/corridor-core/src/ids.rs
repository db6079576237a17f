//! Strongly typed vehicle identifier.
//!
//! `VehicleId` is `Copy + Ord + Hash` so it can be used as a map key and a
//! sorted-collection element without ceremony.  The inner integer is `pub` to
//! allow direct indexing into the world's vehicle arena via `id.0 as usize`,
//! but callers should prefer the `.index()` helper for clarity.
//!
//! IDs are assigned by a monotonically increasing counter owned by the
//! `World` instance — never a process-wide global — and are never reused
//! within a run (vehicles are never destroyed).

use std::fmt;

/// Index of a vehicle in the world's vehicle arena.  Max ~4.3 billion vehicles.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleId(pub u32);

impl VehicleId {
    /// Sentinel meaning "no valid ID" — equivalent to `u32::MAX`.
    pub const INVALID: VehicleId = VehicleId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for VehicleId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VehicleId({})", self.0)
    }
}

impl From<VehicleId> for usize {
    #[inline(always)]
    fn from(id: VehicleId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for VehicleId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<VehicleId, Self::Error> {
        u32::try_from(n).map(VehicleId)
    }
}
