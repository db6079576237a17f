//! Aggregate collision metrics.
//!
//! The analytics tooling that consumes these (plotting across many runs) is
//! outside the core; the core's job is to keep cumulative collision counts
//! per vehicle kind and append one row per completed step so the series can
//! be read back after any `step()` call.

use corridor_core::Step;
use corridor_vehicle::VehicleKind;

/// Cumulative collision counts as of the end of `step`.
///
/// A "collision" here is one vehicle newly entering the collided state;
/// a two-vehicle crash therefore counts twice, once per participant's kind.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollisionCounts {
    pub step:         Step,
    pub car:          u64,
    pub taxi:         u64,
    pub drunk_driver: u64,
}

impl CollisionCounts {
    #[inline]
    pub fn total(&self) -> u64 {
        self.car + self.taxi + self.drunk_driver
    }

    #[inline]
    pub fn for_kind(&self, kind: VehicleKind) -> u64 {
        match kind {
            VehicleKind::Car         => self.car,
            VehicleKind::Taxi        => self.taxi,
            VehicleKind::DrunkDriver => self.drunk_driver,
        }
    }
}

/// Running collision totals plus the per-step time series.
#[derive(Default)]
pub struct CollisionLog {
    car:          u64,
    taxi:         u64,
    drunk_driver: u64,
    series:       Vec<CollisionCounts>,
}

impl CollisionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one vehicle of `kind` newly entering the collided state.
    pub fn record(&mut self, kind: VehicleKind) {
        match kind {
            VehicleKind::Car         => self.car += 1,
            VehicleKind::Taxi        => self.taxi += 1,
            VehicleKind::DrunkDriver => self.drunk_driver += 1,
        }
    }

    /// Append the cumulative counts for a just-completed step.
    pub fn snapshot(&mut self, step: Step) {
        self.series.push(CollisionCounts {
            step,
            car:          self.car,
            taxi:         self.taxi,
            drunk_driver: self.drunk_driver,
        });
    }

    /// One row per completed step, in step order.
    pub fn series(&self) -> &[CollisionCounts] {
        &self.series
    }

    /// Current cumulative totals (the last row of the series, or zeros
    /// before the first step completes).
    pub fn totals(&self) -> CollisionCounts {
        self.series.last().copied().unwrap_or_default()
    }
}
