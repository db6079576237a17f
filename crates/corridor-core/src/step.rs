//! Simulation step counter.
//!
//! Time is a monotonically increasing `Step`.  One step is one complete
//! model update: spawn checks, then a single activation of every live
//! vehicle.  There is no wall-clock mapping — the corridor model is purely
//! turn-based, so an integer counter keeps all schedule arithmetic exact.

use std::fmt;

/// An absolute simulation step counter.
///
/// Stored as `u64`; at any realistic step rate a run cannot overflow it.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step(pub u64);

impl Step {
    pub const ZERO: Step = Step(0);

    /// Return the step `n` ticks after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Step {
        Step(self.0 + n)
    }

    /// Steps elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Step) -> u64 {
        self.0 - earlier.0
    }

    /// `true` if this step is a spawn step for a schedule firing every
    /// `interval` steps.  Step 0 is never a spawn step (the counter is
    /// incremented before spawn checks run).
    #[inline]
    pub fn fires_every(self, interval: u64) -> bool {
        self.0 > 0 && self.0 % interval == 0
    }
}

impl std::ops::Add<u64> for Step {
    type Output = Step;
    #[inline]
    fn add(self, rhs: u64) -> Step {
        Step(self.0 + rhs)
    }
}

impl std::ops::Sub for Step {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Step) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}
