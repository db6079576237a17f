//! The closed set of vehicle variants.

use std::fmt;

/// Which movement policy and recovery rules a vehicle uses.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VehicleKind {
    /// Ordinary car: strongly forward-biased, avoids the car ahead.
    Car,
    /// Taxi: confined to one lane, moves deterministically forward, and
    /// periodically stops to pick up passengers.
    Taxi,
    /// Impaired driver: weakly forward-biased and blind to the car ahead.
    DrunkDriver,
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleKind::Car         => write!(f, "car"),
            VehicleKind::Taxi        => write!(f, "taxi"),
            VehicleKind::DrunkDriver => write!(f, "drunk_driver"),
        }
    }
}
