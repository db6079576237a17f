//! Collision detection and symmetric marking.
//!
//! Triggered whenever a Car or DrunkDriver attempts to enter a sampled cell
//! (taxi proposals are pre-filtered to unoccupied cells and never arrive
//! here).  On a hit, BOTH vehicles are marked collided in the same step and
//! their recovery counters are armed; the move is aborted by the caller.

use corridor_core::VehicleId;
use corridor_grid::{Cell, Grid};
use corridor_vehicle::Vehicle;

/// What a detected collision looked like.
#[derive(Copy, Clone, Debug)]
pub struct CollisionOutcome {
    /// The vehicle already occupying the contested cell.
    pub other: VehicleId,
    /// `true` if `other` was already immobilized when struck.  Its counter
    /// is re-armed either way, but an already-collided occupant is not a
    /// new collision event for the metrics.
    pub other_was_collided: bool,
}

/// Inspect `dest` and, if any vehicle other than the mover occupies it,
/// mark both vehicles collided.
///
/// Returns `None` (clear — the move may proceed) when no such occupant
/// exists.  With multiple occupants only the first found is marked, in the
/// cell's unspecified occupant order.
pub fn detect_and_mark(
    grid:     &Grid,
    vehicles: &mut [Vehicle],
    mover:    usize,
    dest:     Cell,
) -> Option<CollisionOutcome> {
    let mover_id = vehicles[mover].id;
    let other = grid.contents(dest).iter().copied().find(|&o| o != mover_id)?;

    let other_was_collided = vehicles[other.index()].collided;
    vehicles[mover].mark_collided();
    vehicles[other.index()].mark_collided();

    Some(CollisionOutcome { other, other_was_collided })
}
