//! Vehicle state and the collision-recovery state machine.

use corridor_core::VehicleId;
use corridor_grid::Cell;

use crate::VehicleKind;

/// How long a collided vehicle stays immobilized, in steps.
pub const RECOVERY_TICKS: i32 = 60;

/// One vehicle agent.
///
/// Vehicles are created at world initialization or by the spawner and are
/// never destroyed during a run.  `cell` is a cached copy of the position;
/// the grid's occupancy index is authoritative and the simulation loop keeps
/// the two in sync on every move.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    pub id:   VehicleId,
    pub kind: VehicleKind,

    /// Cached position.  The grid owns the authoritative copy.
    pub cell: Cell,

    /// `true` while immobilized after a collision.
    pub collided: bool,

    /// Recovery tick counter.  Car/Taxi arm it at [`RECOVERY_TICKS`] and
    /// count down to 0; DrunkDriver arms it at 0 and counts up to
    /// [`RECOVERY_TICKS`].  Either way the observable immobilization lasts
    /// exactly [`RECOVERY_TICKS`] steps.
    pub collision_countdown: i32,

    /// Taxi only: the fixed column the taxi is confined to.
    pub lane: Option<u32>,

    /// Taxi only: steps remaining in the current passenger pickup.
    pub wait_time: u32,
}

impl Vehicle {
    /// Create a vehicle of `kind` at `cell`.  Taxis are confined to the
    /// column they spawn in.
    pub fn new(id: VehicleId, kind: VehicleKind, cell: Cell) -> Self {
        let lane = match kind {
            VehicleKind::Taxi => Some(cell.x),
            _                 => None,
        };
        Self {
            id,
            kind,
            cell,
            collided: false,
            collision_countdown: 0,
            lane,
            wait_time: 0,
        }
    }

    /// Enter the `Collided` state and arm the recovery counter.
    ///
    /// Re-marking an already-collided vehicle re-arms its counter to the
    /// start of the recovery window.
    pub fn mark_collided(&mut self) {
        self.collided = true;
        self.collision_countdown = match self.kind {
            VehicleKind::DrunkDriver => 0,
            _                        => RECOVERY_TICKS,
        };
    }

    /// Advance the recovery counter by one step.
    ///
    /// Car/Taxi decrement toward 0; DrunkDriver increments toward
    /// [`RECOVERY_TICKS`].  The counting direction differs but both recover
    /// after exactly [`RECOVERY_TICKS`] steps without a further collision.
    /// A recovered vehicle resumes movement on its next activation.
    pub fn advance_recovery(&mut self) {
        match self.kind {
            VehicleKind::DrunkDriver => {
                self.collision_countdown += 1;
                if self.collision_countdown >= RECOVERY_TICKS {
                    self.collided = false;
                    self.collision_countdown = 0;
                }
            }
            _ => {
                self.collision_countdown -= 1;
                if self.collision_countdown <= 0 {
                    self.collided = false;
                    self.collision_countdown = 0;
                }
            }
        }
    }
}
