//! Per-kind movement decision logic.
//!
//! Car and DrunkDriver weight three candidate cells — forward, forward-left,
//! forward-right — and sample one with [`SimRng::weighted_choice`].  Taxi is
//! deterministic.  A sampled cell that turns out to be sidewalk, or a weight
//! vector that collapses to all zeros, means the vehicle stays put this
//! step; a rejected sample is a no-op, never a retry.

use corridor_core::SimRng;
use corridor_grid::{Cell, Grid, StreetBounds};

use crate::{Vehicle, VehicleKind};

/// Probability per step that an idle taxi stops to pick up a passenger.
const PICKUP_CHANCE: f64 = 0.1;
/// Pickup wait duration bounds, in steps (inclusive).
const PICKUP_WAIT_MIN: u32 = 5;
const PICKUP_WAIT_MAX: u32 = 10;

/// Read-only view of the world passed to the movement policy.
pub struct MoveContext<'a> {
    pub grid:   &'a Grid,
    pub bounds: &'a StreetBounds,
}

/// Pre-movement bookkeeping for one activation.
///
/// Returns `true` if the vehicle may attempt a move this step.  Handles the
/// two states that suppress movement entirely:
///
/// - `Collided`: only the recovery counter advances.
/// - Taxi pickup: a positive `wait_time` counts down; at zero there is a
///   [`PICKUP_CHANCE`] roll to start a new wait of uniform
///   [`PICKUP_WAIT_MIN`]..=[`PICKUP_WAIT_MAX`] steps *instead of* moving.
pub fn tick_pre_move(v: &mut Vehicle, rng: &mut SimRng) -> bool {
    if v.collided {
        v.advance_recovery();
        return false;
    }
    if v.kind == VehicleKind::Taxi {
        if v.wait_time > 0 {
            v.wait_time -= 1;
            return false;
        }
        if rng.gen_bool(PICKUP_CHANCE) {
            v.wait_time = rng.gen_range(PICKUP_WAIT_MIN..=PICKUP_WAIT_MAX);
            return false;
        }
    }
    true
}

/// Compute the candidate destination for this step, or `None` to stay put.
///
/// The returned cell is guaranteed not to be sidewalk.  It may be occupied —
/// collision detection and resolution happen in the simulation loop, which
/// aborts the move and marks both vehicles if the cell holds another
/// vehicle.  (Taxi is the exception: its proposal is pre-filtered to
/// unoccupied cells, so taxi moves never trigger the collision resolver.)
pub fn propose_move(v: &Vehicle, ctx: &MoveContext<'_>, rng: &mut SimRng) -> Option<Cell> {
    match v.kind {
        VehicleKind::Car         => propose_car(v, ctx, rng),
        VehicleKind::Taxi        => propose_taxi(v, ctx),
        VehicleKind::DrunkDriver => propose_drunk_driver(v, ctx, rng),
    }
}

/// Car: base weights (0.9, 0.05, 0.05).  A blocked or sidewalk forward cell
/// shifts all weight to the sides — (0, 0.5, 0.5) when forward is merely
/// occupied, (0, 1, 1) when it is sidewalk — and a sidewalk side is zeroed.
fn propose_car(v: &Vehicle, ctx: &MoveContext<'_>, rng: &mut SimRng) -> Option<Cell> {
    let forward = ctx.grid.neighbor(v.cell, 0, 1);
    let left    = ctx.grid.neighbor(v.cell, -1, 1);
    let right   = ctx.grid.neighbor(v.cell, 1, 1);

    let forward_sidewalk = ctx.bounds.is_sidewalk(forward.x);
    let car_ahead = ctx.grid.contents(forward).iter().any(|&o| o != v.id);

    let mut weights = [0.9, 0.05, 0.05];
    if car_ahead || forward_sidewalk {
        weights = if forward_sidewalk { [0.0, 1.0, 1.0] } else { [0.0, 0.5, 0.5] };
        if ctx.bounds.is_sidewalk(left.x) {
            weights[1] = 0.0;
        }
        if ctx.bounds.is_sidewalk(right.x) {
            weights[2] = 0.0;
        }
    }

    let dest = [forward, left, right][rng.weighted_choice(&weights)?];
    if ctx.bounds.is_sidewalk(dest.x) {
        return None;
    }
    Some(dest)
}

/// Taxi: always targets `(lane, y+1)`; moves only if that exact cell holds
/// no vehicle.
fn propose_taxi(v: &Vehicle, ctx: &MoveContext<'_>) -> Option<Cell> {
    let lane = v.lane.unwrap_or(v.cell.x);
    let dest = ctx.grid.wrap(lane as i64, v.cell.y as i64 + 1);
    if ctx.grid.is_occupied(dest) {
        return None;
    }
    Some(dest)
}

/// DrunkDriver: base weights (0.5, 0.25, 0.25) with no forward-occupancy
/// check — the impaired driver does not avoid the car ahead.
///
/// A lateral whose column is sidewalk is redefined to the forward cell AND
/// its weight is zeroed.  The redefined candidate can therefore never be
/// sampled; when boxed in by sidewalk on both sides only forward remains.
/// This collapse-but-zero combination is intentional behavior, not an
/// oversight.  See the design ledger before changing it.
fn propose_drunk_driver(v: &Vehicle, ctx: &MoveContext<'_>, rng: &mut SimRng) -> Option<Cell> {
    let forward = ctx.grid.neighbor(v.cell, 0, 1);

    let left_is_sidewalk  = ctx.bounds.is_sidewalk(ctx.grid.neighbor(v.cell, -1, 0).x);
    let right_is_sidewalk = ctx.bounds.is_sidewalk(ctx.grid.neighbor(v.cell, 1, 0).x);

    let left = if left_is_sidewalk {
        forward
    } else {
        ctx.grid.neighbor(v.cell, -1, 1)
    };
    let right = if right_is_sidewalk {
        forward
    } else {
        ctx.grid.neighbor(v.cell, 1, 1)
    };

    let mut weights = [0.5, 0.25, 0.25];
    if left_is_sidewalk {
        weights[1] = 0.0;
    }
    if right_is_sidewalk {
        weights[2] = 0.0;
    }

    let dest = [forward, left, right][rng.weighted_choice(&weights)?];
    if ctx.bounds.is_sidewalk(dest.x) {
        return None;
    }
    Some(dest)
}
