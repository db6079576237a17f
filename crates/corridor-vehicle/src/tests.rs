//! Unit tests for vehicle state and movement policy.

use corridor_core::{SimRng, VehicleId};
use corridor_grid::{Cell, Grid, StreetBounds};

use crate::{propose_move, tick_pre_move, MoveContext, Vehicle, VehicleKind, RECOVERY_TICKS};

// 20-wide grid with the street on columns [8, 12), matching the default
// corridor configuration.
fn grid_20() -> Grid {
    Grid::new(20, 20)
}

fn bounds_4_lane() -> StreetBounds {
    StreetBounds { start: 8, end: 12 }
}

#[cfg(test)]
mod state {
    use super::*;

    #[test]
    fn taxi_is_confined_to_spawn_column() {
        let taxi = Vehicle::new(VehicleId(0), VehicleKind::Taxi, Cell::new(8, 0));
        assert_eq!(taxi.lane, Some(8));
        let car = Vehicle::new(VehicleId(1), VehicleKind::Car, Cell::new(9, 0));
        assert_eq!(car.lane, None);
    }

    #[test]
    fn mark_arms_countdown_per_kind() {
        let mut car = Vehicle::new(VehicleId(0), VehicleKind::Car, Cell::new(9, 0));
        car.mark_collided();
        assert!(car.collided);
        assert_eq!(car.collision_countdown, RECOVERY_TICKS);

        let mut taxi = Vehicle::new(VehicleId(1), VehicleKind::Taxi, Cell::new(8, 0));
        taxi.mark_collided();
        assert_eq!(taxi.collision_countdown, RECOVERY_TICKS);

        let mut drunk = Vehicle::new(VehicleId(2), VehicleKind::DrunkDriver, Cell::new(10, 0));
        drunk.mark_collided();
        assert!(drunk.collided);
        assert_eq!(drunk.collision_countdown, 0);
    }

    #[test]
    fn car_recovers_after_exactly_sixty_steps() {
        let mut car = Vehicle::new(VehicleId(0), VehicleKind::Car, Cell::new(9, 0));
        car.mark_collided();
        for i in 1..RECOVERY_TICKS {
            car.advance_recovery();
            assert!(car.collided, "still collided after {i} steps");
            assert!(car.collision_countdown > 0 && car.collision_countdown <= RECOVERY_TICKS);
        }
        car.advance_recovery();
        assert!(!car.collided);
        assert_eq!(car.collision_countdown, 0);
    }

    #[test]
    fn drunk_driver_recovers_after_exactly_sixty_steps() {
        let mut drunk = Vehicle::new(VehicleId(0), VehicleKind::DrunkDriver, Cell::new(10, 0));
        drunk.mark_collided();
        for i in 1..RECOVERY_TICKS {
            drunk.advance_recovery();
            assert!(drunk.collided, "still collided after {i} steps");
            assert!(drunk.collision_countdown >= 0 && drunk.collision_countdown < RECOVERY_TICKS);
        }
        drunk.advance_recovery();
        assert!(!drunk.collided);
        assert_eq!(drunk.collision_countdown, 0);
    }

    #[test]
    fn remark_rearms_the_window() {
        let mut car = Vehicle::new(VehicleId(0), VehicleKind::Car, Cell::new(9, 0));
        car.mark_collided();
        for _ in 0..30 {
            car.advance_recovery();
        }
        assert_eq!(car.collision_countdown, 30);
        car.mark_collided();
        assert_eq!(car.collision_countdown, RECOVERY_TICKS);
    }
}

#[cfg(test)]
mod pre_move {
    use super::*;

    #[test]
    fn collided_vehicle_only_advances_countdown() {
        let mut rng = SimRng::new(0);
        let mut car = Vehicle::new(VehicleId(0), VehicleKind::Car, Cell::new(9, 0));
        car.mark_collided();
        assert!(!tick_pre_move(&mut car, &mut rng));
        assert_eq!(car.collision_countdown, RECOVERY_TICKS - 1);
    }

    #[test]
    fn moving_car_may_move() {
        let mut rng = SimRng::new(0);
        let mut car = Vehicle::new(VehicleId(0), VehicleKind::Car, Cell::new(9, 0));
        for _ in 0..100 {
            assert!(tick_pre_move(&mut car, &mut rng));
        }
    }

    #[test]
    fn waiting_taxi_counts_down_without_moving() {
        let mut rng = SimRng::new(0);
        let mut taxi = Vehicle::new(VehicleId(0), VehicleKind::Taxi, Cell::new(8, 0));
        taxi.wait_time = 3;
        for remaining in (0..3).rev() {
            assert!(!tick_pre_move(&mut taxi, &mut rng));
            assert_eq!(taxi.wait_time, remaining);
        }
    }

    #[test]
    fn pickup_roll_sets_wait_in_bounds() {
        // ~10% of idle-taxi activations should start a 5-10 step wait.
        let mut pickups = 0;
        for seed in 0..400 {
            let mut rng = SimRng::new(seed);
            let mut taxi = Vehicle::new(VehicleId(0), VehicleKind::Taxi, Cell::new(8, 0));
            if !tick_pre_move(&mut taxi, &mut rng) {
                pickups += 1;
                assert!((5..=10).contains(&taxi.wait_time), "wait {}", taxi.wait_time);
            }
        }
        assert!(pickups > 10 && pickups < 100, "pickups: {pickups}");
    }
}

#[cfg(test)]
mod car_policy {
    use super::*;

    #[test]
    fn open_street_moves_one_row_forward() {
        let grid = grid_20();
        let bounds = bounds_4_lane();
        let ctx = MoveContext { grid: &grid, bounds: &bounds };
        let car = Vehicle::new(VehicleId(0), VehicleKind::Car, Cell::new(10, 5));
        let mut rng = SimRng::new(42);
        for _ in 0..500 {
            let dest = propose_move(&car, &ctx, &mut rng).unwrap();
            assert_eq!(dest.y, 6);
            assert!((9..=11).contains(&dest.x));
        }
    }

    #[test]
    fn blocked_forward_with_sidewalk_left_forces_right() {
        let mut grid = grid_20();
        let bounds = StreetBounds { start: 9, end: 11 };
        // Street is [9, 11); mover at the left edge with a car dead ahead.
        grid.place(VehicleId(1), Cell::new(9, 6));
        let ctx = MoveContext { grid: &grid, bounds: &bounds };
        let car = Vehicle::new(VehicleId(0), VehicleKind::Car, Cell::new(9, 5));
        let mut rng = SimRng::new(7);
        for _ in 0..200 {
            assert_eq!(propose_move(&car, &ctx, &mut rng), Some(Cell::new(10, 6)));
        }
    }

    #[test]
    fn boxed_in_car_stays_put() {
        // Single-lane street, car ahead: every weight collapses to zero.
        let mut grid = grid_20();
        let bounds = StreetBounds { start: 9, end: 10 };
        grid.place(VehicleId(1), Cell::new(9, 6));
        let ctx = MoveContext { grid: &grid, bounds: &bounds };
        let car = Vehicle::new(VehicleId(0), VehicleKind::Car, Cell::new(9, 5));
        let mut rng = SimRng::new(7);
        for _ in 0..100 {
            assert_eq!(propose_move(&car, &ctx, &mut rng), None);
        }
    }

    #[test]
    fn sidewalk_sample_is_rejected_not_retried() {
        // At the street edge the lateral toward the sidewalk keeps its 0.05
        // base weight; sampling it must yield a stay-put, never a sidewalk
        // destination.
        let grid = grid_20();
        let bounds = bounds_4_lane();
        let ctx = MoveContext { grid: &grid, bounds: &bounds };
        let car = Vehicle::new(VehicleId(0), VehicleKind::Car, Cell::new(8, 5));
        let mut rng = SimRng::new(11);
        let mut stays = 0;
        for _ in 0..1000 {
            match propose_move(&car, &ctx, &mut rng) {
                None => stays += 1,
                Some(dest) => {
                    assert!(bounds.is_street(dest.x), "proposed sidewalk cell {dest}");
                    assert_eq!(dest.y, 6);
                }
            }
        }
        assert!(stays > 0, "the 0.05 sidewalk sample never fired in 1000 draws");
    }

    #[test]
    fn occupied_lateral_is_still_proposed() {
        // Collision detection lives in the sim loop, not the policy: an
        // occupied side cell remains a valid proposal.
        let mut grid = grid_20();
        let bounds = bounds_4_lane();
        grid.place(VehicleId(1), Cell::new(10, 6)); // forward blocker
        grid.place(VehicleId(2), Cell::new(11, 6)); // occupied right
        let ctx = MoveContext { grid: &grid, bounds: &bounds };
        let car = Vehicle::new(VehicleId(0), VehicleKind::Car, Cell::new(10, 5));
        let mut rng = SimRng::new(3);
        let mut proposed_occupied = false;
        for _ in 0..200 {
            if propose_move(&car, &ctx, &mut rng) == Some(Cell::new(11, 6)) {
                proposed_occupied = true;
                break;
            }
        }
        assert!(proposed_occupied);
    }
}

#[cfg(test)]
mod taxi_policy {
    use super::*;

    #[test]
    fn targets_fixed_lane_forward() {
        let grid = grid_20();
        let bounds = bounds_4_lane();
        let ctx = MoveContext { grid: &grid, bounds: &bounds };
        let taxi = Vehicle::new(VehicleId(0), VehicleKind::Taxi, Cell::new(8, 4));
        let mut rng = SimRng::new(0);
        assert_eq!(propose_move(&taxi, &ctx, &mut rng), Some(Cell::new(8, 5)));
    }

    #[test]
    fn occupied_target_means_stay() {
        let mut grid = grid_20();
        let bounds = bounds_4_lane();
        grid.place(VehicleId(1), Cell::new(8, 5));
        let ctx = MoveContext { grid: &grid, bounds: &bounds };
        let taxi = Vehicle::new(VehicleId(0), VehicleKind::Taxi, Cell::new(8, 4));
        let mut rng = SimRng::new(0);
        assert_eq!(propose_move(&taxi, &ctx, &mut rng), None);
    }

    #[test]
    fn wraps_at_the_top_row() {
        let grid = grid_20();
        let bounds = bounds_4_lane();
        let ctx = MoveContext { grid: &grid, bounds: &bounds };
        let taxi = Vehicle::new(VehicleId(0), VehicleKind::Taxi, Cell::new(11, 19));
        let mut rng = SimRng::new(0);
        assert_eq!(propose_move(&taxi, &ctx, &mut rng), Some(Cell::new(11, 0)));
    }
}

#[cfg(test)]
mod drunk_policy {
    use super::*;

    #[test]
    fn single_lane_always_goes_forward() {
        // Both sides sidewalk: the lateral candidates collapse to the
        // forward cell with zero weight, so forward is the only outcome.
        let grid = grid_20();
        let bounds = StreetBounds { start: 9, end: 10 };
        let ctx = MoveContext { grid: &grid, bounds: &bounds };
        let drunk = Vehicle::new(VehicleId(0), VehicleKind::DrunkDriver, Cell::new(9, 5));
        let mut rng = SimRng::new(5);
        for _ in 0..200 {
            assert_eq!(propose_move(&drunk, &ctx, &mut rng), Some(Cell::new(9, 6)));
        }
    }

    #[test]
    fn street_edge_never_proposes_sidewalk() {
        let grid = grid_20();
        let bounds = bounds_4_lane();
        let ctx = MoveContext { grid: &grid, bounds: &bounds };
        let drunk = Vehicle::new(VehicleId(0), VehicleKind::DrunkDriver, Cell::new(8, 5));
        let mut rng = SimRng::new(5);
        let mut went_right = false;
        for _ in 0..500 {
            let dest = propose_move(&drunk, &ctx, &mut rng).unwrap();
            assert!(dest == Cell::new(8, 6) || dest == Cell::new(9, 6), "got {dest}");
            went_right |= dest == Cell::new(9, 6);
        }
        assert!(went_right);
    }

    #[test]
    fn ignores_the_car_ahead() {
        // No forward-occupancy check: the occupied forward cell stays a
        // candidate, which is what makes drunk drivers collision-prone.
        let mut grid = grid_20();
        let bounds = bounds_4_lane();
        grid.place(VehicleId(1), Cell::new(10, 6));
        let ctx = MoveContext { grid: &grid, bounds: &bounds };
        let drunk = Vehicle::new(VehicleId(0), VehicleKind::DrunkDriver, Cell::new(10, 5));
        let mut rng = SimRng::new(5);
        let mut proposed_occupied = false;
        for _ in 0..100 {
            if propose_move(&drunk, &ctx, &mut rng) == Some(Cell::new(10, 6)) {
                proposed_occupied = true;
                break;
            }
        }
        assert!(proposed_occupied);
    }
}
