//! corridor-demo — drives one corridor simulation run from the command line.
//!
//! Runs the default 20×20 corridor (4 centered lanes, 10 initial cars) for
//! 300 steps, printing spawn and collision events as they happen and a
//! per-kind summary at the end.  The core has no built-in run limit; this
//! harness owns the step count.

use std::time::Instant;

use anyhow::Result;

use corridor_core::{Step, VehicleId, WorldConfig};
use corridor_grid::Cell;
use corridor_sim::{EntityKind, World, WorldObserver};
use corridor_vehicle::VehicleKind;

// ── Run parameters ────────────────────────────────────────────────────────────

const VEHICLE_COUNT: u32 = 10;
const LANE_COUNT:    u32 = 4;
const GRID_WIDTH:    u32 = 20;
const GRID_HEIGHT:   u32 = 20;
const SEED:          u64 = 42;
const STEPS:         u64 = 300;

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints spawn and collision events and tallies moves.
#[derive(Default)]
struct EventPrinter {
    moves:      u64,
    collisions: u64,
}

impl WorldObserver for EventPrinter {
    fn on_spawn(&mut self, step: Step, kind: VehicleKind, id: VehicleId, cell: Cell) {
        println!("{step}: spawned {kind} {id} at {cell}");
    }

    fn on_collision(&mut self, step: Step, mover: VehicleId, other: VehicleId) {
        self.collisions += 1;
        println!("{step}: {mover} struck {other}");
    }

    fn on_step_end(&mut self, _step: Step, moved: usize) {
        self.moves += moved as u64;
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== corridor traffic micro-simulation ===");
    println!(
        "Grid: {GRID_WIDTH}x{GRID_HEIGHT}  |  Lanes: {LANE_COUNT}  |  \
         Cars: {VEHICLE_COUNT}  |  Seed: {SEED}"
    );

    let config = WorldConfig {
        vehicle_count: VEHICLE_COUNT,
        lane_count:    LANE_COUNT,
        grid_width:    GRID_WIDTH,
        grid_height:   GRID_HEIGHT,
        seed:          SEED,
    };
    let mut world = World::new(config)?;
    println!("Street columns: {}", world.bounds());
    println!();

    let mut observer = EventPrinter::default();
    let t0 = Instant::now();
    world.run(STEPS, &mut observer);
    let elapsed = t0.elapsed();

    println!();
    println!(
        "Ran {STEPS} steps in {:.3} ms ({} vehicle moves)",
        elapsed.as_secs_f64() * 1e3,
        observer.moves
    );

    // Per-kind summary from the query and metrics surfaces.
    let totals = world.collision_totals();
    println!();
    println!("{:<14} {:<8} {:<12}", "Kind", "Live", "Collisions");
    println!("{}", "-".repeat(34));
    for kind in [VehicleKind::Car, VehicleKind::Taxi, VehicleKind::DrunkDriver] {
        println!(
            "{:<14} {:<8} {:<12}",
            kind.to_string(),
            world.count_of(kind),
            totals.for_kind(kind)
        );
    }
    println!(
        "{:<14} {:<8} {:<12}",
        "total",
        world.vehicle_count(),
        totals.total()
    );

    let waiting = world
        .entities()
        .filter(|e| e.kind == EntityKind::Taxi && e.wait_time > 0)
        .count();
    println!();
    println!("Taxis picking up passengers at the final step: {waiting}");

    Ok(())
}
