//! The `World` model and its step loop.

use corridor_core::{SimRng, Step, VehicleId, WorldConfig};
use corridor_grid::{Cell, Grid, StreetBounds, TerrainKind};
use corridor_vehicle::{propose_move, tick_pre_move, MoveContext, Vehicle, VehicleKind};

use crate::collision;
use crate::metrics::{CollisionCounts, CollisionLog};
use crate::observer::WorldObserver;
use crate::view::EntityView;
use crate::SimResult;

// ── Spawn schedule ────────────────────────────────────────────────────────────

/// A new Car is injected every 20 steps.
const CAR_SPAWN_INTERVAL: u64 = 20;
/// A new Taxi every 30 steps, on one of the two boundary lanes.
const TAXI_SPAWN_INTERVAL: u64 = 30;
/// A new DrunkDriver every 50 steps.
const DRUNK_SPAWN_INTERVAL: u64 = 50;

// ── World ─────────────────────────────────────────────────────────────────────

/// The complete simulation state: grid, terrain, live vehicles, street
/// bounds, step counter, RNG, and the vehicle ID counter.
///
/// Vehicles are stored in an arena `Vec` indexed by `VehicleId` — IDs are
/// assigned by this world's own monotonic counter starting at 0, and
/// vehicles are never destroyed, so `vehicles[id.index()]` always holds the
/// vehicle with that ID.
pub struct World {
    config:  WorldConfig,
    bounds:  StreetBounds,
    grid:    Grid,
    /// Per-cell terrain, row-major, laid down once at initialization.
    terrain: Vec<TerrainKind>,
    vehicles: Vec<Vehicle>,
    step:    Step,
    rng:     SimRng,
    next_id: u32,
    metrics: CollisionLog,
}

impl World {
    // ── Construction ──────────────────────────────────────────────────────

    /// Build a world from `config`, failing fast on invalid parameters.
    ///
    /// Lays down the street/sidewalk terrain, then places
    /// `config.vehicle_count` cars at the bottom row on uniformly random
    /// street columns.  Initial placement does not check occupancy, so
    /// initial cars may share a cell; they untangle as the run starts.
    pub fn new(config: WorldConfig) -> SimResult<Self> {
        config.validate()?;

        let bounds = StreetBounds::from_config(&config);
        let grid = Grid::new(config.grid_width, config.grid_height);
        let terrain = (0..config.grid_width * config.grid_height)
            .map(|i| bounds.classify(i % config.grid_width))
            .collect();

        let mut world = Self {
            rng: SimRng::new(config.seed),
            bounds,
            grid,
            terrain,
            vehicles: Vec::with_capacity(config.vehicle_count as usize),
            step: Step::ZERO,
            next_id: 0,
            metrics: CollisionLog::new(),
            config,
        };

        for _ in 0..world.config.vehicle_count {
            let x = world.rng.gen_range(world.bounds.lanes());
            world.insert_vehicle(VehicleKind::Car, Cell::new(x, 0));
        }

        Ok(world)
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance the model by one step.
    ///
    /// Increments the step counter, runs the three independent spawn
    /// schedules, then activates every live vehicle exactly once in a
    /// freshly shuffled order (vehicles spawned this step included).
    /// Finishes by appending the metrics row.
    pub fn step<O: WorldObserver>(&mut self, observer: &mut O) {
        self.step = self.step + 1;
        let now = self.step;
        observer.on_step_start(now);

        if now.fires_every(CAR_SPAWN_INTERVAL) {
            self.try_spawn(VehicleKind::Car, observer);
        }
        if now.fires_every(TAXI_SPAWN_INTERVAL) {
            self.try_spawn(VehicleKind::Taxi, observer);
        }
        if now.fires_every(DRUNK_SPAWN_INTERVAL) {
            self.try_spawn(VehicleKind::DrunkDriver, observer);
        }

        let mut order: Vec<usize> = (0..self.vehicles.len()).collect();
        self.rng.shuffle(&mut order);

        let mut moved = 0;
        for idx in order {
            if self.activate(idx, observer) {
                moved += 1;
            }
        }

        self.metrics.snapshot(now);
        observer.on_step_end(now, moved);
    }

    /// Run `steps` steps.  The core has no built-in run limit; the harness
    /// chooses how long a run is.
    pub fn run<O: WorldObserver>(&mut self, steps: u64, observer: &mut O) {
        for _ in 0..steps {
            self.step(observer);
        }
    }

    // ── Query surface ─────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    #[inline]
    pub fn bounds(&self) -> StreetBounds {
        self.bounds
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Steps completed so far.
    #[inline]
    pub fn step_count(&self) -> Step {
        self.step
    }

    /// All live vehicles, in ID order.
    #[inline]
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    #[inline]
    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    /// Number of live vehicles of `kind`.
    pub fn count_of(&self, kind: VehicleKind) -> usize {
        self.vehicles.iter().filter(|v| v.kind == kind).count()
    }

    /// Terrain of `cell` (wrapped), fixed since initialization.
    pub fn terrain(&self, cell: Cell) -> TerrainKind {
        let cell = self.grid.wrap(cell.x as i64, cell.y as i64);
        self.terrain[(cell.y * self.config.grid_width + cell.x) as usize]
    }

    /// Every drawable entity: each terrain cell, then each vehicle.
    pub fn entities(&self) -> impl Iterator<Item = EntityView> + '_ {
        let width = self.config.grid_width;
        let terrain = self.terrain.iter().enumerate().map(move |(i, &t)| EntityView {
            kind:      t.into(),
            cell:      Cell::new(i as u32 % width, i as u32 / width),
            collided:  false,
            wait_time: 0,
        });
        let vehicles = self.vehicles.iter().map(|v| EntityView {
            kind:      v.kind.into(),
            cell:      v.cell,
            collided:  v.collided,
            wait_time: v.wait_time,
        });
        terrain.chain(vehicles)
    }

    /// Per-step cumulative collision counts, one row per completed step.
    #[inline]
    pub fn collision_series(&self) -> &[CollisionCounts] {
        self.metrics.series()
    }

    /// Cumulative collision totals as of the last completed step.
    #[inline]
    pub fn collision_totals(&self) -> CollisionCounts {
        self.metrics.totals()
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Activate one vehicle: recovery/wait bookkeeping, then a movement
    /// attempt.  Returns `true` if the vehicle changed cells.
    fn activate<O: WorldObserver>(&mut self, idx: usize, observer: &mut O) -> bool {
        if !tick_pre_move(&mut self.vehicles[idx], &mut self.rng) {
            return false;
        }

        let proposal = {
            let ctx = MoveContext { grid: &self.grid, bounds: &self.bounds };
            propose_move(&self.vehicles[idx], &ctx, &mut self.rng)
        };
        let Some(dest) = proposal else {
            return false;
        };

        // Taxi proposals are pre-filtered to unoccupied cells; Car and
        // DrunkDriver proposals go through the collision resolver.
        if self.vehicles[idx].kind != VehicleKind::Taxi {
            if let Some(hit) = collision::detect_and_mark(&self.grid, &mut self.vehicles, idx, dest)
            {
                self.metrics.record(self.vehicles[idx].kind);
                if !hit.other_was_collided {
                    self.metrics.record(self.vehicles[hit.other.index()].kind);
                }
                observer.on_collision(self.step, self.vehicles[idx].id, hit.other);
                return false;
            }
        }

        let id = self.vehicles[idx].id;
        self.grid.relocate(id, dest);
        self.vehicles[idx].cell = dest;
        true
    }

    /// Attempt one scheduled spawn.  The target cell is the bottom row of a
    /// street column — the two boundary lanes for a Taxi, any street column
    /// otherwise.  An occupied target skips the spawn silently (no retry).
    fn try_spawn<O: WorldObserver>(&mut self, kind: VehicleKind, observer: &mut O) {
        let x = match kind {
            VehicleKind::Taxi => {
                let lanes = self.bounds.boundary_lanes();
                *self.rng.choose(&lanes).unwrap_or(&self.bounds.start)
            }
            _ => self.rng.gen_range(self.bounds.lanes()),
        };
        let cell = Cell::new(x, 0);
        if self.grid.is_occupied(cell) {
            return;
        }
        let id = self.insert_vehicle(kind, cell);
        observer.on_spawn(self.step, kind, id, cell);
    }

    #[cfg(test)]
    pub(crate) fn vehicle_mut(&mut self, id: VehicleId) -> &mut Vehicle {
        &mut self.vehicles[id.index()]
    }

    /// Create a vehicle of `kind` at `cell` and register it with the grid.
    pub(crate) fn insert_vehicle(&mut self, kind: VehicleKind, cell: Cell) -> VehicleId {
        let id = VehicleId(self.next_id);
        self.next_id += 1;
        self.grid.place(id, cell);
        self.vehicles.push(Vehicle::new(id, kind, cell));
        id
    }
}
