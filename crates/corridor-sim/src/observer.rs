//! World observer trait for progress reporting and data collection.

use corridor_core::{Step, VehicleId};
use corridor_grid::Cell;
use corridor_vehicle::VehicleKind;

/// Callbacks invoked by [`World::step`][crate::World::step] at key points.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — collision printer
///
/// ```rust,ignore
/// struct CollisionPrinter;
///
/// impl WorldObserver for CollisionPrinter {
///     fn on_collision(&mut self, step: Step, mover: VehicleId, other: VehicleId) {
///         println!("{step}: {mover} struck {other}");
///     }
/// }
/// ```
pub trait WorldObserver {
    /// Called after the step counter increments, before spawns and activations.
    fn on_step_start(&mut self, _step: Step) {}

    /// Called when a scheduled spawn succeeds.  Skipped spawns (occupied
    /// target cell) produce no callback.
    fn on_spawn(&mut self, _step: Step, _kind: VehicleKind, _id: VehicleId, _cell: Cell) {}

    /// Called when a moving vehicle strikes an occupant.  Both vehicles are
    /// already marked collided when this fires.
    fn on_collision(&mut self, _step: Step, _mover: VehicleId, _other: VehicleId) {}

    /// Called at the end of each step.  `moved` is the number of vehicles
    /// that changed cells this step.
    fn on_step_end(&mut self, _step: Step, _moved: usize) {}
}

/// A [`WorldObserver`] that does nothing.  Use when you need to call `step`
/// but don't want callbacks.
pub struct NoopObserver;

impl WorldObserver for NoopObserver {}
