//! `corridor-sim` — the world model and step loop of the corridor
//! traffic micro-simulation.
//!
//! # One step
//!
//! ```text
//! world.step():
//!   ① Clock     — increment the step counter.
//!   ② Spawns    — independent schedules: Car every 20 steps, Taxi every 30,
//!                 DrunkDriver every 50; a spawn lands at y = 0 on a street
//!                 column and is silently skipped if that cell is occupied.
//!   ③ Activate  — every live vehicle exactly once, in a freshly shuffled
//!                 order (vehicles spawned in ② are included):
//!                   Collided      → advance the recovery counter only.
//!                   Taxi waiting  → count the pickup timer down.
//!                   Otherwise     → propose a move; resolve any collision;
//!                                   relocate on a clear, in-street cell.
//!   ④ Metrics   — append the cumulative collision counts for this step.
//! ```
//!
//! Execution is single-threaded and sequential: one vehicle's move is
//! visible to every vehicle activated after it in the same step.  The
//! activation order is explicitly randomized (it is an observable property,
//! so it is documented here rather than left to container iteration order).
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`world`]     | `World` — owns grid, vehicles, clock, RNG, ID counter |
//! | [`collision`] | Collision detection and symmetric marking             |
//! | [`metrics`]   | `CollisionLog` — per-step cumulative counts by kind   |
//! | [`view`]      | `EntityKind`, `EntityView` — renderer query surface   |
//! | [`observer`]  | `WorldObserver` hooks, `NoopObserver`                 |
//! | [`error`]     | `SimError`, `SimResult`                               |

pub mod collision;
pub mod error;
pub mod metrics;
pub mod observer;
pub mod view;
pub mod world;


pub use error::{SimError, SimResult};
pub use metrics::{CollisionCounts, CollisionLog};
pub use observer::{NoopObserver, WorldObserver};
pub use view::{EntityKind, EntityView};
pub use world::World;
