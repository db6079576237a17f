//! `corridor-core` — foundational types for the corridor traffic micro-simulation.
//!
//! This crate is a dependency of every other `corridor-*` crate.  It has no
//! `corridor-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                        |
//! |--------------|-------------------------------------------------|
//! | [`ids`]      | `VehicleId`                                     |
//! | [`step`]     | `Step` — the simulation step counter            |
//! | [`rng`]      | `SimRng` — seeded RNG with weighted sampling    |
//! | [`config`]   | `WorldConfig` and its fail-fast validation      |
//! | [`error`]    | `CoreError`, `CoreResult`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod step;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::WorldConfig;
pub use error::{CoreError, CoreResult};
pub use ids::VehicleId;
pub use rng::SimRng;
pub use step::Step;
