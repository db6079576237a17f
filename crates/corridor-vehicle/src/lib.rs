//! `corridor-vehicle` — vehicle state and per-kind movement policy.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`kind`]    | `VehicleKind` — the closed set of vehicle variants            |
//! | [`vehicle`] | `Vehicle` state, collision marking, recovery state machine    |
//! | [`policy`]  | `MoveContext<'a>`, `propose_move`, `tick_pre_move`            |
//!
//! # Design notes
//!
//! The three vehicle kinds share one movement contract — compute candidate
//! next cells, weight them, sample one — and differ only in their weight
//! tables and recovery timing.  Rather than runtime subtype checks, the
//! policy dispatches on the [`VehicleKind`] tag with an exhaustive `match`,
//! so adding a kind is a compile-checked change.
//!
//! The policy is a pure producer: [`propose_move`] reads the grid and lane
//! classification and returns a candidate cell (or `None` for "stay put").
//! It never mutates the grid or other vehicles — the simulation loop owns
//! all application of moves, including collision resolution.

pub mod kind;
pub mod policy;
pub mod vehicle;

#[cfg(test)]
mod tests;

pub use kind::VehicleKind;
pub use policy::{propose_move, tick_pre_move, MoveContext};
pub use vehicle::{Vehicle, RECOVERY_TICKS};
