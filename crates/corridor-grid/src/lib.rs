//! `corridor-grid` — toroidal occupancy grid and lane classification.
//!
//! # Crate layout
//!
//! | Module   | Contents                                                   |
//! |----------|------------------------------------------------------------|
//! | [`grid`] | `Cell`, `Grid` — wraparound multi-occupancy cell space     |
//! | [`lane`] | `StreetBounds`, `TerrainKind` — street/sidewalk classifier |
//!
//! # Design notes
//!
//! The grid is the single shared mutable resource of a simulation step.  All
//! position mutations go through [`Grid::place`], [`Grid::remove`], and
//! [`Grid::relocate`] so the one-occupant-one-cell invariant holds at every
//! observation point: a vehicle is never visible in zero or two cells.
//!
//! Storage is arena-style — a dense `Vec` of cells, each holding a small
//! unordered list of occupant IDs — so moves are O(1) index arithmetic with
//! no aliasing hazards and no per-agent pointers.

pub mod grid;
pub mod lane;


pub use grid::{Cell, Grid};
pub use lane::{StreetBounds, TerrainKind};
