//! Read-only query surface for renderers.
//!
//! A renderer needs just enough per-entity state to color and shape it:
//! the kind, the cell, and the collided/waiting flags.  Terrain cells and
//! vehicles share one view type so a display layer can iterate the whole
//! scene in a single pass.

use std::fmt;

use corridor_grid::{Cell, TerrainKind};
use corridor_vehicle::VehicleKind;

/// Everything a cell can display as.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityKind {
    Street,
    Sidewalk,
    Car,
    Taxi,
    DrunkDriver,
}

impl From<TerrainKind> for EntityKind {
    fn from(kind: TerrainKind) -> Self {
        match kind {
            TerrainKind::Street   => EntityKind::Street,
            TerrainKind::Sidewalk => EntityKind::Sidewalk,
        }
    }
}

impl From<VehicleKind> for EntityKind {
    fn from(kind: VehicleKind) -> Self {
        match kind {
            VehicleKind::Car         => EntityKind::Car,
            VehicleKind::Taxi        => EntityKind::Taxi,
            VehicleKind::DrunkDriver => EntityKind::DrunkDriver,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Street      => write!(f, "street"),
            EntityKind::Sidewalk    => write!(f, "sidewalk"),
            EntityKind::Car         => write!(f, "car"),
            EntityKind::Taxi        => write!(f, "taxi"),
            EntityKind::DrunkDriver => write!(f, "drunk_driver"),
        }
    }
}

/// One drawable entity.  `collided` and `wait_time` are always `false`/`0`
/// for terrain.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityView {
    pub kind:      EntityKind,
    pub cell:      Cell,
    pub collided:  bool,
    pub wait_time: u32,
}
