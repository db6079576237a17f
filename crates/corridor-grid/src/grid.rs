//! The toroidal occupancy grid.

use std::fmt;

use corridor_core::VehicleId;

// ── Cell ──────────────────────────────────────────────────────────────────────

/// A grid coordinate.  `x` is the column (lane axis), `y` the row (travel
/// axis); vehicles move toward increasing `y`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: u32,
    pub y: u32,
}

impl Cell {
    #[inline]
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Grid ──────────────────────────────────────────────────────────────────────

/// A width × height wraparound grid of multi-occupancy cells.
///
/// Each cell holds an unordered list of occupant `VehicleId`s; the grid also
/// keeps the authoritative `VehicleId → Cell` position index (`positions`).
/// Vehicle structs may cache their cell for convenience, but this index is
/// the source of truth.
///
/// Coordinates wrap (`x mod width`, `y mod height`), so no bounds error is
/// possible for any width/height ≥ 1.  Dimension validation happens once, in
/// `WorldConfig::validate`, before a grid is ever built.
pub struct Grid {
    width:  u32,
    height: u32,
    /// Row-major cell contents: `cells[y * width + x]`.
    cells: Vec<Vec<VehicleId>>,
    /// Authoritative position per vehicle, indexed by `VehicleId`.
    /// `None` for IDs that were never placed.
    positions: Vec<Option<Cell>>,
}

impl Grid {
    /// Create an empty grid.  Callers validate `width`/`height` ≥ 1 up front.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![Vec::new(); (width as usize) * (height as usize)],
            positions: Vec::new(),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Wrap an unconstrained coordinate pair onto the torus.
    #[inline]
    pub fn wrap(&self, x: i64, y: i64) -> Cell {
        Cell {
            x: x.rem_euclid(self.width as i64) as u32,
            y: y.rem_euclid(self.height as i64) as u32,
        }
    }

    /// The cell `(dx, dy)` away from `cell`, with toroidal wraparound.
    #[inline]
    pub fn neighbor(&self, cell: Cell, dx: i32, dy: i32) -> Cell {
        self.wrap(cell.x as i64 + dx as i64, cell.y as i64 + dy as i64)
    }

    /// Occupants of `cell`, in unspecified order.
    #[inline]
    pub fn contents(&self, cell: Cell) -> &[VehicleId] {
        &self.cells[self.index(cell)]
    }

    /// `true` if any vehicle occupies `cell`.
    #[inline]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        !self.contents(cell).is_empty()
    }

    /// The authoritative position of `id`, or `None` if it was never placed.
    #[inline]
    pub fn position_of(&self, id: VehicleId) -> Option<Cell> {
        self.positions.get(id.index()).copied().flatten()
    }

    /// Add `id` to `cell` and record its position.
    ///
    /// Cells are multisets: placing onto an occupied cell is allowed (the
    /// model's initializer places without occupancy checks; collision rules
    /// live above the grid).  Placing an ID that is already on the grid is a
    /// logic error upstream; the grid keeps the invariant by removing the
    /// stale membership first.
    pub fn place(&mut self, id: VehicleId, cell: Cell) {
        let cell = self.wrap(cell.x as i64, cell.y as i64);
        if self.position_of(id).is_some() {
            self.remove(id);
        }
        let idx = self.index(cell);
        self.cells[idx].push(id);
        self.ensure_slot(id);
        self.positions[id.index()] = Some(cell);
    }

    /// Remove `id` from the grid entirely.  A no-op for unplaced IDs.
    pub fn remove(&mut self, id: VehicleId) {
        let Some(cell) = self.position_of(id) else {
            return;
        };
        let idx = self.index(cell);
        if let Some(pos) = self.cells[idx].iter().position(|&o| o == id) {
            self.cells[idx].swap_remove(pos);
        }
        self.positions[id.index()] = None;
    }

    /// Move `id` from its current cell to `new_cell`.
    ///
    /// Logically atomic from the model's perspective: both the old-cell
    /// removal and the new-cell insertion happen within this single call, so
    /// no observer sees the vehicle in both or neither cell.
    pub fn relocate(&mut self, id: VehicleId, new_cell: Cell) {
        self.remove(id);
        self.place(id, new_cell);
    }

    /// Total number of placed vehicles.
    pub fn occupant_count(&self) -> usize {
        self.positions.iter().filter(|p| p.is_some()).count()
    }

    #[inline]
    fn index(&self, cell: Cell) -> usize {
        (cell.y as usize) * (self.width as usize) + (cell.x as usize)
    }

    fn ensure_slot(&mut self, id: VehicleId) {
        if self.positions.len() <= id.index() {
            self.positions.resize(id.index() + 1, None);
        }
    }
}
