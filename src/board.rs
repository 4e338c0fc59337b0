//! The battlefield: a square grid of cells tracking ships and shots.

use alloc::vec::Vec;

use crate::ship::ShipId;

/// A zero-based position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: usize,
    pub column: usize,
}

impl Coordinate {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, column): (usize, usize)) -> Self {
        Self { row, column }
    }
}

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum CellStatus {
    #[default]
    Empty,
    Ship,
    Hit,
    Miss,
}

impl CellStatus {
    /// `true` once a shot has landed on the cell.
    pub fn is_resolved(self) -> bool {
        matches!(self, CellStatus::Hit | CellStatus::Miss)
    }
}

/// One cell of the battlefield.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: usize,
    pub column: usize,
    pub status: CellStatus,
    pub ship_id: Option<ShipId>,
}

impl Cell {
    fn empty(row: usize, column: usize) -> Self {
        Self {
            row,
            column,
            status: CellStatus::Empty,
            ship_id: None,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.row, self.column)
    }
}

/// Square N×N grid of cells. Row `r`, column `c` always holds the cell whose
/// stored position is `(r, c)`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Battlefield {
    rows: Vec<Vec<Cell>>,
}

impl Battlefield {
    /// Create an all-empty `size`×`size` grid.
    pub fn new(size: usize) -> Self {
        let rows = (0..size)
            .map(|r| (0..size).map(|c| Cell::empty(r, c)).collect())
            .collect();
        Self { rows }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if `coord` lies on the grid.
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.row < self.size() && coord.column < self.size()
    }

    pub fn cell(&self, coord: Coordinate) -> Option<&Cell> {
        self.rows.get(coord.row)?.get(coord.column)
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.rows.iter().flatten()
    }

    /// Number of cells currently in `status`.
    pub fn count(&self, status: CellStatus) -> usize {
        self.cells().filter(|c| c.status == status).count()
    }

    /// Mark `coord` as occupied by `id`. Only empty cells may be occupied.
    pub(crate) fn occupy(&mut self, coord: Coordinate, id: ShipId) -> bool {
        match self.cell_mut(coord) {
            Some(cell) if cell.status == CellStatus::Empty => {
                cell.status = CellStatus::Ship;
                cell.ship_id = Some(id);
                true
            }
            _ => false,
        }
    }

    /// Resolve a shot at `coord`: ship becomes hit, empty becomes miss.
    /// Resolved cells are left untouched. Returns the new status.
    pub(crate) fn strike(&mut self, coord: Coordinate) -> Option<CellStatus> {
        let cell = self.cell_mut(coord)?;
        cell.status = match cell.status {
            CellStatus::Ship => CellStatus::Hit,
            CellStatus::Empty => CellStatus::Miss,
            resolved => resolved,
        };
        Some(cell.status)
    }

    fn cell_mut(&mut self, coord: Coordinate) -> Option<&mut Cell> {
        self.rows.get_mut(coord.row)?.get_mut(coord.column)
    }
}
