//! Random fleet placement.

use alloc::vec::Vec;
use log::{debug, warn};
use rand::Rng;

use crate::board::{Battlefield, CellStatus, Coordinate};
use crate::common::BoardError;
use crate::config::PLACEMENT_ATTEMPTS;
use crate::ship::{Orientation, Ship, ShipId};

/// Returns `true` if a ship of `len` cells fits at `start` with `orientation`
/// without leaving the grid or touching a non-empty cell.
pub fn is_valid_placement(
    grid: &Battlefield,
    len: usize,
    start: Coordinate,
    orientation: Orientation,
) -> bool {
    if !fits_on(grid, len, start, orientation) {
        return false;
    }
    orientation
        .span(start, len)
        .all(|c| grid.cell(c).map_or(false, |cell| cell.status == CellStatus::Empty))
}

/// Bounds half of the placement check; never overflows.
fn fits_on(grid: &Battlefield, len: usize, start: Coordinate, orientation: Orientation) -> bool {
    let size = grid.size();
    let (along, across) = match orientation {
        Orientation::Horizontal => (start.column, start.row),
        Orientation::Vertical => (start.row, start.column),
    };
    across < size && along.saturating_add(len) <= size
}

/// Place a ship at a fixed position, marking its cells on `grid`.
pub fn place_ship(
    grid: &mut Battlefield,
    id: ShipId,
    len: usize,
    start: Coordinate,
    orientation: Orientation,
) -> Result<Ship, BoardError> {
    if len == 0 {
        return Err(BoardError::EmptyShip);
    }
    if !is_valid_placement(grid, len, start, orientation) {
        return Err(if fits_on(grid, len, start, orientation) {
            BoardError::ShipOverlaps
        } else {
            BoardError::ShipOutOfBounds
        });
    }
    let coordinates: Vec<Coordinate> = orientation.span(start, len).collect();
    for &c in &coordinates {
        grid.occupy(c, id);
    }
    Ok(Ship::new(id, coordinates))
}

/// Fleet placement generator with a bounded number of random tries per ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placer {
    attempts: usize,
}

impl Default for Placer {
    fn default() -> Self {
        Self::new(PLACEMENT_ATTEMPTS)
    }
}

impl Placer {
    pub const fn new(attempts: usize) -> Self {
        Self { attempts }
    }

    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Returns a random free (start, orientation) for a ship of `len` cells, or
    /// `None` once the attempt budget is spent.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        grid: &Battlefield,
        len: usize,
    ) -> Option<(Coordinate, Orientation)> {
        let size = grid.size();
        if len == 0 || len > size {
            return None;
        }
        for _ in 0..self.attempts {
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let max_r = if orient == Orientation::Vertical {
                size - len
            } else {
                size - 1
            };
            let max_c = if orient == Orientation::Horizontal {
                size - len
            } else {
                size - 1
            };
            let start = Coordinate::new(rng.random_range(0..=max_r), rng.random_range(0..=max_c));
            if is_valid_placement(grid, len, start, orient) {
                return Some((start, orient));
            }
        }
        None
    }

    /// Build a `size`×`size` grid and place every ship of `fleet` in order.
    ///
    /// Ships that cannot be placed within the attempt budget are skipped, so
    /// the registry may be shorter than `fleet`. Ship ids follow fleet
    /// indices, skipped entries included.
    pub fn generate<R: Rng>(
        &self,
        rng: &mut R,
        size: usize,
        fleet: &[usize],
    ) -> (Battlefield, Vec<Ship>) {
        let mut grid = Battlefield::new(size);
        let mut ships = Vec::with_capacity(fleet.len());
        for (index, &len) in fleet.iter().enumerate() {
            let id = ShipId(index);
            let Some((start, orient)) = self.random_placement(rng, &grid, len) else {
                warn!(
                    "could not place {} (length {}) after {} attempts; skipping",
                    id, len, self.attempts
                );
                continue;
            };
            match place_ship(&mut grid, id, len, start, orient) {
                Ok(ship) => {
                    debug!(
                        "placed {} (length {}) at ({}, {}) {:?}",
                        id, len, start.row, start.column, orient
                    );
                    ships.push(ship);
                }
                Err(e) => warn!("placement of {} rejected: {}", id, e),
            }
        }
        (grid, ships)
    }
}
