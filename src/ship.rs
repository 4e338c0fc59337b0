//! Ship definitions: identity, occupied coordinates and damage.

use alloc::vec::Vec;
use core::fmt;

use crate::board::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Coordinates covered by a ship of `len` cells starting at `start`.
    /// Positions past `usize::MAX` clamp there and never lie on a grid.
    pub fn span(self, start: Coordinate, len: usize) -> impl Iterator<Item = Coordinate> {
        (0..len).map(move |i| match self {
            Orientation::Horizontal => {
                Coordinate::new(start.row, start.column.saturating_add(i))
            }
            Orientation::Vertical => Coordinate::new(start.row.saturating_add(i), start.column),
        })
    }
}

/// Stable identifier of a ship, derived from its index in the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipId(pub usize);

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ship-{}", self.0)
    }
}

/// A ship in the registry.
///
/// Size and coordinates are fixed at creation; only the hit count changes.
/// Whether the ship is sunk is always derived from the hit count.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    id: ShipId,
    size: usize,
    hits: usize,
    coordinates: Vec<Coordinate>,
}

impl Ship {
    pub(crate) fn new(id: ShipId, coordinates: Vec<Coordinate>) -> Self {
        Self {
            id,
            size: coordinates.len(),
            hits: 0,
            coordinates,
        }
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    /// Length of the ship in cells.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of hits taken so far.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Occupied cells, from the bow.
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.coordinates.contains(&coord)
    }

    /// Check if the ship is sunk (every segment hit).
    pub fn is_sunk(&self) -> bool {
        self.hits >= self.size
    }

    /// Record one more hit. Returns `true` if the ship is now sunk.
    pub(crate) fn register_hit(&mut self) -> bool {
        if self.hits < self.size {
            self.hits += 1;
        }
        self.is_sunk()
    }
}
