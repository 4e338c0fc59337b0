//! Common types for the game: board errors and shot outcomes.

use crate::board::Coordinate;
use crate::ship::ShipId;

/// Result of firing at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot struck a ship that is still afloat.
    Hit(ShipId),
    /// Shot sank a ship, other ships remain.
    Sunk(ShipId),
    /// Shot sank the last ship of the fleet.
    Victory(ShipId),
    /// Shot landed in open water.
    Miss,
    /// Cell was already resolved; nothing changed.
    AlreadyShot,
    /// Game is already over; nothing changed.
    GameOver,
}

impl ShotOutcome {
    /// Whether this shot was added to the counters.
    pub fn is_counted(&self) -> bool {
        !matches!(self, ShotOutcome::AlreadyShot | ShotOutcome::GameOver)
    }

    /// Whether this shot struck a ship.
    pub fn is_hit(&self) -> bool {
        matches!(
            self,
            ShotOutcome::Hit(_) | ShotOutcome::Sunk(_) | ShotOutcome::Victory(_)
        )
    }
}

/// Errors returned by board and game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the grid.
    OutOfBounds { row: usize, col: usize, size: usize },
    /// Ship would extend past the edge of the grid.
    ShipOutOfBounds,
    /// Ship placement overlaps a cell that is not empty.
    ShipOverlaps,
    /// Ships must occupy at least one cell.
    EmptyShip,
    /// A cell is marked as ship but carries no ship reference.
    MissingShipRef(Coordinate),
    /// A cell references a ship that is not in the registry.
    UnknownShip(ShipId),
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col, size } => write!(
                f,
                "Coordinate ({}, {}) is outside the {}x{} grid",
                row, col, size, size
            ),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::EmptyShip => write!(f, "Ship length must be at least 1"),
            BoardError::MissingShipRef(c) => {
                write!(f, "Ship cell ({}, {}) has no ship reference", c.row, c.column)
            }
            BoardError::UnknownShip(id) => write!(f, "{} is not in the ship registry", id),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
