use alloc::vec::Vec;
use core::fmt;

use crate::placement::Placer;

pub const BOARD_SIZE: usize = 10;
pub const FLEET: [usize; 3] = [5, 4, 4];
/// Random placement tries per ship before the ship is skipped.
pub const PLACEMENT_ATTEMPTS: usize = 100;
/// Largest grid whose columns can still be labelled `A`–`Z`.
pub const MAX_BOARD_SIZE: usize = 26;

/// Parameters of a play session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    pub fleet: Vec<usize>,
    pub attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: BOARD_SIZE,
            fleet: FLEET.to_vec(),
            attempts: PLACEMENT_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Placement generator using this configuration's retry budget.
    pub fn placer(&self) -> Placer {
        Placer::new(self.attempts)
    }

    /// Reject configurations that can never produce the full fleet.
    ///
    /// Random placement may still fall short on a crowded board; that case is
    /// left to the generator.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if self.size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge {
                size: self.size,
                max: MAX_BOARD_SIZE,
            });
        }
        if self.fleet.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        if let Some((index, &length)) = self
            .fleet
            .iter()
            .enumerate()
            .find(|&(_, &len)| len == 0 || len > self.size)
        {
            return Err(ConfigError::InvalidShipLength {
                index,
                length,
                size: self.size,
            });
        }
        let cells: usize = self.fleet.iter().sum();
        let capacity = self.size * self.size;
        if cells > capacity {
            return Err(ConfigError::FleetTooLarge { cells, capacity });
        }
        Ok(())
    }
}

/// Errors returned by [`GameConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyBoard,
    BoardTooLarge { size: usize, max: usize },
    EmptyFleet,
    InvalidShipLength { index: usize, length: usize, size: usize },
    FleetTooLarge { cells: usize, capacity: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyBoard => write!(f, "Board size must be at least 1"),
            ConfigError::BoardTooLarge { size, max } => {
                write!(f, "Board size {} exceeds the maximum of {}", size, max)
            }
            ConfigError::EmptyFleet => write!(f, "Fleet must contain at least one ship"),
            ConfigError::InvalidShipLength {
                index,
                length,
                size,
            } => write!(
                f,
                "Ship {} has length {}; lengths must be between 1 and {}",
                index, length, size
            ),
            ConfigError::FleetTooLarge { cells, capacity } => write!(
                f,
                "Fleet needs {} cells but the board only has {}",
                cells, capacity
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
