//! Shot resolution and game bookkeeping.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use log::{debug, error, info};

use crate::{
    board::{Battlefield, CellStatus, Coordinate},
    common::{BoardError, ShotOutcome},
    ship::Ship,
};

pub const WELCOME_MESSAGE: &str = "Welcome to Battleship! Start shooting at the enemy ships!";
pub const NO_SHIPS_MESSAGE: &str = "No ships were created. Please check the fleet configuration.";
pub const VICTORY_MESSAGE: &str = "Congratulations! You have sunk all enemy ships!";
pub const GAME_OVER_MESSAGE: &str = "The game is over. Start a new game to play again.";

/// Whether the game still accepts shots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameSituation {
    Playing,
    GameOver,
}

/// Complete state of one game: the battlefield, its fleet and the player's
/// shooting record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    battlefield: Battlefield,
    ships: Vec<Ship>,
    total_hits: usize,
    total_misses: usize,
    total_shots: usize,
    message: String,
    ships_visible: bool,
    situation: GameSituation,
}

impl GameState {
    /// Start a game on an already populated battlefield.
    pub fn new(battlefield: Battlefield, ships: Vec<Ship>) -> Self {
        let message = if ships.is_empty() {
            error!("{}", NO_SHIPS_MESSAGE);
            NO_SHIPS_MESSAGE
        } else {
            WELCOME_MESSAGE
        };
        Self {
            battlefield,
            ships,
            total_hits: 0,
            total_misses: 0,
            total_shots: 0,
            message: String::from(message),
            ships_visible: false,
            situation: GameSituation::Playing,
        }
    }

    pub fn battlefield(&self) -> &Battlefield {
        &self.battlefield
    }

    /// Ship registry in fleet order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn total_hits(&self) -> usize {
        self.total_hits
    }

    pub fn total_misses(&self) -> usize {
        self.total_misses
    }

    pub fn total_shots(&self) -> usize {
        self.total_shots
    }

    /// Message describing the last thing that happened.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn ships_visible(&self) -> bool {
        self.ships_visible
    }

    pub fn situation(&self) -> GameSituation {
        self.situation
    }

    pub fn is_over(&self) -> bool {
        self.situation == GameSituation::GameOver
    }

    /// Number of ships already sunk.
    pub fn sunk_count(&self) -> usize {
        self.ships.iter().filter(|s| s.is_sunk()).count()
    }

    /// Hits as a whole percentage of shots, 0 before the first shot.
    pub fn accuracy(&self) -> usize {
        if self.total_shots == 0 {
            0
        } else {
            (self.total_hits * 200 + self.total_shots) / (self.total_shots * 2)
        }
    }

    /// Returns `true` when every ship in the registry is sunk. An empty
    /// registry counts as sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Flip whether ship positions are revealed. Rules are unaffected.
    pub fn toggle_ships(&mut self) -> bool {
        self.ships_visible = !self.ships_visible;
        self.ships_visible
    }

    /// Fire at `coord`, updating cells, ships and counters.
    ///
    /// Out-of-range coordinates are rejected before anything changes. Shots at
    /// resolved cells, and any shot once the game is over, only replace the
    /// message.
    pub fn fire(&mut self, coord: Coordinate) -> Result<ShotOutcome, BoardError> {
        let cell = *self.battlefield.cell(coord).ok_or(BoardError::OutOfBounds {
            row: coord.row,
            col: coord.column,
            size: self.battlefield.size(),
        })?;

        if self.is_over() {
            self.message = String::from(GAME_OVER_MESSAGE);
            return Ok(ShotOutcome::GameOver);
        }

        let outcome = match cell.status {
            CellStatus::Hit | CellStatus::Miss => {
                self.message = format!(
                    "You already shot at {}, {}. Try a different coordinate!",
                    coord.row, coord.column
                );
                return Ok(ShotOutcome::AlreadyShot);
            }
            CellStatus::Ship => {
                let id = cell.ship_id.ok_or(BoardError::MissingShipRef(coord))?;
                let index = self
                    .ships
                    .iter()
                    .position(|s| s.id() == id)
                    .ok_or(BoardError::UnknownShip(id))?;

                self.battlefield.strike(coord);
                self.total_hits += 1;
                self.total_shots += 1;
                if self.ships[index].register_hit() {
                    self.message = format!("You sunk a ship! {} was destroyed!", id);
                    ShotOutcome::Sunk(id)
                } else {
                    self.message = format!("Hit! {} has been hit!", id);
                    ShotOutcome::Hit(id)
                }
            }
            CellStatus::Empty => {
                self.battlefield.strike(coord);
                self.total_misses += 1;
                self.total_shots += 1;
                self.message = format!("Missed at {}, {}. Try again!", coord.row, coord.column);
                ShotOutcome::Miss
            }
        };
        debug!(
            "shot at ({}, {}) -> {:?}",
            coord.row, coord.column, outcome
        );

        if self.all_sunk() {
            info!("fleet destroyed after {} shots", self.total_shots);
            self.situation = GameSituation::GameOver;
            self.message = String::from(VICTORY_MESSAGE);
            if let ShotOutcome::Sunk(id) = outcome {
                return Ok(ShotOutcome::Victory(id));
            }
        }
        Ok(outcome)
    }
}
