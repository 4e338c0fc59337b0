//! Play sessions: the object a host keeps per player, owning configuration,
//! random source and the current game.

use log::info;
use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{
    board::Coordinate,
    common::{BoardError, ShotOutcome},
    config::GameConfig,
    game::GameState,
};

/// One play session. Every operation runs to completion on `&mut self`.
#[derive(Debug)]
pub struct Session<R = SmallRng> {
    config: GameConfig,
    rng: R,
    state: GameState,
}

impl Session<SmallRng> {
    /// Session with a reproducible fleet sequence.
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Self::new(config, SmallRng::seed_from_u64(seed))
    }

    /// Session seeded from the thread RNG.
    #[cfg(feature = "std")]
    pub fn from_entropy(config: GameConfig) -> Self {
        let mut seed_rng = rand::rng();
        Self::new(config, SmallRng::from_rng(&mut seed_rng))
    }
}

impl<R: Rng> Session<R> {
    pub fn new(config: GameConfig, mut rng: R) -> Self {
        let state = deal(&config, &mut rng);
        Self { config, rng, state }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current game snapshot.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn fire(&mut self, coord: Coordinate) -> Result<ShotOutcome, BoardError> {
        self.state.fire(coord)
    }

    pub fn toggle_ships(&mut self) -> bool {
        self.state.toggle_ships()
    }

    /// Discard the current game and deal a new fleet.
    ///
    /// The replacement is built completely before it is swapped in.
    pub fn reset(&mut self) -> &GameState {
        let fresh = deal(&self.config, &mut self.rng);
        info!(
            "new game: {} of {} ships placed",
            fresh.ships().len(),
            self.config.fleet.len()
        );
        self.state = fresh;
        &self.state
    }
}

fn deal<R: Rng>(config: &GameConfig, rng: &mut R) -> GameState {
    let (battlefield, ships) = config.placer().generate(rng, config.size, &config.fleet);
    GameState::new(battlefield, ships)
}

#[cfg(feature = "std")]
pub use shared::SharedSession;

#[cfg(feature = "std")]
mod shared {
    use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

    use rand::{rngs::SmallRng, Rng};

    use super::Session;
    use crate::{
        board::Coordinate,
        common::{BoardError, ShotOutcome},
        game::GameState,
    };

    /// A [`Session`] shared between threads. Each call holds the lock for the
    /// whole operation, so readers never see a half-applied update.
    #[derive(Debug)]
    pub struct SharedSession<R = SmallRng> {
        inner: Arc<Mutex<Session<R>>>,
    }

    impl<R> Clone for SharedSession<R> {
        fn clone(&self) -> Self {
            Self {
                inner: Arc::clone(&self.inner),
            }
        }
    }

    impl<R: Rng> SharedSession<R> {
        pub fn new(session: Session<R>) -> Self {
            Self {
                inner: Arc::new(Mutex::new(session)),
            }
        }

        // Operations validate before mutating, so a poisoned lock still guards
        // a whole state.
        fn lock(&self) -> MutexGuard<'_, Session<R>> {
            self.inner.lock().unwrap_or_else(PoisonError::into_inner)
        }

        pub fn fire(&self, coord: Coordinate) -> Result<ShotOutcome, BoardError> {
            self.lock().fire(coord)
        }

        pub fn toggle_ships(&self) -> bool {
            self.lock().toggle_ships()
        }

        pub fn reset(&self) {
            self.lock().reset();
        }

        /// Copy of the current state.
        pub fn snapshot(&self) -> GameState {
            self.lock().state().clone()
        }

        /// Read the current state without copying it.
        pub fn with_state<T>(&self, f: impl FnOnce(&GameState) -> T) -> T {
            f(self.lock().state())
        }
    }
}
