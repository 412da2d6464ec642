//! Sources for the player who opens a game.
//!
//! A new game draws its starting player from an injected source so tests
//! can pin the choice while real play stays random.

use super::types::Player;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Picks the player who moves first in a new game.
pub trait FirstPlayer {
    /// Returns the starting player for the next game.
    fn first_player(&mut self) -> Player;
}

impl<F: FirstPlayer + ?Sized> FirstPlayer for Box<F> {
    fn first_player(&mut self) -> Player {
        (**self).first_player()
    }
}

/// Always starts with the same player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixed(pub Player);

impl FirstPlayer for Fixed {
    fn first_player(&mut self) -> Player {
        self.0
    }
}

/// Flips one random bit per game.
#[derive(Debug, Clone)]
pub struct RandomFirst<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomFirst<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomFirst<StdRng> {
    /// Seeds from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Deterministic sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> FirstPlayer for RandomFirst<R> {
    #[instrument(skip(self))]
    fn first_player(&mut self) -> Player {
        let player = if self.rng.random_bool(0.5) {
            Player::X
        } else {
            Player::O
        };
        debug!(%player, "Drew starting player");
        player
    }
}

/// Configured way of choosing the starting player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayerMode {
    /// Coin flip for every game.
    #[default]
    Random,
    /// X always starts.
    X,
    /// O always starts.
    O,
}

impl FirstPlayerMode {
    /// Builds the source this mode describes.
    pub fn source(self) -> Box<dyn FirstPlayer> {
        match self {
            FirstPlayerMode::Random => Box::new(RandomFirst::from_entropy()),
            FirstPlayerMode::X => Box::new(Fixed(Player::X)),
            FirstPlayerMode::O => Box::new(Fixed(Player::O)),
        }
    }
}
