//! Tournament and simulation parameters, validated before anything runs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Losses at which a player retires from the pairing pool.
pub const RETIREMENT_LOSSES: u32 = 2;

/// Lower bound applied to every player's opponent win percentage.
pub const OPPONENT_WIN_PERCENTAGE_FLOOR: f64 = 0.33;

/// Rejected configuration values.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    #[error("player count must be positive")]
    NoPlayers,
    #[error("round count must be positive")]
    NoRounds,
    #[error("qualify slots ({qualify}) exceed player count ({players})")]
    TooManyQualifySlots { qualify: u32, players: u32 },
    #[error("simulation count must be positive")]
    NoSimulations,
}

/// Parameters of a single Swiss tournament.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentConfig {
    pub players: u32,
    pub rounds: u32,
    /// Number of top-ranked players that qualify.
    pub qualify: u32,
}

impl TournamentConfig {
    pub fn new(players: u32, rounds: u32, qualify: u32) -> Self {
        Self {
            players,
            rounds,
            qualify,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players == 0 {
            return Err(ConfigError::NoPlayers);
        }
        if self.rounds == 0 {
            return Err(ConfigError::NoRounds);
        }
        if self.qualify > self.players {
            return Err(ConfigError::TooManyQualifySlots {
                qualify: self.qualify,
                players: self.players,
            });
        }
        Ok(())
    }
}

/// Parameters of a batch of independent tournaments.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(flatten)]
    pub tournament: TournamentConfig,
    pub simulations: u32,
    /// Base seed; run `i` is seeded with `seed + i`. Drawn from entropy when unset.
    pub seed: Option<u64>,
    /// Spread runs across the rayon thread pool.
    pub parallel: bool,
}

impl SimulationConfig {
    pub fn new(tournament: TournamentConfig, simulations: u32) -> Self {
        Self {
            tournament,
            simulations,
            seed: None,
            parallel: false,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tournament.validate()?;
        if self.simulations == 0 {
            return Err(ConfigError::NoSimulations);
        }
        Ok(())
    }
}
