//! Tournament arena and TournamentState.

use crate::models::config::{ConfigError, TournamentConfig};
use crate::models::player::{Player, PlayerId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum TournamentError {
    /// Parameters were rejected before any round was played.
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
    /// Tournament is not in a state that allows this action.
    #[error("invalid state for this action")]
    InvalidState,
    /// Player id is not in the arena.
    #[error("player {0} not found")]
    PlayerNotFound(PlayerId),
}

/// Current phase of the tournament.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentState {
    /// Rounds remain to be played.
    #[default]
    InProgress,
    /// All rounds played and tie-breaks computed.
    Completed,
}

/// Full tournament state: every player record plus the current pairing pool.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub config: TournamentConfig,
    /// All records, indexed by [`PlayerId`]. Retired players stay here.
    pub players: Vec<Player>,
    /// Players eligible for the next round, in the order they entered the pool.
    pub active: Vec<PlayerId>,
    /// Number of rounds played so far.
    pub round: u32,
    pub state: TournamentState,
}

impl Tournament {
    /// Create a tournament with `config.players` fresh records, all in the pool.
    pub fn new(config: TournamentConfig) -> Result<Self, TournamentError> {
        config.validate()?;
        let players: Vec<Player> = (0..config.players as usize).map(Player::new).collect();
        let active = (0..players.len()).collect();
        Ok(Self {
            config,
            players,
            active,
            round: 0,
            state: TournamentState::InProgress,
        })
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player, TournamentError> {
        self.players
            .get(id)
            .ok_or(TournamentError::PlayerNotFound(id))
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player, TournamentError> {
        self.players
            .get_mut(id)
            .ok_or(TournamentError::PlayerNotFound(id))
    }

    /// Players currently in the pool (retired ones may still be present until
    /// the next round's filter runs).
    pub fn active_players(&self) -> impl Iterator<Item = &Player> + '_ {
        self.active.iter().filter_map(|&id| self.players.get(id))
    }

    pub fn rounds_remaining(&self) -> u32 {
        self.config.rounds.saturating_sub(self.round)
    }

    pub fn is_completed(&self) -> bool {
        self.state == TournamentState::Completed
    }
}
