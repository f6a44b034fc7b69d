//! Player record kept for the whole tournament.

use crate::models::config::RETIREMENT_LOSSES;
use serde::{Deserialize, Serialize};

/// Index of a player in the tournament arena. Stable for the tournament's lifetime.
pub type PlayerId = usize;

/// A player in the tournament.
///
/// Records are never removed; a player with [`RETIREMENT_LOSSES`] losses simply
/// stops being paired.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub wins: u32,
    pub losses: u32,
    /// Round numbers (1-based) in which this player lost.
    pub loss_rounds: Vec<u32>,
    /// Every opponent faced, in play order.
    pub opponents: Vec<PlayerId>,
    /// Unopposed wins awarded to this player.
    pub byes: u32,
    /// Tie-break, filled in once all rounds are played.
    pub opponent_win_percentage: f64,
}

impl Player {
    /// Create a new player with no results.
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            wins: 0,
            losses: 0,
            loss_rounds: Vec::new(),
            opponents: Vec::new(),
            byes: 0,
            opponent_win_percentage: 0.0,
        }
    }

    /// Record a win for this player.
    pub fn add_win(&mut self) {
        self.wins += 1;
    }

    /// Record a loss in `round`.
    pub fn add_loss(&mut self, round: u32) {
        self.losses += 1;
        self.loss_rounds.push(round);
    }

    /// Award an unopposed win. No opponent is recorded.
    pub fn record_bye(&mut self) {
        self.byes += 1;
        self.add_win();
    }

    pub fn is_retired(&self) -> bool {
        self.losses >= RETIREMENT_LOSSES
    }

    /// Whether the player finished with exactly `wins` wins and `losses` losses.
    pub fn has_record(&self, wins: u32, losses: u32) -> bool {
        self.wins == wins && self.losses == losses
    }

    /// Matches actually played plus byes received.
    pub fn appearances(&self) -> u32 {
        self.opponents.len() as u32 + self.byes
    }
}
