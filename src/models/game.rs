//! Match record and the side that won it.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// Which side won the match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    One,
    Two,
}

/// How a match came to be paired.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Both players came from the same score group.
    ScoreGroup,
    /// An undefeated odd player pulled against a one-loss player.
    CrossGroup,
}

/// A single played match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub round: u32,
    pub player_1: PlayerId,
    pub player_2: PlayerId,
    pub winner: Side,
    pub kind: MatchKind,
}

impl GameMatch {
    pub fn winner_id(&self) -> PlayerId {
        match self.winner {
            Side::One => self.player_1,
            Side::Two => self.player_2,
        }
    }

    pub fn loser_id(&self) -> PlayerId {
        match self.winner {
            Side::One => self.player_2,
            Side::Two => self.player_1,
        }
    }
}
