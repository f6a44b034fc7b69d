//! Data structures for the simulator: configuration, players, tournament state.

mod config;
mod game;
mod player;
mod tournament;

pub use config::{
    ConfigError, SimulationConfig, TournamentConfig, OPPONENT_WIN_PERCENTAGE_FLOOR,
    RETIREMENT_LOSSES,
};
pub use game::{GameMatch, MatchKind, Side};
pub use player::{Player, PlayerId};
pub use tournament::{Tournament, TournamentError, TournamentState};
