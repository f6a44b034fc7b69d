//! Swiss-system qualification simulator: library with models and tournament logic.
//!
//! Simulates many independent Swiss tournaments (uniform 50/50 matches, retirement
//! after two losses, opponent-win-percentage tie-break) and reports how often a
//! one-loss finisher qualifies depending on the round of that loss.

pub mod logic;
pub mod models;
pub mod output;

pub use logic::{
    final_standings, play_match, play_round, run_rounds, run_simulations, run_tournament,
    simulate, tournament_stats, AggregateReport, AggregateTotals, RoundRate, RoundSummary,
    RoundTally, Standing, TournamentStats,
};
pub use models::{
    ConfigError, GameMatch, MatchKind, Player, PlayerId, Side, SimulationConfig, Tournament,
    TournamentConfig, TournamentError, TournamentState,
};
pub use output::{write_report, OutputError, OutputFormat};
