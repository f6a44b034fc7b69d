//! Tournament logic: pairing rounds, final standings, per-run statistics and aggregation.

mod aggregate;
mod pairing;
mod report;
mod standings;

pub use aggregate::{
    run_seed, run_simulations, run_totals, AggregateReport, AggregateTotals, RoundRate,
};
pub use pairing::{play_match, play_round, RoundSummary};
pub use report::{
    run_rounds, run_tournament, simulate, tournament_stats, RoundTally, TournamentStats,
};
pub use standings::{
    compute_opponent_win_percentages, final_standings, opponent_win_percentage, Standing,
};
