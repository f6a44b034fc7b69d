//! Whole-tournament runs and the per-tournament statistics reported to the aggregator.

use crate::logic::pairing::play_round;
use crate::logic::standings::{compute_opponent_win_percentages, final_standings, Standing};
use crate::models::{Tournament, TournamentConfig, TournamentError, TournamentState};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One-loss finishers who took their loss in a given round.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundTally {
    pub total: u32,
    /// Of `total`, those ranked inside the qualify slots.
    pub qualified: u32,
}

/// Result of one simulated tournament.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentStats {
    /// Keyed by the round of the single loss; every round `1..=rounds` is present.
    pub per_round: BTreeMap<u32, RoundTally>,
    /// Players finishing with `rounds` wins and no loss.
    pub unbeaten: u32,
    /// Players finishing with `rounds - 1` wins and one loss.
    pub one_loss: u32,
}

/// Play every remaining round, then compute tie-breaks and mark the tournament completed.
pub fn run_rounds<R: Rng + ?Sized>(
    tournament: &mut Tournament,
    rng: &mut R,
) -> Result<(), TournamentError> {
    if tournament.state != TournamentState::InProgress {
        return Err(TournamentError::InvalidState);
    }
    while tournament.rounds_remaining() > 0 {
        play_round(tournament, rng)?;
    }
    compute_opponent_win_percentages(tournament)?;
    tournament.state = TournamentState::Completed;
    Ok(())
}

/// Create and play a full tournament.
pub fn run_tournament<R: Rng + ?Sized>(
    config: TournamentConfig,
    rng: &mut R,
) -> Result<Tournament, TournamentError> {
    let mut tournament = Tournament::new(config)?;
    run_rounds(&mut tournament, rng)?;
    Ok(tournament)
}

/// Count one-loss finishers by loss round, and unbeaten / one-loss totals.
pub fn tournament_stats(
    tournament: &Tournament,
    standings: &[Standing],
) -> Result<TournamentStats, TournamentError> {
    if !tournament.is_completed() {
        return Err(TournamentError::InvalidState);
    }
    let rounds = tournament.config.rounds;
    let qualify = tournament.config.qualify as usize;

    let mut stats = TournamentStats {
        per_round: (1..=rounds).map(|r| (r, RoundTally::default())).collect(),
        ..TournamentStats::default()
    };

    for standing in standings {
        let player = tournament.player(standing.player)?;
        if player.has_record(rounds, 0) {
            stats.unbeaten += 1;
        }
        if !player.has_record(rounds - 1, 1) {
            continue;
        }
        stats.one_loss += 1;
        for &loss_round in &player.loss_rounds {
            let tally = stats.per_round.entry(loss_round).or_default();
            tally.total += 1;
            if standing.rank < qualify {
                tally.qualified += 1;
            }
        }
    }
    Ok(stats)
}

/// Simulate one tournament with `players`, `rounds` and `qualify` slots.
///
/// Fails fast on invalid parameters; otherwise the result depends only on `rng`.
pub fn simulate<R: Rng + ?Sized>(
    config: TournamentConfig,
    rng: &mut R,
) -> Result<TournamentStats, TournamentError> {
    let tournament = run_tournament(config, rng)?;
    let standings = final_standings(&tournament);
    tournament_stats(&tournament, &standings)
}
