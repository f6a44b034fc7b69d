//! Final ranking: wins first, then opponent win percentage.

use crate::models::{PlayerId, Tournament, TournamentError, OPPONENT_WIN_PERCENTAGE_FLOOR};
use serde::Serialize;

/// One row of the final ranking.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Standing {
    /// 0-based position in the ranking.
    pub rank: usize,
    pub player: PlayerId,
    pub wins: u32,
    pub losses: u32,
    pub opponent_win_percentage: f64,
}

/// Mean win count of the opponents a player faced, floored at
/// [`OPPONENT_WIN_PERCENTAGE_FLOOR`]. A player with no opponents scores the floor.
pub fn opponent_win_percentage(
    tournament: &Tournament,
    player: PlayerId,
) -> Result<f64, TournamentError> {
    let opponents = &tournament.player(player)?.opponents;
    let mut opponent_wins = 0u64;
    for &opp in opponents {
        opponent_wins += u64::from(tournament.player(opp)?.wins);
    }
    let raw = if opponents.is_empty() {
        0.0
    } else {
        opponent_wins as f64 / opponents.len() as f64
    };
    Ok(raw.max(OPPONENT_WIN_PERCENTAGE_FLOOR))
}

/// Fill in every player's tie-break, retired players included.
pub fn compute_opponent_win_percentages(
    tournament: &mut Tournament,
) -> Result<(), TournamentError> {
    for id in 0..tournament.players.len() {
        let owp = opponent_win_percentage(tournament, id)?;
        tournament.player_mut(id)?.opponent_win_percentage = owp;
    }
    Ok(())
}

/// Rank every player by `(wins, opponent_win_percentage)` descending.
/// Remaining ties keep arena order.
pub fn final_standings(tournament: &Tournament) -> Vec<Standing> {
    let mut order: Vec<_> = tournament.players.iter().collect();
    order.sort_by(|a, b| {
        b.wins.cmp(&a.wins).then_with(|| {
            b.opponent_win_percentage
                .total_cmp(&a.opponent_win_percentage)
        })
    });
    order
        .into_iter()
        .enumerate()
        .map(|(rank, p)| Standing {
            rank,
            player: p.id,
            wins: p.wins,
            losses: p.losses,
            opponent_win_percentage: p.opponent_win_percentage,
        })
        .collect()
}
