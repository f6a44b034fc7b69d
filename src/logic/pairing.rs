//! Swiss rounds: score-group pairing, odd-player handling and result application.

use crate::models::{
    GameMatch, MatchKind, PlayerId, Side, Tournament, TournamentError, TournamentState,
};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::{BTreeMap, HashSet};

/// What happened in one round.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RoundSummary {
    pub round: u32,
    pub matches: Vec<GameMatch>,
    /// Players awarded an unopposed win.
    pub byes: Vec<PlayerId>,
    /// Players dropped from the pool at the start of the round.
    pub retired: usize,
}

impl RoundSummary {
    pub fn cross_group_matches(&self) -> impl Iterator<Item = &GameMatch> + '_ {
        self.matches
            .iter()
            .filter(|m| m.kind == MatchKind::CrossGroup)
    }
}

/// Play the next round.
///
/// 1. Drop retired players from the pool.
/// 2. Split the pool into score groups by wins (highest first).
/// 3. Shuffle each group. An odd group sets aside its last player: undefeated ones
///    wait for a cross-group match, others get a bye. The rest play in consecutive pairs.
/// 4. Each waiting undefeated player meets the first one-loss player in the new pool
///    not already used for a cross-group match this round, or gets a bye if none is left.
/// 5. Everyone processed this round becomes the next pool.
pub fn play_round<R: Rng + ?Sized>(
    tournament: &mut Tournament,
    rng: &mut R,
) -> Result<RoundSummary, TournamentError> {
    if tournament.state != TournamentState::InProgress || tournament.rounds_remaining() == 0 {
        return Err(TournamentError::InvalidState);
    }
    let round = tournament.round + 1;

    let mut pool = Vec::with_capacity(tournament.active.len());
    for &id in &tournament.active {
        if !tournament.player(id)?.is_retired() {
            pool.push(id);
        }
    }

    let mut summary = RoundSummary {
        round,
        retired: tournament.active.len() - pool.len(),
        ..RoundSummary::default()
    };

    let groups = score_groups(tournament, &pool)?;
    let mut next_pool: Vec<PlayerId> = Vec::with_capacity(pool.len());
    let mut waiting: Vec<PlayerId> = Vec::new();

    for mut group in groups {
        group.shuffle(rng);
        if group.len() % 2 == 1 {
            if let Some(extra) = group.pop() {
                if tournament.player(extra)?.losses == 0 {
                    waiting.push(extra);
                } else {
                    tournament.player_mut(extra)?.record_bye();
                    summary.byes.push(extra);
                    next_pool.push(extra);
                }
            }
        }

        for pair in group.chunks_exact(2) {
            let m = play_match(tournament, pair[0], pair[1], round, MatchKind::ScoreGroup, rng)?;
            summary.matches.push(m);
            next_pool.extend_from_slice(pair);
        }
    }

    // Candidates are scanned in pool order, so the pick follows the shuffles above
    // rather than being uniform over eligible players.
    let mut cross_paired: HashSet<PlayerId> = HashSet::new();
    for extra in waiting {
        let mut opponent = None;
        for &id in &next_pool {
            if tournament.player(id)?.losses == 1 && !cross_paired.contains(&id) {
                opponent = Some(id);
                break;
            }
        }

        match opponent {
            Some(opponent) => {
                cross_paired.insert(opponent);
                cross_paired.insert(extra);
                let m = play_match(tournament, extra, opponent, round, MatchKind::CrossGroup, rng)?;
                summary.matches.push(m);
            }
            None => {
                tournament.player_mut(extra)?.record_bye();
                summary.byes.push(extra);
            }
        }
        next_pool.push(extra);
    }

    tournament.active = next_pool;
    tournament.round = round;

    debug!(
        "round {}: {} matches, {} byes, {} retired",
        round,
        summary.matches.len(),
        summary.byes.len(),
        summary.retired
    );
    Ok(summary)
}

/// Group `pool` by win count, highest wins first. Within a group players are
/// ordered by ascending losses, then by pool order.
fn score_groups(
    tournament: &Tournament,
    pool: &[PlayerId],
) -> Result<Vec<Vec<PlayerId>>, TournamentError> {
    let mut keyed = Vec::with_capacity(pool.len());
    for &id in pool {
        let p = tournament.player(id)?;
        keyed.push((id, p.wins, p.losses));
    }
    keyed.sort_by_key(|&(_, wins, losses)| (Reverse(wins), losses));

    let mut groups: BTreeMap<Reverse<u32>, Vec<PlayerId>> = BTreeMap::new();
    for (id, wins, _) in keyed {
        groups.entry(Reverse(wins)).or_default().push(id);
    }
    Ok(groups.into_values().collect())
}

/// Play one 50/50 match between `player_1` and `player_2` and apply the result.
/// Both players record each other as an opponent.
pub fn play_match<R: Rng + ?Sized>(
    tournament: &mut Tournament,
    player_1: PlayerId,
    player_2: PlayerId,
    round: u32,
    kind: MatchKind,
    rng: &mut R,
) -> Result<GameMatch, TournamentError> {
    tournament.player(player_1)?;
    tournament.player(player_2)?;

    let winner = if rng.gen_bool(0.5) { Side::One } else { Side::Two };
    let m = GameMatch {
        round,
        player_1,
        player_2,
        winner,
        kind,
    };

    tournament.player_mut(m.winner_id())?.add_win();
    tournament.player_mut(m.loser_id())?.add_loss(round);
    tournament.player_mut(player_1)?.opponents.push(player_2);
    tournament.player_mut(player_2)?.opponents.push(player_1);
    Ok(m)
}
