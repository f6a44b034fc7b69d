//! Repeated independent tournaments summed into qualification rates and averages.

use crate::logic::report::{simulate, TournamentStats};
use crate::models::{SimulationConfig, TournamentConfig, TournamentError};
use chrono::{DateTime, Utc};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;

/// Running sums over many tournaments.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct AggregateTotals {
    pub simulations: u32,
    /// Index `r - 1` holds round `r`.
    pub totals: Vec<u64>,
    pub qualified: Vec<u64>,
    pub unbeaten: u64,
    pub one_loss: u64,
}

impl AggregateTotals {
    pub fn new(rounds: u32) -> Self {
        Self {
            totals: vec![0; rounds as usize],
            qualified: vec![0; rounds as usize],
            ..Self::default()
        }
    }

    /// Add one tournament's statistics. Rounds outside `1..=rounds` are ignored.
    pub fn add(&mut self, stats: &TournamentStats) {
        self.simulations += 1;
        for (&round, tally) in &stats.per_round {
            let Some(idx) = (round as usize).checked_sub(1) else {
                continue;
            };
            if idx < self.totals.len() {
                self.totals[idx] += u64::from(tally.total);
                self.qualified[idx] += u64::from(tally.qualified);
            }
        }
        self.unbeaten += u64::from(stats.unbeaten);
        self.one_loss += u64::from(stats.one_loss);
    }

    /// Combine partial sums (e.g. from different threads).
    pub fn merge(mut self, other: Self) -> Self {
        self.simulations += other.simulations;
        for (a, b) in self.totals.iter_mut().zip(&other.totals) {
            *a += b;
        }
        for (a, b) in self.qualified.iter_mut().zip(&other.qualified) {
            *a += b;
        }
        self.unbeaten += other.unbeaten;
        self.one_loss += other.one_loss;
        self
    }
}

/// Qualification rate for one-loss finishers who lost in `round`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoundRate {
    pub round: u32,
    pub total: u64,
    pub qualified: u64,
    /// `qualified / total`, or 0 when no such finisher was seen.
    pub rate: f64,
}

/// Final output of a batch of simulations.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AggregateReport {
    #[serde(flatten)]
    pub config: TournamentConfig,
    pub simulations: u32,
    /// Base seed actually used (the configured one, or the one drawn from entropy).
    pub seed: u64,
    pub per_round: Vec<RoundRate>,
    pub avg_unbeaten: f64,
    pub avg_one_loss: f64,
    pub generated_at: DateTime<Utc>,
}

impl AggregateReport {
    pub fn from_totals(config: TournamentConfig, seed: u64, totals: &AggregateTotals) -> Self {
        let n = f64::from(totals.simulations.max(1));
        let per_round = totals
            .totals
            .iter()
            .zip(&totals.qualified)
            .enumerate()
            .map(|(idx, (&total, &qualified))| RoundRate {
                round: idx as u32 + 1,
                total,
                qualified,
                rate: if total > 0 {
                    qualified as f64 / total as f64
                } else {
                    0.0
                },
            })
            .collect();
        Self {
            config,
            simulations: totals.simulations,
            seed,
            per_round,
            avg_unbeaten: totals.unbeaten as f64 / n,
            avg_one_loss: totals.one_loss as f64 / n,
            generated_at: Utc::now(),
        }
    }
}

/// Seed for run `index` of a batch started from `base`.
pub fn run_seed(base: u64, index: u32) -> u64 {
    base.wrapping_add(u64::from(index))
}

fn simulate_run(
    config: TournamentConfig,
    base_seed: u64,
    index: u32,
) -> Result<TournamentStats, TournamentError> {
    let mut rng = StdRng::seed_from_u64(run_seed(base_seed, index));
    let stats = simulate(config, &mut rng)?;
    debug!(
        "run {}: unbeaten={} one_loss={}",
        index, stats.unbeaten, stats.one_loss
    );
    Ok(stats)
}

/// Sum `simulations` independent tournaments. Each run has its own seeded
/// random source, so sequential and parallel execution give the same totals.
pub fn run_totals(
    config: &SimulationConfig,
    base_seed: u64,
) -> Result<AggregateTotals, TournamentError> {
    config.validate()?;
    let tournament = config.tournament;
    let rounds = tournament.rounds;

    if config.parallel {
        (0..config.simulations)
            .into_par_iter()
            .map(|i| simulate_run(tournament, base_seed, i))
            .try_fold(
                || AggregateTotals::new(rounds),
                |mut acc, stats| {
                    acc.add(&stats?);
                    Ok::<_, TournamentError>(acc)
                },
            )
            .try_reduce(|| AggregateTotals::new(rounds), |a, b| Ok(a.merge(b)))
    } else {
        let mut totals = AggregateTotals::new(rounds);
        for i in 0..config.simulations {
            totals.add(&simulate_run(tournament, base_seed, i)?);
        }
        Ok(totals)
    }
}

/// Run the configured batch and turn the sums into rates and averages.
pub fn run_simulations(config: &SimulationConfig) -> Result<AggregateReport, TournamentError> {
    config.validate()?;
    let seed = config.seed.unwrap_or_else(rand::random);
    info!(
        "Simulating {} tournaments: players={} rounds={} qualify={} seed={} parallel={}",
        config.simulations,
        config.tournament.players,
        config.tournament.rounds,
        config.tournament.qualify,
        seed,
        config.parallel
    );

    let start = Instant::now();
    let totals = run_totals(config, seed)?;
    info!(
        "Finished {} tournaments in {:.2?}",
        totals.simulations,
        start.elapsed()
    );
    Ok(AggregateReport::from_totals(config.tournament, seed, &totals))
}
