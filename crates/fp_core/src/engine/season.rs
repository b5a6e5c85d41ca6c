//! Full-season Monte Carlo completion.
//!
//! Runs N independent completions of the remaining schedule and aggregates
//! them into per-competitor rank distributions. The hot loop works on
//! array-of-counters indexed by a stable per-run team position; keyed maps
//! only appear at the boundaries.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::config::SimConfig;
use crate::engine::game::simulate_game;
use crate::engine::strength::{team_strengths, StrengthMode, NEUTRAL_STRENGTH};
use crate::models::{RemainingMatchup, SimResult, TeamRecord};

/// Trials per worker chunk. Chunk boundaries are fixed and each chunk seeds
/// its own RNG from (run seed, first trial index), so the merged integer
/// tallies are identical for a given seed regardless of thread schedule.
const TRIAL_CHUNK: u32 = 512;

/// One remaining game resolved to per-run team positions. A side missing
/// from the standings keeps its neutral strength but has no counter to
/// increment when it wins.
struct ResolvedMatchup {
    home: Option<usize>,
    away: Option<usize>,
    home_strength: f64,
    away_strength: f64,
}

/// Integer counters for one worker's share of the trials.
struct Tally {
    /// Flattened `n x n`: `rank_counts[team * n + rank0]` counts trials in
    /// which `team` finished at rank `rank0 + 1`.
    rank_counts: Vec<u64>,
    rank_sum: Vec<u64>,
}

impl Tally {
    fn new(n: usize) -> Self {
        Self { rank_counts: vec![0; n * n], rank_sum: vec![0; n] }
    }

    fn merge(mut self, other: Tally) -> Tally {
        for (a, b) in self.rank_counts.iter_mut().zip(&other.rank_counts) {
            *a += b;
        }
        for (a, b) in self.rank_sum.iter_mut().zip(&other.rank_sum) {
            *a += b;
        }
        self
    }
}

fn chunk_seed(seed: u64, first_trial: u32) -> u64 {
    seed ^ u64::from(first_trial).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Run `trials` season completions and aggregate per-competitor statistics.
///
/// An empty remaining schedule is valid: every trial then produces the same
/// ordering and all probabilities collapse to 0 or 1. `playoff_slots` larger
/// than the league is clamped; a zero-competitor league returns an empty
/// result set.
pub fn run_season(
    teams: &[TeamRecord],
    remaining: &[RemainingMatchup],
    playoff_slots: u32,
    trials: u32,
    mode: StrengthMode,
    cfg: &SimConfig,
    seed: u64,
) -> Vec<SimResult> {
    let n = teams.len();
    if n == 0 || trials == 0 {
        return Vec::new();
    }

    let strengths = team_strengths(teams, mode, cfg);
    let index: HashMap<_, _> = teams.iter().enumerate().map(|(i, t)| (t.id, i)).collect();
    let base_wins: Vec<u32> = teams.iter().map(|t| t.wins).collect();
    let base_points: Vec<f64> = teams.iter().map(|t| t.points_for).collect();

    let mut unknown = HashSet::new();
    let matchups: Vec<ResolvedMatchup> = remaining
        .iter()
        .map(|m| {
            for id in [m.home, m.away] {
                if !index.contains_key(&id) && unknown.insert(id) {
                    log::warn!("remaining matchup references unknown team id {id}; using neutral strength");
                }
            }
            ResolvedMatchup {
                home: index.get(&m.home).copied(),
                away: index.get(&m.away).copied(),
                home_strength: strengths.get(&m.home).copied().unwrap_or(NEUTRAL_STRENGTH),
                away_strength: strengths.get(&m.away).copied().unwrap_or(NEUTRAL_STRENGTH),
            }
        })
        .collect();

    log::debug!(
        "season run: {n} teams, {} remaining games, {trials} trials, mode {mode:?}",
        matchups.len()
    );

    let chunk_starts: Vec<u32> = (0..trials).step_by(TRIAL_CHUNK as usize).collect();
    let tally = chunk_starts
        .into_par_iter()
        .map(|start| {
            let count = TRIAL_CHUNK.min(trials - start);
            let mut rng = ChaCha8Rng::seed_from_u64(chunk_seed(seed, start));
            let mut tally = Tally::new(n);
            let mut sim_wins = vec![0u32; n];
            let mut sim_points = vec![0.0f64; n];
            let mut order: Vec<usize> = (0..n).collect();

            for _ in 0..count {
                sim_wins.copy_from_slice(&base_wins);
                // Jitter breaks exact points-for ties differently per trial
                // so tie-break frequency shows up in the distribution. It is
                // far too small to overturn a real points difference and
                // never touches the primary wins key.
                for (pts, base) in sim_points.iter_mut().zip(&base_points) {
                    *pts = base + rng.gen::<f64>() * cfg.points_jitter;
                }
                for m in &matchups {
                    if simulate_game(&mut rng, m.home_strength, m.away_strength) {
                        if let Some(i) = m.home {
                            sim_wins[i] += 1;
                        }
                    } else if let Some(i) = m.away {
                        sim_wins[i] += 1;
                    }
                }
                order.sort_unstable_by(|&a, &b| {
                    sim_wins[b].cmp(&sim_wins[a]).then_with(|| {
                        sim_points[b].partial_cmp(&sim_points[a]).unwrap_or(Ordering::Equal)
                    })
                });
                for (rank0, &i) in order.iter().enumerate() {
                    tally.rank_counts[i * n + rank0] += 1;
                    tally.rank_sum[i] += rank0 as u64 + 1;
                }
            }
            tally
        })
        .reduce(|| Tally::new(n), Tally::merge);

    let slots = (playoff_slots as usize).min(n);
    let total = f64::from(trials);
    teams
        .iter()
        .enumerate()
        .map(|(i, team)| {
            let row = &tally.rank_counts[i * n..(i + 1) * n];
            // Playoff and last-place counts derive from the same integer
            // counters as the distribution, so the documented identities
            // hold exactly, not just within noise. Dividing (rather than
            // multiplying by a reciprocal) keeps collapsed outcomes at
            // exactly 0.0 or 1.0.
            let playoff: u64 = row[..slots].iter().sum();
            SimResult {
                id: team.id,
                name: team.name.clone(),
                wins: team.wins,
                losses: team.losses,
                ties: team.ties,
                points_for: team.points_for,
                rank: team.rank,
                playoff_prob: playoff as f64 / total,
                last_place_prob: row[n - 1] as f64 / total,
                avg_rank: tally.rank_sum[i] as f64 / total,
                rank_dist: row.iter().map(|&c| c as f64 / total).collect(),
            }
        })
        .collect()
}
