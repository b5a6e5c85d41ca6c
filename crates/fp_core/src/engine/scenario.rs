//! Forced-result scenario analysis ("what does this game decide?").
//!
//! For every remaining game the season simulator is re-run twice, once per
//! possible winner, against a value-copied standings set with that result
//! applied and the game removed from the schedule. The probability swing the
//! two participants experience is the game's `stakes`. This pass is
//! O(matchups x 2 x scenario trials) and dominates engine cost; callers that
//! care about latency display the baseline first and schedule this
//! afterwards.

use std::collections::BTreeMap;

use crate::config::SimConfig;
use crate::engine::season::run_season;
use crate::engine::strength::StrengthMode;
use crate::models::{
    remaining_from_weeks, RemainingMatchup, ScenarioMatchup, ScheduledGame, SimResult, TeamId,
    TeamRecord, WeekMatchups, WeekScenario,
};

/// Copy the standings with `winner` credited a win and `loser` a loss.
/// Sides missing from the standings are left as-is; the strength fallback
/// covers them downstream.
fn apply_forced_result(teams: &[TeamRecord], winner: TeamId, loser: TeamId) -> Vec<TeamRecord> {
    let mut adjusted = teams.to_vec();
    for team in &mut adjusted {
        if team.id == winner {
            team.wins += 1;
        } else if team.id == loser {
            team.losses += 1;
        }
    }
    adjusted
}

/// Remove the first occurrence of `game` (order-insensitive) from the
/// remaining schedule. Only the first match goes, so a pair that plays twice
/// keeps its second meeting.
fn without_first_occurrence(
    remaining: &[RemainingMatchup],
    game: &RemainingMatchup,
) -> Vec<RemainingMatchup> {
    let mut removed = false;
    remaining
        .iter()
        .filter(|m| {
            if !removed && m.same_pair(game) {
                removed = true;
                false
            } else {
                true
            }
        })
        .copied()
        .collect()
}

/// Per-scenario seed, derived so every (week, game, forced side) branch gets
/// an independent reproducible stream.
fn scenario_seed(base: u64, week: u32, game_idx: usize, home_forced: bool) -> u64 {
    let tag = (u64::from(week) << 33) | ((game_idx as u64) << 1) | u64::from(home_forced);
    base ^ tag.wrapping_mul(0xD6E8_FEB8_6659_FD93)
}

fn playoff_probs(results: &[SimResult]) -> BTreeMap<TeamId, f64> {
    results.iter().map(|r| (r.id, r.playoff_prob)).collect()
}

/// Build the per-week scenario report against an already-computed baseline.
///
/// Weeks come back ascending; matchups keep their schedule order. The
/// scenario reruns use the cheap win-rate-only strength model: at two runs
/// per remaining game, speed matters more there than the blended model's
/// extra precision.
pub fn build_week_scenarios(
    teams: &[TeamRecord],
    weeks: &[WeekMatchups],
    playoff_slots: u32,
    baseline: &[SimResult],
    cfg: &SimConfig,
    seed: u64,
) -> Vec<WeekScenario> {
    let remaining = remaining_from_weeks(weeks);
    let baseline_probs = playoff_probs(baseline);

    let mut ordered: Vec<&WeekMatchups> = weeks.iter().collect();
    ordered.sort_by_key(|w| w.week);

    ordered
        .iter()
        .map(|week| {
            let matchups = week
                .matchups
                .iter()
                .enumerate()
                .map(|(game_idx, game)| {
                    scenario_for_game(
                        teams,
                        &remaining,
                        game,
                        playoff_slots,
                        &baseline_probs,
                        cfg,
                        scenario_seed(seed, week.week, game_idx, true),
                        scenario_seed(seed, week.week, game_idx, false),
                    )
                })
                .collect();
            WeekScenario { week: week.week, matchups }
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn scenario_for_game(
    teams: &[TeamRecord],
    remaining: &[RemainingMatchup],
    game: &ScheduledGame,
    playoff_slots: u32,
    baseline_probs: &BTreeMap<TeamId, f64>,
    cfg: &SimConfig,
    home_seed: u64,
    away_seed: u64,
) -> ScenarioMatchup {
    let pair = game.matchup();
    let schedule = without_first_occurrence(remaining, &pair);

    let force = |winner: TeamId, loser: TeamId, seed: u64| {
        let adjusted = apply_forced_result(teams, winner, loser);
        let results = run_season(
            &adjusted,
            &schedule,
            playoff_slots,
            cfg.scenario_trials,
            StrengthMode::WinRateOnly,
            cfg,
            seed,
        );
        playoff_probs(&results)
    };

    let if_home_wins = force(game.home_id, game.away_id, home_seed);
    let if_away_wins = force(game.away_id, game.home_id, away_seed);

    let home_baseline = baseline_probs.get(&game.home_id).copied().unwrap_or(0.0);
    let away_baseline = baseline_probs.get(&game.away_id).copied().unwrap_or(0.0);
    // Combined swing both participants see under the forced home win.
    let stakes = (if_home_wins.get(&game.home_id).copied().unwrap_or(0.0) - home_baseline).abs()
        + (if_home_wins.get(&game.away_id).copied().unwrap_or(0.0) - away_baseline).abs();

    log::debug!("scenario {} vs {}: stakes {stakes:.3}", game.home_name, game.away_name);

    ScenarioMatchup {
        home_id: game.home_id,
        home_name: game.home_name.clone(),
        away_id: game.away_id,
        away_name: game.away_name.clone(),
        home_baseline,
        away_baseline,
        if_home_wins,
        if_away_wins,
        stakes,
    }
}
