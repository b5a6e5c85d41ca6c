//! Team win-strength models.
//!
//! All functions are pure: they take standings as input and return
//! strengths in (0, 1). This keeps them unit-testable without running a
//! single simulation trial.

use std::collections::HashMap;

use crate::config::SimConfig;
use crate::models::{TeamId, TeamRecord};

/// Strength assumed for any competitor the standings don't know about.
pub const NEUTRAL_STRENGTH: f64 = 0.5;

/// Which strength model a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthMode {
    /// Bayesian-smoothed win rate blended with a normalized scoring signal.
    /// The default for baseline runs.
    Blended,
    /// Laplace-smoothed win rate only, `(wins + 2) / (games + 4)`. Cheaper,
    /// used inside scenario reruns where the run count dominates.
    WinRateOnly,
}

/// Compute every competitor's strength for one simulation run.
pub fn team_strengths(
    teams: &[TeamRecord],
    mode: StrengthMode,
    cfg: &SimConfig,
) -> HashMap<TeamId, f64> {
    let league_ppg = league_avg_points_per_game(teams);
    teams
        .iter()
        .map(|team| {
            let strength = match mode {
                StrengthMode::Blended => blended_strength(team, league_ppg, cfg),
                StrengthMode::WinRateOnly => laplace_win_rate(team),
            };
            (team.id, strength)
        })
        .collect()
}

/// League-average points-for per game, over teams that have played at least
/// one game. Defaults to 1.0 for a league with no games yet, which keeps the
/// normalized scoring signal finite.
fn league_avg_points_per_game(teams: &[TeamRecord]) -> f64 {
    let played: Vec<f64> =
        teams.iter().filter(|t| t.games_played() > 0).map(TeamRecord::points_per_game).collect();
    if played.is_empty() {
        1.0
    } else {
        played.iter().sum::<f64>() / played.len() as f64
    }
}

/// Default strength: `win_rate_weight * bayesWinRate + scoring_weight * ppgNorm`.
///
/// Win rate alone is noisy early in a season; the scoring-volume term damps
/// small-sample luck while still letting the model follow the record as
/// games accumulate.
fn blended_strength(team: &TeamRecord, league_ppg: f64, cfg: &SimConfig) -> f64 {
    let games = f64::from(team.games_played());
    let bayes_win_rate = (f64::from(team.wins) + cfg.prior_wins) / (games + cfg.prior_games);
    let ppg_norm = ((team.points_per_game() / league_ppg) * 0.5)
        .clamp(cfg.scoring_floor, cfg.scoring_ceiling);
    cfg.win_rate_weight * bayes_win_rate + cfg.scoring_weight * ppg_norm
}

/// Scenario-rerun strength: Laplace-smoothed win rate, 2 phantom wins in 4
/// phantom games.
fn laplace_win_rate(team: &TeamRecord) -> f64 {
    (f64::from(team.wins) + 2.0) / (f64::from(team.games_played()) + 4.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(id: TeamId, wins: u32, losses: u32, points_for: f64) -> TeamRecord {
        TeamRecord {
            id,
            name: format!("Team {id}"),
            wins,
            losses,
            ties: 0,
            points_for,
            rank: id,
        }
    }

    #[test]
    fn unbeaten_team_stays_below_certainty() {
        let teams = vec![team(1, 3, 0, 360.0), team(2, 0, 3, 300.0)];
        let strengths = team_strengths(&teams, StrengthMode::Blended, &SimConfig::default());
        assert!(strengths[&1] < 1.0);
        assert!(strengths[&2] > 0.0);
        assert!(strengths[&1] > strengths[&2]);
    }

    #[test]
    fn blended_matches_hand_computation() {
        // Two teams, 120 vs 80 ppg over 2 games, league avg 100.
        let teams = vec![team(1, 2, 0, 240.0), team(2, 0, 2, 160.0)];
        let strengths = team_strengths(&teams, StrengthMode::Blended, &SimConfig::default());
        // bayes = (2 + 2.5) / (2 + 5), ppg_norm = clamp(1.2 * 0.5, 0.1, 0.9)
        let expected = 0.6 * (4.5 / 7.0) + 0.4 * 0.6;
        assert!((strengths[&1] - expected).abs() < 1e-12);
    }

    #[test]
    fn scoring_signal_is_clamped() {
        // 300 vs 20 ppg: ratio * 0.5 lands far outside [0.1, 0.9] both ways.
        let teams = vec![team(1, 1, 0, 300.0), team(2, 0, 1, 20.0)];
        let cfg = SimConfig::default();
        let riding_high = team_strengths(&teams, StrengthMode::Blended, &cfg)[&1];
        let bayes = (1.0 + 2.5) / (1.0 + 5.0);
        assert!((riding_high - (0.6 * bayes + 0.4 * 0.9)).abs() < 1e-12);
    }

    #[test]
    fn league_with_no_games_uses_neutral_scoring_floor() {
        let teams = vec![team(1, 0, 0, 0.0), team(2, 0, 0, 0.0)];
        let strengths = team_strengths(&teams, StrengthMode::Blended, &SimConfig::default());
        // bayes = 2.5/5 = 0.5, ppg_norm clamps to the floor (0/1 * 0.5 = 0).
        let expected = 0.6 * 0.5 + 0.4 * 0.1;
        assert!((strengths[&1] - expected).abs() < 1e-12);
        assert_eq!(strengths[&1], strengths[&2]);
    }

    #[test]
    fn laplace_win_rate_matches_formula() {
        let teams = vec![team(1, 5, 5, 1000.0)];
        let strengths = team_strengths(&teams, StrengthMode::WinRateOnly, &SimConfig::default());
        assert!((strengths[&1] - 7.0 / 14.0).abs() < 1e-12);
    }

    #[test]
    fn strength_is_monotonic_in_wins() {
        let cfg = SimConfig::default();
        for mode in [StrengthMode::Blended, StrengthMode::WinRateOnly] {
            let worse = team_strengths(&[team(1, 4, 6, 900.0)], mode, &cfg)[&1];
            let better = team_strengths(&[team(1, 5, 5, 900.0)], mode, &cfg)[&1];
            assert!(better > worse, "mode {mode:?}");
        }
    }
}
