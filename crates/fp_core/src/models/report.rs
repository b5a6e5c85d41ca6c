use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::TeamId;

/// Aggregated simulation outcome for one competitor.
///
/// Produced by a baseline or scenario run. `rank_dist[i]` is the fraction of
/// simulated seasons in which the competitor finished at rank `i + 1`; the
/// vector has one entry per competitor in the league and sums to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimResult {
    pub id: TeamId,
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub points_for: f64,
    pub rank: u32,
    /// Probability of finishing in a playoff-qualifying position.
    pub playoff_prob: f64,
    /// Probability of finishing dead last.
    pub last_place_prob: f64,
    /// Mean simulated finishing rank.
    pub avg_rank: f64,
    pub rank_dist: Vec<f64>,
}

/// Conditional playoff odds for one upcoming game.
///
/// The two maps give every competitor's playoff probability with the game's
/// result forced one way or the other. `stakes` is the combined swing the
/// two participants experience, a display-ordering heuristic only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioMatchup {
    pub home_id: TeamId,
    pub home_name: String,
    pub away_id: TeamId,
    pub away_name: String,
    pub home_baseline: f64,
    pub away_baseline: f64,
    pub if_home_wins: BTreeMap<TeamId, f64>,
    pub if_away_wins: BTreeMap<TeamId, f64>,
    pub stakes: f64,
}

/// All scenario matchups for one remaining week, in schedule order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekScenario {
    pub week: u32,
    pub matchups: Vec<ScenarioMatchup>,
}

/// The full output of a back-to-back baseline + scenario run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonReport {
    pub baseline: Vec<SimResult>,
    /// One entry per remaining regular-season week, ascending.
    pub weeks: Vec<WeekScenario>,
}
