//! Season-outcome simulation engine.
//!
//! Three entry points, all stateless per invocation:
//! - [`simulate_baseline`]: the N-trial Monte Carlo completion of the
//!   remaining schedule.
//! - [`simulate_scenarios`]: forced-result reruns for every remaining game,
//!   measured against an existing baseline.
//! - [`simulate_season`]: both passes back-to-back for batch hosts.
//!
//! UI hosts typically call the first, display it, then schedule the second;
//! there is no partial-result contract: a run completes or is discarded.

pub mod game;
pub mod scenario;
pub mod season;
pub mod strength;

pub use strength::{StrengthMode, NEUTRAL_STRENGTH};

use crate::config::SimConfig;
use crate::error::Result;
use crate::models::{
    remaining_from_weeks, LeagueSettings, RemainingMatchup, SeasonReport, SimResult, TeamRecord,
    WeekMatchups, WeekScenario,
};

/// Run the baseline simulation over the remaining schedule.
///
/// Uses the blended strength model and `cfg.baseline_trials`. An empty
/// `remaining` slice is a valid input and yields a fully deterministic
/// result; note the engine cannot distinguish "schedule not yet published"
/// from "season over": callers must tell those apart before invoking it.
pub fn simulate_baseline(
    teams: &[TeamRecord],
    remaining: &[RemainingMatchup],
    settings: &LeagueSettings,
    cfg: &SimConfig,
) -> Result<Vec<SimResult>> {
    cfg.validate()?;
    let seed = cfg.resolve_seed();
    Ok(season::run_season(
        teams,
        remaining,
        settings.playoff_slots,
        cfg.baseline_trials,
        StrengthMode::Blended,
        cfg,
        seed,
    ))
}

/// Run the scenario pass against an already-computed baseline.
///
/// Only weeks strictly between the current week and the playoff start week
/// hold regular-season games, so anything outside that window is skipped.
pub fn simulate_scenarios(
    teams: &[TeamRecord],
    weeks: &[WeekMatchups],
    settings: &LeagueSettings,
    baseline: &[SimResult],
    cfg: &SimConfig,
) -> Result<Vec<WeekScenario>> {
    cfg.validate()?;
    let seed = cfg.resolve_seed();
    let in_window: Vec<WeekMatchups> = weeks
        .iter()
        .filter(|w| w.week > settings.current_week && w.week < settings.playoff_start_week)
        .cloned()
        .collect();
    Ok(scenario::build_week_scenarios(
        teams,
        &in_window,
        settings.playoff_slots,
        baseline,
        cfg,
        seed,
    ))
}

/// Baseline and scenario passes back-to-back, sharing one resolved seed so
/// the whole report reproduces from `cfg.seed` alone.
pub fn simulate_season(
    teams: &[TeamRecord],
    weeks: &[WeekMatchups],
    settings: &LeagueSettings,
    cfg: &SimConfig,
) -> Result<SeasonReport> {
    cfg.validate()?;
    let seed = cfg.resolve_seed();
    let seeded = SimConfig { seed: Some(seed), ..cfg.clone() };

    let in_window: Vec<WeekMatchups> = weeks
        .iter()
        .filter(|w| w.week > settings.current_week && w.week < settings.playoff_start_week)
        .cloned()
        .collect();
    let remaining = remaining_from_weeks(&in_window);

    let baseline = season::run_season(
        teams,
        &remaining,
        settings.playoff_slots,
        seeded.baseline_trials,
        StrengthMode::Blended,
        &seeded,
        seed,
    );
    let week_scenarios = scenario::build_week_scenarios(
        teams,
        &in_window,
        settings.playoff_slots,
        &baseline,
        &seeded,
        seed,
    );
    Ok(SeasonReport { baseline, weeks: week_scenarios })
}
