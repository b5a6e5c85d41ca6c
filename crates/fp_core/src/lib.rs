//! # fp_core - Season-Outcome Simulation Engine
//!
//! Monte Carlo engine estimating, for every competitor in a fantasy league:
//! playoff probability, last-place probability, the full distribution over
//! final finishing rank, and per-game "stakes" (how much each upcoming
//! matchup swings the participants' playoff odds).
//!
//! ## Features
//! - 100% reproducible runs (same seed = same report, even multithreaded)
//! - Stateless per invocation: standings in, report out, nothing cached
//! - Parallel trial execution on the rayon thread pool
//! - JSON API for easy integration with browser/dashboard hosts

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;

// Re-export main API surface
pub use api::{simulate_season_json, SimulationRequest, SimulationResponse, SCHEMA_VERSION};
pub use config::SimConfig;
pub use engine::{
    simulate_baseline, simulate_scenarios, simulate_season, StrengthMode, NEUTRAL_STRENGTH,
};
pub use error::{Result, SimError};
pub use models::{
    LeagueSettings, RemainingMatchup, ScenarioMatchup, ScheduledGame, SeasonReport, SimResult,
    TeamId, TeamRecord, WeekMatchups, WeekScenario,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
