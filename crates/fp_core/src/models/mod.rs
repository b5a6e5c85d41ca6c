//! Data model for the season-outcome engine.
//!
//! Everything here is a plain value type: snapshots come in from the
//! caller's data-access layer, reports go back out to the presentation
//! layer, and nothing is mutated in place between runs.

mod report;
mod schedule;
mod team;

pub use report::{ScenarioMatchup, SeasonReport, SimResult, WeekScenario};
pub use schedule::{
    remaining_from_weeks, LeagueSettings, RemainingMatchup, ScheduledGame, WeekMatchups,
};
pub use team::TeamRecord;

/// Competitor identifier, as assigned by the upstream fantasy API.
pub type TeamId = u32;
