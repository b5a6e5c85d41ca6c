use serde::{Deserialize, Serialize};

use super::TeamId;

/// One future game that has not been played yet.
///
/// The pair is unordered: `home`/`away` are positional labels only and
/// carry no advantage. The same pair may appear more than once in a
/// remaining schedule when two teams still play each other twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemainingMatchup {
    pub home: TeamId,
    pub away: TeamId,
}

impl RemainingMatchup {
    pub fn new(home: TeamId, away: TeamId) -> Self {
        Self { home, away }
    }

    /// Order-insensitive pair equality.
    pub fn same_pair(&self, other: &RemainingMatchup) -> bool {
        (self.home == other.home && self.away == other.away)
            || (self.home == other.away && self.away == other.home)
    }
}

/// One scheduled game with display names, used for scenario reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledGame {
    pub home_id: TeamId,
    pub home_name: String,
    pub away_id: TeamId,
    pub away_name: String,
}

impl ScheduledGame {
    pub fn matchup(&self) -> RemainingMatchup {
        RemainingMatchup::new(self.home_id, self.away_id)
    }
}

/// The remaining schedule for one week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekMatchups {
    pub week: u32,
    pub matchups: Vec<ScheduledGame>,
}

/// League settings the engine needs from the upstream settings endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueSettings {
    /// Number of playoff-qualifying positions.
    pub playoff_slots: u32,
    pub current_week: u32,
    /// First playoff week; only weeks strictly before this hold
    /// regular-season games worth simulating.
    pub playoff_start_week: u32,
    pub season_end_week: u32,
}

/// Flatten per-week schedules into the flat remaining-matchup sequence the
/// season simulator consumes. Week order is preserved.
pub fn remaining_from_weeks(weeks: &[WeekMatchups]) -> Vec<RemainingMatchup> {
    weeks.iter().flat_map(|w| w.matchups.iter().map(ScheduledGame::matchup)).collect()
}
