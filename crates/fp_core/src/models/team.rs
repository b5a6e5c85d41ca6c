use serde::{Deserialize, Serialize};

use super::TeamId;

/// Immutable snapshot of one competitor's standing at simulation time.
///
/// Supplied fresh by the caller for every run; the engine never mutates a
/// record, scenario branches work on copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub id: TeamId,
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    /// Cumulative points scored so far this season.
    pub points_for: f64,
    /// Current standings rank, 1 = best.
    pub rank: u32,
}

impl TeamRecord {
    pub fn games_played(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    /// Points-for per game played; 0.0 before the first game.
    pub fn points_per_game(&self) -> f64 {
        let games = self.games_played();
        if games == 0 {
            0.0
        } else {
            self.points_for / f64::from(games)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(wins: u32, losses: u32, ties: u32, points_for: f64) -> TeamRecord {
        TeamRecord {
            id: 1,
            name: "Mean Machines".to_string(),
            wins,
            losses,
            ties,
            points_for,
            rank: 1,
        }
    }

    #[test]
    fn games_played_counts_all_outcomes() {
        assert_eq!(record(4, 3, 1, 0.0).games_played(), 8);
    }

    #[test]
    fn points_per_game_is_zero_before_first_game() {
        assert_eq!(record(0, 0, 0, 0.0).points_per_game(), 0.0);
    }

    #[test]
    fn points_per_game_divides_by_games() {
        let ppg = record(2, 2, 0, 480.0).points_per_game();
        assert!((ppg - 120.0).abs() < 1e-9);
    }
}
