use serde::{Deserialize, Serialize};

use crate::config::SimConfig;
use crate::engine;
use crate::error::{Result, SimError};
use crate::models::{LeagueSettings, SeasonReport, TeamRecord, WeekMatchups};

pub const SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Deserialize)]
pub struct SimulationRequest {
    pub schema_version: u8,
    /// Overrides `config.seed` when present; omit both for a fresh seed.
    #[serde(default)]
    pub seed: Option<u64>,
    pub teams: Vec<TeamRecord>,
    pub settings: LeagueSettings,
    pub weeks: Vec<WeekMatchups>,
    #[serde(default)]
    pub config: SimConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SimulationResponse {
    pub schema_version: u8,
    pub report: SeasonReport,
}

/// Parse a [`SimulationRequest`], run both passes, and serialize the report.
///
/// The all-strings signature keeps the host binding trivial; malformed JSON
/// and schema mismatches come back as errors, never panics.
pub fn simulate_season_json(request_json: &str) -> Result<String> {
    let request: SimulationRequest = serde_json::from_str(request_json)?;
    if request.schema_version != SCHEMA_VERSION {
        return Err(SimError::SchemaVersion {
            expected: SCHEMA_VERSION,
            found: request.schema_version,
        });
    }

    let mut cfg = request.config;
    if request.seed.is_some() {
        cfg.seed = request.seed;
    }

    let report = engine::simulate_season(&request.teams, &request.weeks, &request.settings, &cfg)?;
    let response = SimulationResponse { schema_version: SCHEMA_VERSION, report };
    Ok(serde_json::to_string(&response)?)
}
