//! JSON boundary for non-Rust hosts (the browser dashboard).

mod json_api;

pub use json_api::{simulate_season_json, SimulationRequest, SimulationResponse, SCHEMA_VERSION};
