//! WASM bindings for the session-draw and tournament pages

#![cfg(feature = "wasm")]

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::{
    build_bracket, classify_role, compute_standings, draw_teams, generate_group_stage,
    generate_round_robin, DrawConfig, GroupFormat, Legs, Match, Player, Team, TeamId,
};

fn parse<T: DeserializeOwned>(json: &str, what: &str) -> Result<T, JsError> {
    serde_json::from_str(json).map_err(|e| JsError::new(&format!("Invalid {}: {}", what, e)))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Draw balanced teams
///
/// # Arguments
/// * `players_json` - JSON array of players
/// * `config_json` - JSON draw config; empty string for defaults
#[wasm_bindgen]
pub fn draw_teams_json(players_json: &str, config_json: &str) -> Result<JsValue, JsError> {
    let players: Vec<Player> = parse(players_json, "players")?;
    let config: DrawConfig = if config_json.trim().is_empty() {
        DrawConfig::default()
    } else {
        parse(config_json, "draw config")?
    };

    let teams = draw_teams(&players, &config).map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&teams)
}

/// Round-robin calendar for a JSON array of team ids
#[wasm_bindgen]
pub fn round_robin_json(team_ids_json: &str, legs: u8) -> Result<JsValue, JsError> {
    let team_ids: Vec<TeamId> = parse(team_ids_json, "team ids")?;
    let legs = Legs::try_from(legs).map_err(|e| JsError::new(&e.to_string()))?;

    let rounds = generate_round_robin(&team_ids, legs).map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&rounds)
}

/// Grouped calendar; `format_json` may be empty for the standard format
#[wasm_bindgen]
pub fn group_stage_json(team_ids_json: &str, format_json: &str) -> Result<JsValue, JsError> {
    let team_ids: Vec<TeamId> = parse(team_ids_json, "team ids")?;
    let format: GroupFormat = if format_json.trim().is_empty() {
        GroupFormat::standard()
    } else {
        parse(format_json, "group format")?
    };

    let groups = generate_group_stage(&team_ids, &format).map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&groups)
}

/// Knockout bracket from six seeds, best first
#[wasm_bindgen]
pub fn bracket_json(seeds_json: &str) -> Result<JsValue, JsError> {
    let seeds: Vec<TeamId> = parse(seeds_json, "seeds")?;
    let bracket = build_bracket(&seeds).map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&bracket)
}

/// Group-stage table
#[wasm_bindgen]
pub fn standings_json(teams_json: &str, matches_json: &str) -> Result<JsValue, JsError> {
    let teams: Vec<Team> = parse(teams_json, "teams")?;
    let matches: Vec<Match> = parse(matches_json, "matches")?;
    let table = compute_standings(&teams, &matches).map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&table)
}

/// Bucket name for a roster label, e.g. `"DEFENDER"`
#[wasm_bindgen]
pub fn classify_role_label(label: &str) -> String {
    classify_role(Some(label)).name().to_string()
}
