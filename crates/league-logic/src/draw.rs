//! Balanced team draw for pick-up sessions
//!
//! Greedy slot-and-skill fill: players are bucketed by role, each bucket is
//! sorted strongest first, and buckets are dealt out in a fixed order
//! (goalkeepers, defenders, midfielders, attackers, then everyone else).
//! Each player goes to the smallest team, ties broken by lowest skill sum.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::config::DrawConfig;
use crate::error::{EngineError, Result};
use crate::model::{Player, Team};
use crate::random::SeededRng;
use crate::role::{classify_role, RoleBucket};

/// Below this many players a two-sided match is not possible
const MIN_PLAYERS_FOR_TWO_TEAMS: usize = 4;

/// How many teams a pool of `player_count` is split into
///
/// - 0 players: 0 teams
/// - fewer than 4: everyone on one team
/// - otherwise `player_count / target_team_size`, but never fewer than 2
pub fn team_count(player_count: usize, target_team_size: usize) -> usize {
    if player_count == 0 {
        return 0;
    }
    if player_count < MIN_PLAYERS_FOR_TWO_TEAMS {
        return 1;
    }
    (player_count / target_team_size.max(1)).max(2)
}

/// Split a pool of players into roster-balanced teams.
///
/// Fails only on structurally invalid input (duplicate ids, skill outside
/// 1..=5, zero team size). The input slice is never modified.
pub fn draw_teams(players: &[Player], config: &DrawConfig) -> Result<Vec<Team>> {
    config.validate()?;
    validate_pool(players)?;

    if players.is_empty() {
        return Ok(Vec::new());
    }

    let num_teams = team_count(players.len(), config.target_team_size);
    if players.len() < MIN_PLAYERS_FOR_TWO_TEAMS {
        warn!(
            players = players.len(),
            "Pool too small for two sides, drawing a single team"
        );
    }

    let mut pool: Vec<&Player> = players.iter().collect();
    if let Some(seed) = &config.shuffle_seed {
        SeededRng::new(seed, 0).shuffle(&mut pool);
    }

    let mut buckets: [Vec<&Player>; 5] = Default::default();
    for player in pool {
        let bucket = classify_role(player.role_label.as_deref());
        buckets[bucket.index()].push(player);
    }

    let mut teams: Vec<Team> = (1..=num_teams)
        .map(|n| Team::new(format!("team-{}", n), format!("Team {}", n)))
        .collect();
    let mut skill_sums = vec![0u32; num_teams];

    for bucket in RoleBucket::DRAW_ORDER {
        let members = &mut buckets[bucket.index()];
        // stable: equal skill keeps pool order
        members.sort_by(|a, b| b.skill_level.cmp(&a.skill_level));

        for player in members.iter() {
            let target = pick_team(&teams, &skill_sums);
            skill_sums[target] += player.skill_level as u32;
            teams[target].roster.push((*player).clone());
        }
    }

    debug!(
        players = players.len(),
        teams = num_teams,
        spread = skill_spread(&teams),
        "Team draw complete"
    );

    Ok(teams)
}

/// Fewest players first, then lowest skill sum, then lowest index
fn pick_team(teams: &[Team], skill_sums: &[u32]) -> usize {
    (0..teams.len())
        .min_by_key(|&i| (teams[i].roster.len(), skill_sums[i], i))
        .unwrap_or(0)
}

fn validate_pool(players: &[Player]) -> Result<()> {
    let mut seen = HashSet::with_capacity(players.len());
    for player in players {
        if !seen.insert(player.id) {
            return Err(EngineError::DuplicatePlayer(player.id));
        }
        if !(1..=5).contains(&player.skill_level) {
            return Err(EngineError::InvalidSkillLevel {
                player: player.id,
                level: player.skill_level,
            });
        }
    }
    Ok(())
}

/// Difference between the strongest and weakest team's skill sum
pub fn skill_spread(teams: &[Team]) -> u32 {
    let totals = teams.iter().map(Team::skill_total);
    match (totals.clone().max(), totals.min()) {
        (Some(max), Some(min)) => max - min,
        _ => 0,
    }
}
