//! Round-robin fixture generation (circle method)
//!
//! The first team stays fixed while the rest rotate one place per round.
//! Odd pools get a bye placeholder; whoever draws the bye sits the round out.

use std::collections::HashSet;

use tracing::debug;

use crate::config::{GroupFormat, Legs};
use crate::error::{EngineError, Result};
use crate::model::{Fixture, FixtureRound, GroupSchedule, Match, TeamId};

/// Full league calendar for `team_ids`, rounds numbered from 1.
///
/// Output order depends only on input order. Fewer than two teams yields no
/// rounds. Duplicate ids are rejected.
pub fn generate_round_robin(team_ids: &[TeamId], legs: Legs) -> Result<Vec<FixtureRound>> {
    ensure_unique(team_ids)?;

    if team_ids.len() < 2 {
        debug!(teams = team_ids.len(), "Not enough teams for a round robin");
        return Ok(Vec::new());
    }

    let first_leg = circle_rounds(team_ids);
    let round_count = first_leg.len() as u32;

    let mut rounds = first_leg.clone();
    if legs == Legs::Double {
        rounds.extend(first_leg.into_iter().map(|r| FixtureRound {
            round: r.round + round_count,
            fixtures: r
                .fixtures
                .into_iter()
                .map(|f| Fixture {
                    team_a: f.team_b,
                    team_b: f.team_a,
                })
                .collect(),
        }));
    }

    debug!(
        teams = team_ids.len(),
        rounds = rounds.len(),
        "Round robin generated"
    );
    Ok(rounds)
}

/// Single-leg rounds for an already validated list of at least two teams
fn circle_rounds(team_ids: &[TeamId]) -> Vec<FixtureRound> {
    // None is the bye
    let mut slots: Vec<Option<&TeamId>> = team_ids.iter().map(Some).collect();
    if slots.len() % 2 == 1 {
        slots.push(None);
    }
    let n = slots.len();

    let mut rounds = Vec::with_capacity(n - 1);
    for r in 0..n - 1 {
        let fixtures = (0..n / 2)
            .filter_map(|i| match (slots[i], slots[n - 1 - i]) {
                (Some(a), Some(b)) => Some(Fixture {
                    team_a: a.clone(),
                    team_b: b.clone(),
                }),
                _ => None,
            })
            .collect();
        rounds.push(FixtureRound {
            round: r as u32 + 1,
            fixtures,
        });

        if let Some(last) = slots.pop() {
            slots.insert(1, last);
        }
    }
    rounds
}

/// Group-stage calendar under the club's grouped format.
///
/// Small pools play as one group; larger pools are split in input order into
/// groups of at most `format.group_size`. Each group keeps only its first
/// `format.max_rounds_per_group` rounds.
pub fn generate_group_stage(team_ids: &[TeamId], format: &GroupFormat) -> Result<Vec<GroupSchedule>> {
    format.validate()?;
    ensure_unique(team_ids)?;

    if team_ids.is_empty() {
        return Ok(Vec::new());
    }

    let chunk_size = if team_ids.len() < format.whole_pool_below {
        team_ids.len()
    } else {
        format.group_size
    };

    let groups: Vec<GroupSchedule> = team_ids
        .chunks(chunk_size)
        .enumerate()
        .map(|(i, chunk)| {
            let rounds = if chunk.len() < 2 {
                Vec::new()
            } else {
                circle_rounds(chunk)
                    .into_iter()
                    .take(format.max_rounds_per_group as usize)
                    .collect()
            };
            GroupSchedule {
                group: i + 1,
                teams: chunk.to_vec(),
                rounds,
            }
        })
        .collect();

    debug!(
        teams = team_ids.len(),
        groups = groups.len(),
        max_rounds = format.max_rounds_per_group,
        "Group stage generated"
    );
    Ok(groups)
}

/// Scheduled matches for every group, ids `G{group}-R{round}-{n}`
pub fn flatten_to_matches(groups: &[GroupSchedule]) -> Vec<Match> {
    groups
        .iter()
        .flat_map(|g| {
            g.rounds.iter().flat_map(move |r| {
                r.to_matches().into_iter().map(move |mut m| {
                    m.id = format!("G{}-{}", g.group, m.id);
                    m
                })
            })
        })
        .collect()
}

pub(crate) fn ensure_unique<'a>(team_ids: impl IntoIterator<Item = &'a TeamId>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in team_ids {
        if !seen.insert(id) {
            return Err(EngineError::DuplicateTeam(id.clone()));
        }
    }
    Ok(())
}
