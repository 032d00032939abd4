//! Group-stage table
//!
//! Recomputed from scratch on every call. Only completed matches with a round
//! number count; knockout matches never touch the table.

use std::collections::HashMap;

use tracing::warn;

use crate::error::Result;
use crate::model::{Match, StandingsRow, Team};
use crate::schedule::ensure_unique;

pub const POINTS_FOR_WIN: u32 = 3;
pub const POINTS_FOR_DRAW: u32 = 1;

/// League points earned by a side that scored `goals_for` and conceded `goals_against`
pub fn points_for(goals_for: u32, goals_against: u32) -> u32 {
    match goals_for.cmp(&goals_against) {
        std::cmp::Ordering::Greater => POINTS_FOR_WIN,
        std::cmp::Ordering::Equal => POINTS_FOR_DRAW,
        std::cmp::Ordering::Less => 0,
    }
}

impl StandingsRow {
    fn new(team: &Team) -> Self {
        Self {
            team: team.id.clone(),
            ..Self::default()
        }
    }

    fn record(&mut self, goals_for: u32, goals_against: u32) {
        // scores arrive from JSON unchecked
        self.played = self.played.saturating_add(1);
        self.goals_for = self.goals_for.saturating_add(goals_for);
        self.goals_against = self.goals_against.saturating_add(goals_against);
        self.goal_diff = self.goals_for as i64 - self.goals_against as i64;
        self.points = self.points.saturating_add(points_for(goals_for, goals_against));

        let tally = match goals_for.cmp(&goals_against) {
            std::cmp::Ordering::Greater => &mut self.wins,
            std::cmp::Ordering::Equal => &mut self.draws,
            std::cmp::Ordering::Less => &mut self.losses,
        };
        *tally = tally.saturating_add(1);
    }
}

/// Build the table for `teams` from `matches`.
///
/// Sorted by points, then goal difference, then goals scored, all descending.
/// Teams level on all three keep the order they had in `teams`; head-to-head
/// is not considered. Duplicate team ids are rejected.
pub fn compute_standings(teams: &[Team], matches: &[Match]) -> Result<Vec<StandingsRow>> {
    ensure_unique(teams.iter().map(|t| &t.id))?;

    let mut rows: Vec<StandingsRow> = teams.iter().map(StandingsRow::new).collect();
    let index: HashMap<&str, usize> = teams
        .iter()
        .enumerate()
        .map(|(i, t)| (t.id.as_str(), i))
        .collect();

    for m in matches.iter().filter(|m| m.is_completed() && m.is_group_stage()) {
        let (Some(team_a), Some(team_b), Some(score_a), Some(score_b)) =
            (&m.team_a, &m.team_b, m.score_a, m.score_b)
        else {
            warn!(match_id = %m.id, "Completed match without teams or score, skipped");
            continue;
        };
        let (Some(&a), Some(&b)) = (index.get(team_a.as_str()), index.get(team_b.as_str())) else {
            warn!(match_id = %m.id, "Match references a team outside the table, skipped");
            continue;
        };

        rows[a].record(score_a, score_b);
        rows[b].record(score_b, score_a);
    }

    // stable
    rows.sort_by(|x, y| {
        y.points
            .cmp(&x.points)
            .then(y.goal_diff.cmp(&x.goal_diff))
            .then(y.goals_for.cmp(&x.goals_for))
    });
    Ok(rows)
}
