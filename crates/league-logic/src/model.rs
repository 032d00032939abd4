//! Plain data shared by the drawer, schedulers and standings
//!
//! Everything here is a snapshot handed in by the club application or a value
//! handed back to it. Nothing is persisted by this crate.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

pub type PlayerId = u64;
pub type TeamId = String;

fn default_skill_level() -> u8 {
    1
}

/// A player confirmed for a session or registered for a tournament
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub display_name: String,
    #[serde(default)]
    pub role_label: Option<String>,
    /// 1 (casual) to 5 (strongest)
    #[serde(default = "default_skill_level")]
    pub skill_level: u8,
}

impl Player {
    pub fn new(id: PlayerId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            role_label: None,
            skill_level: default_skill_level(),
        }
    }

    pub fn with_role(mut self, label: impl Into<String>) -> Self {
        self.role_label = Some(label.into());
        self
    }

    pub fn with_skill(mut self, level: u8) -> Self {
        self.skill_level = level;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(default)]
    pub roster: Vec<Player>,
}

impl Team {
    pub fn new(id: impl Into<TeamId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            roster: Vec::new(),
        }
    }

    /// Sum of roster skill levels
    pub fn skill_total(&self) -> u32 {
        self.roster.iter().map(|p| p.skill_level as u32).sum()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Completed,
}

/// Named position in the six-team knockout bracket
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BracketSlot {
    #[serde(rename = "QF-1")]
    Qf1,
    #[serde(rename = "QF-2")]
    Qf2,
    #[serde(rename = "SEMI-1")]
    Semi1,
    #[serde(rename = "SEMI-2")]
    Semi2,
    #[serde(rename = "FINAL-1")]
    Final1,
}

impl BracketSlot {
    pub const ALL: [BracketSlot; 5] = [
        BracketSlot::Qf1,
        BracketSlot::Qf2,
        BracketSlot::Semi1,
        BracketSlot::Semi2,
        BracketSlot::Final1,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BracketSlot::Qf1 => "QF-1",
            BracketSlot::Qf2 => "QF-2",
            BracketSlot::Semi1 => "SEMI-1",
            BracketSlot::Semi2 => "SEMI-2",
            BracketSlot::Final1 => "FINAL-1",
        }
    }
}

impl fmt::Display for BracketSlot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BracketSlot {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        BracketSlot::ALL
            .into_iter()
            .find(|slot| slot.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EngineError::UnknownBracketSlot(s.to_string()))
    }
}

/// Which side of a match a team occupies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

/// A group-stage or knockout fixture.
///
/// Exactly one of `round_number` / `bracket_slot` is set. Use
/// [`Match::group_stage`] or [`Match::knockout`] to build one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    pub round_number: Option<u32>,
    pub bracket_slot: Option<BracketSlot>,
    pub team_a: Option<TeamId>,
    pub team_b: Option<TeamId>,
    pub score_a: Option<u32>,
    pub score_b: Option<u32>,
    #[serde(default)]
    pub status: MatchStatus,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Match {
    pub fn group_stage(id: impl Into<String>, round: u32, team_a: TeamId, team_b: TeamId) -> Self {
        Self {
            id: id.into(),
            round_number: Some(round),
            bracket_slot: None,
            team_a: Some(team_a),
            team_b: Some(team_b),
            score_a: None,
            score_b: None,
            status: MatchStatus::Scheduled,
            completed_at: None,
        }
    }

    pub fn knockout(slot: BracketSlot, team_a: Option<TeamId>, team_b: Option<TeamId>) -> Self {
        Self {
            id: slot.label().to_string(),
            round_number: None,
            bracket_slot: Some(slot),
            team_a,
            team_b,
            score_a: None,
            score_b: None,
            status: MatchStatus::Scheduled,
            completed_at: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }

    /// True for matches that belong to a numbered league round
    pub fn is_group_stage(&self) -> bool {
        self.round_number.is_some()
    }

    /// Record a result. Completion is one-way: a completed match is rejected.
    pub fn complete(&self, score_a: u32, score_b: u32, at: DateTime<Utc>) -> Result<Match> {
        if self.is_completed() {
            return Err(EngineError::MatchAlreadyCompleted(self.id.clone()));
        }
        Ok(Match {
            score_a: Some(score_a),
            score_b: Some(score_b),
            status: MatchStatus::Completed,
            completed_at: Some(at),
            ..self.clone()
        })
    }

    /// Winner of a completed, decided match. Draws and unplayed matches give `None`.
    pub fn winner(&self) -> Option<&TeamId> {
        if !self.is_completed() {
            return None;
        }
        match (self.score_a?, self.score_b?) {
            (a, b) if a > b => self.team_a.as_ref(),
            (a, b) if b > a => self.team_b.as_ref(),
            _ => None,
        }
    }

    pub fn team(&self, side: Side) -> Option<&TeamId> {
        match side {
            Side::A => self.team_a.as_ref(),
            Side::B => self.team_b.as_ref(),
        }
    }
}

/// Home/away pairing inside a round
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fixture {
    pub team_a: TeamId,
    pub team_b: TeamId,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureRound {
    /// 1-based
    pub round: u32,
    pub fixtures: Vec<Fixture>,
}

impl FixtureRound {
    /// Materialize scheduled group-stage matches, ids `R{round}-{n}`
    pub fn to_matches(&self) -> Vec<Match> {
        self.fixtures
            .iter()
            .enumerate()
            .map(|(i, f)| {
                Match::group_stage(
                    format!("R{}-{}", self.round, i + 1),
                    self.round,
                    f.team_a.clone(),
                    f.team_b.clone(),
                )
            })
            .collect()
    }
}

/// One chunk of a grouped tournament with its capped schedule
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSchedule {
    /// 1-based
    pub group: usize,
    pub teams: Vec<TeamId>,
    pub rounds: Vec<FixtureRound>,
}

/// Derived table row; never stored
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub team: TeamId,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_diff: i64,
    pub points: u32,
}

/// Hand-entered correction to a player's season counters
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualAdjustment {
    pub player_id: PlayerId,
    #[serde(default)]
    pub goals: i32,
    #[serde(default)]
    pub assists: i32,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerTotals {
    pub player_id: PlayerId,
    pub goals: i64,
    pub assists: i64,
}
