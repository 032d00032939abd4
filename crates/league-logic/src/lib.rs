//! League Logic
//!
//! Match scheduling and team balancing for a recreational football club.
//! Every operation is a pure function of its inputs; persistence and
//! presentation belong to the calling application.
//! This crate is compiled to:
//! - Native (for the club server)
//! - WASM (for the session-draw page)

mod adjustment;
mod bracket;
mod config;
mod draw;
mod error;
mod model;
mod random;
mod role;
mod schedule;
mod standings;

#[cfg(feature = "wasm")]
mod wasm;

pub use adjustment::apply_adjustments;
pub use bracket::{advance_winners, build_bracket, place_team, BRACKET_SEEDS};
pub use config::{DrawConfig, EngineConfig, GroupFormat, Legs, ScheduleConfig};
pub use draw::{draw_teams, skill_spread, team_count};
pub use error::{EngineError, Result};
pub use model::{
    BracketSlot, Fixture, FixtureRound, GroupSchedule, ManualAdjustment, Match, MatchStatus,
    Player, PlayerId, PlayerTotals, Side, StandingsRow, Team, TeamId,
};
pub use random::SeededRng;
pub use role::{classify_role, RoleBucket};
pub use schedule::{flatten_to_matches, generate_group_stage, generate_round_robin};
pub use standings::{compute_standings, points_for, POINTS_FOR_DRAW, POINTS_FOR_WIN};
