//! Validation errors surfaced by the engine

use thiserror::Error;

use crate::model::{BracketSlot, PlayerId, TeamId};

/// Structurally invalid input. Raised before any output is produced.
///
/// Small pools and single-team schedules are not errors; they return a
/// best-effort result instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("Player {0} appears more than once in the pool")]
    DuplicatePlayer(PlayerId),

    #[error("Player {player} has skill level {level}, expected 1-5")]
    InvalidSkillLevel { player: PlayerId, level: u8 },

    #[error("Team {0} appears more than once")]
    DuplicateTeam(TeamId),

    #[error("Bracket needs exactly {expected} seeds, got {found}")]
    InvalidSeedCount { expected: usize, found: usize },

    #[error("Legs must be 1 or 2, got {0}")]
    InvalidLegs(u8),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("No match occupies bracket slot {0}")]
    UnknownSlot(BracketSlot),

    #[error("Unknown bracket slot label: {0}")]
    UnknownBracketSlot(String),

    #[error("Match {0} is already completed")]
    MatchAlreadyCompleted(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_value() {
        let err = EngineError::InvalidSeedCount { expected: 6, found: 5 };
        assert_eq!(err.to_string(), "Bracket needs exactly 6 seeds, got 5");

        let err = EngineError::UnknownSlot(BracketSlot::Semi2);
        assert_eq!(err.to_string(), "No match occupies bracket slot SEMI-2");

        let err = EngineError::InvalidSkillLevel { player: 7, level: 9 };
        assert!(err.to_string().contains("skill level 9"));
    }
}
