//! Caller-facing knobs
//!
//! Every field has a default matching the club's current format, so a caller
//! can deserialize `{}` or override a single value.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub draw: DrawConfig,
    pub schedule: ScheduleConfig,
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)
            .map_err(|e| EngineError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.draw.validate()?;
        self.schedule.groups.validate()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawConfig {
    pub target_team_size: usize,
    /// Pre-shuffle the pool before balancing. `None` keeps input order for ties.
    pub shuffle_seed: Option<[u8; 32]>,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            target_team_size: 5,
            shuffle_seed: None,
        }
    }
}

impl DrawConfig {
    pub fn with_team_size(target_team_size: usize) -> Self {
        Self {
            target_team_size,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.target_team_size == 0 {
            return Err(EngineError::InvalidConfig(
                "target_team_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Number of times each pair meets
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Legs {
    #[default]
    Single,
    /// Return fixtures with home and away swapped
    Double,
}

impl TryFrom<u8> for Legs {
    type Error = crate::error::EngineError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Legs::Single),
            2 => Ok(Legs::Double),
            other => Err(EngineError::InvalidLegs(other)),
        }
    }
}

impl From<Legs> for u8 {
    fn from(legs: Legs) -> u8 {
        match legs {
            Legs::Single => 1,
            Legs::Double => 2,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    pub legs: Legs,
    pub groups: GroupFormat,
}

/// Group-stage tournament format.
///
/// Pools smaller than `whole_pool_below` play as one group. Larger pools are
/// split into groups of at most `group_size`. Either way only the first
/// `max_rounds_per_group` rounds of each group are played.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupFormat {
    pub group_size: usize,
    pub whole_pool_below: usize,
    pub max_rounds_per_group: u32,
}

impl GroupFormat {
    /// Current club format: groups of 4, three rounds each
    pub fn standard() -> Self {
        Self {
            group_size: 4,
            whole_pool_below: 6,
            max_rounds_per_group: 3,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.group_size < 2 {
            return Err(EngineError::InvalidConfig(format!(
                "group_size must be at least 2, got {}",
                self.group_size
            )));
        }
        if self.max_rounds_per_group == 0 {
            return Err(EngineError::InvalidConfig(
                "max_rounds_per_group must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for GroupFormat {
    fn default() -> Self {
        Self::standard()
    }
}
