//! Six-team knockout bracket
//!
//! Seeds 1 and 2 skip the quarterfinals. Winners are carried forward by the
//! tournament director with [`place_team`]; [`advance_winners`] is an opt-in
//! helper that only fills empty slots.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::error::{EngineError, Result};
use crate::model::{BracketSlot, Match, Side, TeamId};

pub const BRACKET_SEEDS: usize = 6;

/// Where the winner of each feeder match goes
const ADVANCEMENT: [(BracketSlot, BracketSlot, Side); 4] = [
    (BracketSlot::Qf1, BracketSlot::Semi1, Side::B),
    (BracketSlot::Qf2, BracketSlot::Semi2, Side::B),
    (BracketSlot::Semi1, BracketSlot::Final1, Side::A),
    (BracketSlot::Semi2, BracketSlot::Final1, Side::B),
];

/// Build the bracket from seeds ordered best to weakest.
///
/// | Slot    | Side A   | Side B   |
/// |---------|----------|----------|
/// | QF-1    | seed 4   | seed 5   |
/// | QF-2    | seed 3   | seed 6   |
/// | SEMI-1  | seed 1   | QF-1 winner (manual) |
/// | SEMI-2  | seed 2   | QF-2 winner (manual) |
/// | FINAL-1 | -        | -        |
pub fn build_bracket(seeds: &[TeamId]) -> Result<Vec<Match>> {
    if seeds.len() != BRACKET_SEEDS {
        return Err(EngineError::InvalidSeedCount {
            expected: BRACKET_SEEDS,
            found: seeds.len(),
        });
    }
    let mut seen = HashSet::with_capacity(BRACKET_SEEDS);
    for seed in seeds {
        if !seen.insert(seed) {
            return Err(EngineError::DuplicateTeam(seed.clone()));
        }
    }

    let seed = |i: usize| Some(seeds[i].clone());
    let bracket = vec![
        Match::knockout(BracketSlot::Qf1, seed(3), seed(4)),
        Match::knockout(BracketSlot::Qf2, seed(2), seed(5)),
        Match::knockout(BracketSlot::Semi1, seed(0), None),
        Match::knockout(BracketSlot::Semi2, seed(1), None),
        Match::knockout(BracketSlot::Final1, None, None),
    ];

    debug!(top_seed = %seeds[0], "Knockout bracket built");
    Ok(bracket)
}

/// Put `team` on one side of the match in `slot`.
///
/// This is the supported way of advancing teams. No check is made that the
/// team actually won its previous match, so a director can override results.
pub fn place_team(
    matches: &[Match],
    slot: BracketSlot,
    side: Side,
    team: Option<TeamId>,
) -> Result<Vec<Match>> {
    let target = matches
        .iter()
        .position(|m| m.bracket_slot == Some(slot))
        .ok_or(EngineError::UnknownSlot(slot))?;
    if matches[target].is_completed() {
        return Err(EngineError::MatchAlreadyCompleted(matches[target].id.clone()));
    }

    let mut updated = matches.to_vec();
    match side {
        Side::A => updated[target].team_a = team.clone(),
        Side::B => updated[target].team_b = team.clone(),
    }

    info!(slot = %slot, side = ?side, team = ?team, "Bracket slot assigned");
    Ok(updated)
}

/// Copy decided feeder winners into empty downstream slots.
///
/// Draws, unplayed feeders, occupied slots and completed targets are left
/// alone, so anything a director placed by hand survives.
pub fn advance_winners(matches: &[Match]) -> Vec<Match> {
    let mut updated = matches.to_vec();

    for (from, to, side) in ADVANCEMENT {
        let winner = match find(&updated, from).and_then(Match::winner) {
            Some(w) => w.clone(),
            None => continue,
        };
        let Some(target) = updated.iter_mut().find(|m| m.bracket_slot == Some(to)) else {
            continue;
        };
        if target.is_completed() || target.team(side).is_some() {
            continue;
        }
        debug!(from = %from, to = %to, team = %winner, "Advancing winner");
        match side {
            Side::A => target.team_a = Some(winner),
            Side::B => target.team_b = Some(winner),
        }
    }

    updated
}

fn find(matches: &[Match], slot: BracketSlot) -> Option<&Match> {
    matches.iter().find(|m| m.bracket_slot == Some(slot))
}
