//! Hand-entered corrections to player season counters

use std::collections::HashMap;

use tracing::debug;

use crate::model::{ManualAdjustment, PlayerId, PlayerTotals};

/// Fold adjustments into recorded totals.
///
/// Rows keep their order; players that only appear in `adjustments` are
/// appended in the order first seen. Totals may go negative.
pub fn apply_adjustments(totals: &[PlayerTotals], adjustments: &[ManualAdjustment]) -> Vec<PlayerTotals> {
    let mut rows = totals.to_vec();
    let mut index: HashMap<PlayerId, usize> = rows
        .iter()
        .enumerate()
        .map(|(i, r)| (r.player_id, i))
        .collect();

    for adj in adjustments {
        let i = *index.entry(adj.player_id).or_insert_with(|| {
            rows.push(PlayerTotals {
                player_id: adj.player_id,
                ..PlayerTotals::default()
            });
            rows.len() - 1
        });
        rows[i].goals += adj.goals as i64;
        rows[i].assists += adj.assists as i64;
    }

    debug!(adjustments = adjustments.len(), "Manual adjustments applied");
    rows
}
