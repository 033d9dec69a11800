//! Summary extraction - the handful of display values every frame shows.

use folio_inputs::{PictorialSlot, PictorialSummary, SequenceRecord};
use serde::{Deserialize, Serialize};

/// Number of histogram entries shown when no other limit is configured.
pub const DEFAULT_TOP_OPERATORS: usize = 6;

/// Pictorial counts projected into display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountsSnapshot {
    pub roots: String,
    pub leaves: String,
    pub buds: String,
    pub bud_state: String,
    pub bud_colour: String,
}

/// Project a pictorial summary onto the five displayed slots.
///
/// Never fails; absent values become `"?"`.
pub fn extract_counts(pict: &PictorialSummary) -> CountsSnapshot {
    let slot = |s: PictorialSlot| pict.slot_or_placeholder(s).to_string();
    CountsSnapshot {
        roots: slot(PictorialSlot::Roots),
        leaves: slot(PictorialSlot::Leaves),
        buds: slot(PictorialSlot::Buds),
        bud_state: slot(PictorialSlot::BudState),
        bud_colour: slot(PictorialSlot::BudColour),
    }
}

/// First `k` histogram entries formatted as `symbol×count`, in input order.
pub fn top_operators(seq: &SequenceRecord, k: usize) -> Vec<String> {
    seq.histogram()
        .iter()
        .take(k)
        .map(|entry| entry.to_string())
        .collect()
}

/// The shared snapshot line interpolating counts and frequent operators.
pub fn snapshot_line(counts: &CountsSnapshot, top_ops: &[String]) -> String {
    format!(
        "Snapshot: roots={}, leaves≈{}, buds={} ({}/{}); frequent ops: {}",
        counts.roots,
        counts.leaves,
        counts.buds,
        counts.bud_state,
        counts.bud_colour,
        top_ops.join(", ")
    )
}
