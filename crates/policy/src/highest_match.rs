//! crates/policy/src/highest_match.rs
//!
//! Alternative tie-break policy: preserve the alignment with the most
//! matched pairs, breaking ties on cost.

use crate::candidates::Candidates;
use crate::error::PolicyError;
use crate::kind::EditKind;
use crate::tiebreak::TieBreak;

/// Picks the transition carrying the global maximum match count.
///
/// Among the candidates attaining the maximum, the cheapest wins. Candidates
/// are scanned in the fixed diagonal, insert, delete order and a later
/// candidate replaces an earlier one only when its cost is strictly lower,
/// so an exact tie on both match count and cost keeps whichever came first
/// in that order. The asymmetry is deliberate; recorded alignments depend
/// on this exact precedence.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct HighestMatch;

impl TieBreak for HighestMatch {
    fn select(&self, candidates: &Candidates) -> Result<EditKind, PolicyError> {
        let max_matches = candidates.max_matches();
        let ordered = [
            (
                candidates.diagonal_kind(),
                candidates.substitute_matches,
                candidates.substitute_cost,
            ),
            (
                EditKind::Insert,
                candidates.insert_matches,
                candidates.insert_cost,
            ),
            (
                EditKind::Delete,
                candidates.delete_matches,
                candidates.delete_cost,
            ),
        ];

        let mut best: Option<(EditKind, usize)> = None;
        for (kind, matches, cost) in ordered {
            if matches == max_matches && best.is_none_or(|(_, best_cost)| cost < best_cost) {
                best = Some((kind, cost));
            }
        }
        best.map(|(kind, _)| kind)
            .ok_or(PolicyError::NoMaximumMatch)
    }
}
