//! crates/policy/src/lowest_cost.rs
//!
//! The default tie-break policy: cheapest transition wins.

use crate::candidates::Candidates;
use crate::error::PolicyError;
use crate::kind::EditKind;
use crate::tiebreak::TieBreak;

/// Picks the transition with the minimum cost.
///
/// Candidates are tested in a fixed precedence order rather than compared
/// globally: the diagonal first, then insert, then delete. The first
/// transition whose cost equals the minimum is recorded, so on a full tie
/// the diagonal beats insert and insert beats delete. When the diagonal
/// wins it is reported as [`EditKind::Equal`] or [`EditKind::Replace`]
/// according to the oracle's verdict on the token pair.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LowestCost;

impl TieBreak for LowestCost {
    fn select(&self, candidates: &Candidates) -> Result<EditKind, PolicyError> {
        let min_cost = candidates.min_cost();
        if candidates.substitute_cost == min_cost {
            Ok(candidates.diagonal_kind())
        } else if candidates.insert_cost == min_cost {
            Ok(EditKind::Insert)
        } else if candidates.delete_cost == min_cost {
            Ok(EditKind::Delete)
        } else {
            Err(PolicyError::NoMinimumCost)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LowestCost;
    use crate::kind::EditKind;
    use crate::test_util::candidates;
    use crate::tiebreak::TieBreak;

    #[test]
    fn equal_when_diagonal_is_cheapest_and_pair_matches() {
        let c = candidates(2, 3, 1, 1, 1, 4, true);
        assert_eq!(LowestCost.select(&c), Ok(EditKind::Equal));
    }

    #[test]
    fn replace_when_diagonal_is_cheapest_and_pair_differs() {
        let c = candidates(2, 3, 1, 1, 1, 4, false);
        assert_eq!(LowestCost.select(&c), Ok(EditKind::Replace));
    }

    #[test]
    fn insert_when_insertion_is_cheapest() {
        let c = candidates(1, 3, 2, 5, 1, 1, false);
        assert_eq!(LowestCost.select(&c), Ok(EditKind::Insert));
    }

    #[test]
    fn delete_when_deletion_is_cheapest() {
        let c = candidates(3, 1, 2, 1, 5, 1, false);
        assert_eq!(LowestCost.select(&c), Ok(EditKind::Delete));
    }

    #[test]
    fn insert_wins_regardless_of_match_counts() {
        let c = candidates(1, 2, 3, 4, 4, 4, false);
        assert_eq!(LowestCost.select(&c), Ok(EditKind::Insert));
        let c = candidates(1, 2, 3, 6, 7, 8, false);
        assert_eq!(LowestCost.select(&c), Ok(EditKind::Insert));
    }

    #[test]
    fn diagonal_takes_precedence_on_a_full_cost_tie() {
        // All three cost the same; the diagonal is evaluated first even
        // though the delete path carries the better match count.
        let c = candidates(2, 2, 2, 3, 5, 1, false);
        assert_eq!(LowestCost.select(&c), Ok(EditKind::Replace));
    }
}
