//! crates/policy/src/tiebreak.rs
//!
//! The policy abstraction the DP engines are generic over.

use crate::candidates::Candidates;
use crate::error::PolicyError;
use crate::kind::EditKind;

/// Selects one transition for a DP cell from the three candidates.
///
/// A policy is a pure decision rule: it inspects the candidate costs and
/// match counts and returns exactly one [`EditKind`]. It must report
/// [`EditKind::Equal`] only when `candidates.tokens_equal` is set and
/// [`EditKind::Replace`] only when it is not; both mean "take the diagonal
/// transition" and differ only in the recorded kind.
///
/// The standard policies are [`LowestCost`](crate::LowestCost) and
/// [`HighestMatch`](crate::HighestMatch). Custom decision rules either
/// implement the trait directly or wrap a closure in [`PolicyFn`].
pub trait TieBreak {
    /// Picks the transition to record for the cell.
    ///
    /// # Errors
    ///
    /// Returns a [`PolicyError`] when no candidate meets the policy's
    /// selection criterion. For the standard policies this is unreachable by
    /// construction and indicates corrupted candidate assembly.
    fn select(&self, candidates: &Candidates) -> Result<EditKind, PolicyError>;
}

/// Adapter turning a closure with the policy signature into a [`TieBreak`].
#[derive(Clone, Copy, Debug)]
pub struct PolicyFn<F>(pub F);

impl<F> TieBreak for PolicyFn<F>
where
    F: Fn(&Candidates) -> Result<EditKind, PolicyError>,
{
    fn select(&self, candidates: &Candidates) -> Result<EditKind, PolicyError> {
        (self.0)(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::{PolicyFn, TieBreak};
    use crate::candidates::Candidates;
    use crate::kind::EditKind;

    #[test]
    fn wrapped_closures_are_policies() {
        let always_delete = PolicyFn(|_: &Candidates| Ok(EditKind::Delete));
        let candidates = Candidates {
            insert_cost: 1,
            delete_cost: 1,
            substitute_cost: 1,
            insert_matches: 0,
            delete_matches: 0,
            substitute_matches: 0,
            tokens_equal: false,
        };
        assert_eq!(always_delete.select(&candidates), Ok(EditKind::Delete));
    }
}
