//! crates/policy/src/test_util.rs
//!
//! Shared fixtures for the policy unit tests.

use crate::candidates::Candidates;

/// Builds a candidate set from the positional layout used throughout the
/// test vectors: insert/delete/substitute costs, then the three match
/// counts, then the oracle verdict.
pub(crate) fn candidates(
    insert_cost: usize,
    delete_cost: usize,
    substitute_cost: usize,
    insert_matches: usize,
    delete_matches: usize,
    substitute_matches: usize,
    tokens_equal: bool,
) -> Candidates {
    Candidates {
        insert_cost,
        delete_cost,
        substitute_cost,
        insert_matches,
        delete_matches,
        substitute_matches,
        tokens_equal,
    }
}
