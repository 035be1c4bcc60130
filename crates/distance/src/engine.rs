//! crates/distance/src/engine.rs
//!
//! Two-row distance engine: cost and match count without reconstruction.

use std::ptr;

use policy::TieBreak;
#[cfg(feature = "tracing")]
use tracing::instrument;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::DistanceError;
use crate::recurrence::Rows;

/// Result of a distance-only sweep.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Distance {
    /// Minimum edit cost under the supplied policy.
    pub cost: usize,
    /// Matched pairs along the path the policy selected.
    ///
    /// Unlike the cost, this is not determined by the sequences alone: when
    /// several paths share the optimal cost, the policy decides which one's
    /// match count is retained.
    pub matches: usize,
}

/// Computes the edit distance and match count between two token sequences.
///
/// Runs the DP recurrence over two rolling rows, invoking `tokens_equal`
/// once per cell on the diagonal pair and `policy` once per cell to choose
/// among the candidate transitions. Memory is proportional to `b.len()`;
/// time is `O(a.len() · b.len())`.
///
/// Pointer-identical slices short-circuit to `(0, b.len())`, and an empty
/// sequence on either side resolves to pure insertions or deletions without
/// running the sweep.
///
/// # Errors
///
/// Propagates [`DistanceError::Policy`] when the policy violates its
/// selection contract.
#[cfg_attr(
    feature = "tracing",
    instrument(skip_all, fields(a_len = a.len(), b_len = b.len()), name = "compute_distance")
)]
pub fn compute_distance<T, P, F>(
    a: &[T],
    b: &[T],
    policy: &P,
    tokens_equal: F,
) -> Result<Distance, DistanceError>
where
    P: TieBreak,
    F: Fn(&T, &T) -> bool,
{
    if ptr::eq(a, b) {
        return Ok(Distance {
            cost: 0,
            matches: b.len(),
        });
    }
    if a.is_empty() {
        return Ok(Distance {
            cost: b.len(),
            matches: 0,
        });
    }
    if b.is_empty() {
        return Ok(Distance {
            cost: a.len(),
            matches: 0,
        });
    }

    let mut rows = Rows::new(b.len() + 1);
    for (i, a_token) in a.iter().enumerate() {
        rows.begin_row(i + 1);
        for (j, b_token) in b.iter().enumerate() {
            let equal = tokens_equal(a_token, b_token);
            let candidates = rows.candidates(j + 1, equal);
            let kind = policy.select(&candidates)?;
            rows.record(j + 1, kind, &candidates);
        }
        rows.advance();
    }

    Ok(Distance {
        cost: rows.final_cost(),
        matches: rows.final_matches(),
    })
}
