//! crates/matcher/src/error.rs
//!
//! Faults surfaced by the memoizing comparator.

use distance::DistanceError;
use thiserror::Error;

/// Errors returned by [`SequenceMatcher`](crate::SequenceMatcher) accessors.
///
/// The mismatch variants are memoization-consistency faults: a recomputation
/// disagreed with a previously cached value. With immutable sequences and a
/// pure oracle and policy this cannot happen; observing one means token
/// contents changed behind the matcher's back (interior mutability) or the
/// supplied oracle/policy is not a pure function of its inputs.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum MatcherError {
    /// A fault propagated from the underlying engines.
    #[error(transparent)]
    Distance(#[from] DistanceError),
    /// A recomputed edit cost disagreed with the cached one.
    #[error("recomputed edit cost {recomputed} disagrees with cached {cached}")]
    CostMismatch {
        /// Previously memoized cost.
        cached: usize,
        /// Cost produced by the recomputation.
        recomputed: usize,
    },
    /// A recomputed match count disagreed with the cached one.
    #[error("recomputed match count {recomputed} disagrees with cached {cached}")]
    MatchesMismatch {
        /// Previously memoized match count.
        cached: usize,
        /// Match count produced by the recomputation.
        recomputed: usize,
    },
}
