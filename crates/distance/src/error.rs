//! crates/distance/src/error.rs
//!
//! Fault taxonomy for the DP engines.

use policy::PolicyError;
use thiserror::Error;

/// Errors surfaced by the distance and alignment engines.
///
/// Every variant is an internal-consistency fault: the algorithm guarantees
/// these states are unreachable when the policy honors its contract and the
/// backpointer table was filled by the sweep. None of them are retried or
/// masked.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum DistanceError {
    /// The tie-break policy failed to select a transition.
    #[error(transparent)]
    Policy(#[from] PolicyError),
    /// The backward walk reached a cell with no recorded operation.
    #[error("backpointer table has no operation recorded at ({row}, {column})")]
    MissingBackpointer {
        /// Row index of the untagged cell.
        row: usize,
        /// Column index of the untagged cell.
        column: usize,
    },
}
