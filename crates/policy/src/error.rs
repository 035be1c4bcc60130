//! crates/policy/src/error.rs
//!
//! Internal-consistency faults raised by tie-break policies.

use thiserror::Error;

/// Errors returned when a policy cannot select a transition.
///
/// Both variants indicate a contract violation rather than a recoverable
/// condition: the inputs to a policy are the very costs and match counts
/// being compared, so a standard policy can only fail to find its selection
/// criterion if the candidates were assembled incorrectly.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum PolicyError {
    /// No candidate transition achieved the computed minimum cost.
    #[error("no candidate transition achieved the minimum cost")]
    NoMinimumCost,
    /// No candidate transition attained the computed maximum match count.
    #[error("no candidate transition attained the maximum match count")]
    NoMaximumMatch,
}
