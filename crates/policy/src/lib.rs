#![deny(unsafe_code)]

//! Tie-break policies for edit-distance cell selection.
//!
//! Every cell of the edit-distance DP grid can be reached through three
//! transitions (insert, delete, diagonal), and more than one of them is
//! frequently optimal. The policy decides which transition is recorded, and
//! with it which of the equally cheap alignments survives into the opcode
//! script. This crate provides:
//!
//! - [`TieBreak`], the decision-rule abstraction the engines are generic over
//! - [`LowestCost`], the default policy (cheapest transition, fixed
//!   diagonal/insert/delete precedence)
//! - [`HighestMatch`], the alternative policy (most matched pairs, cost as
//!   the tie-breaker)
//! - [`Candidates`] and [`EditKind`], the cell-level vocabulary shared with
//!   the engines
//!
//! Custom decision rules implement [`TieBreak`] directly or wrap a closure
//! in [`PolicyFn`].
//!
//! # See also
//!
//! - `distance` crate for the engines that invoke these policies once per cell

mod candidates;
mod error;
mod highest_match;
mod kind;
mod lowest_cost;
#[cfg(test)]
mod test_util;
mod tiebreak;

pub use candidates::Candidates;
pub use error::PolicyError;
pub use highest_match::HighestMatch;
pub use kind::EditKind;
pub use lowest_cost::LowestCost;
pub use tiebreak::{PolicyFn, TieBreak};
