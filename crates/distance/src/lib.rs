#![deny(unsafe_code)]

//! Edit-distance DP engines over token sequences.
//!
//! This crate implements the dynamic-programming core:
//! - [`compute_distance`] runs the two-row sweep and reports only the edit
//!   cost and match count, keeping just two rolling rows live
//! - [`compute_alignment`] runs the same recurrence over a full backpointer
//!   arena and additionally reconstructs the per-token [`Opcode`] script
//! - both engines are generic over the tie-break policy and the equality
//!   oracle; [`value_equal`] is the default oracle
//!
//! # Design
//!
//! The recurrence tracks cost and match count side by side; the policy from
//! the `policy` crate is invoked once per cell and decides which of the
//! competing transitions both engines record. Because of that, the match
//! count (and the reconstructed script) is a property of the policy as much
//! as of the inputs, while the cost is the familiar edit distance.
//!
//! # See also
//!
//! - `policy` crate for the standard tie-break policies
//! - `matcher` crate for the memoizing comparator built on these engines

mod backpointer;
mod engine;
mod error;
mod opcode;
mod oracle;
mod recurrence;
mod table;

pub use backpointer::{Alignment, compute_alignment};
pub use engine::{Distance, compute_distance};
pub use error::DistanceError;
pub use opcode::Opcode;
pub use oracle::value_equal;
