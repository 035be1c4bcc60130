//! crates/distance/src/backpointer.rs
//!
//! Full-table engine: distance, match count, and the reconstructed opcode
//! script.

use policy::{EditKind, TieBreak};
#[cfg(feature = "tracing")]
use tracing::instrument;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::DistanceError;
use crate::opcode::Opcode;
use crate::recurrence::Rows;
use crate::table::BackpointerTable;

/// Result of a full alignment sweep.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Alignment {
    /// Minimum edit cost under the supplied policy.
    pub cost: usize,
    /// Matched pairs along the path the policy selected.
    pub matches: usize,
    /// The selected path as per-token opcodes in forward order.
    pub opcodes: Vec<Opcode>,
}

/// Computes the edit distance together with the opcode script.
///
/// Runs the same recurrence as [`compute_distance`](crate::compute_distance)
/// while additionally recording the policy's selection for every cell in a
/// flat `(m + 1) × (n + 1)` backpointer arena, then walks the arena backward
/// from `(m, n)` to recover the alignment. Given the same policy and oracle
/// the reported cost and match count agree with the two-row engine. Memory
/// is proportional to `a.len() · b.len()`; the arena is discarded once the
/// opcodes are extracted.
///
/// Each emitted opcode spans at most one token per side; runs are not
/// merged.
///
/// # Errors
///
/// Propagates [`DistanceError::Policy`] when the policy violates its
/// selection contract, and surfaces [`DistanceError::MissingBackpointer`]
/// if the backward walk meets an untagged cell (unreachable for a table
/// filled by this sweep).
#[cfg_attr(
    feature = "tracing",
    instrument(skip_all, fields(a_len = a.len(), b_len = b.len()), name = "compute_alignment")
)]
pub fn compute_alignment<T, P, F>(
    a: &[T],
    b: &[T],
    policy: &P,
    tokens_equal: F,
) -> Result<Alignment, DistanceError>
where
    P: TieBreak,
    F: Fn(&T, &T) -> bool,
{
    let mut rows = Rows::new(b.len() + 1);
    let mut table = BackpointerTable::new(a.len() + 1, b.len() + 1);

    for (i, a_token) in a.iter().enumerate() {
        rows.begin_row(i + 1);
        for (j, b_token) in b.iter().enumerate() {
            let equal = tokens_equal(a_token, b_token);
            let candidates = rows.candidates(j + 1, equal);
            let kind = policy.select(&candidates)?;
            rows.record(j + 1, kind, &candidates);
            table.set(i + 1, j + 1, kind);
        }
        rows.advance();
    }

    let opcodes = collect_opcodes(&table)?;
    Ok(Alignment {
        cost: rows.final_cost(),
        matches: rows.final_matches(),
        opcodes,
    })
}

/// Walks the backpointer arena from `(m, n)` back to the origin.
///
/// Opcodes are collected in reverse and flipped once the origin is reached.
/// A `delete` reports both b-bounds at the decremented column: no target
/// token is consumed by a deletion, and consumers rely on that exact
/// convention.
fn collect_opcodes(table: &BackpointerTable) -> Result<Vec<Opcode>, DistanceError> {
    let mut row = table.rows() - 1;
    let mut column = table.columns() - 1;
    let mut opcodes = Vec::new();

    while row != 0 || column != 0 {
        let kind = table
            .get(row, column)
            .ok_or(DistanceError::MissingBackpointer { row, column })?;
        match kind {
            EditKind::Equal | EditKind::Replace => {
                opcodes.push(Opcode {
                    kind,
                    a_start: row.saturating_sub(1),
                    a_end: row,
                    b_start: column.saturating_sub(1),
                    b_end: column,
                });
                row -= 1;
                column -= 1;
            }
            EditKind::Insert => {
                opcodes.push(Opcode {
                    kind,
                    a_start: row,
                    a_end: row,
                    b_start: column.saturating_sub(1),
                    b_end: column,
                });
                column -= 1;
            }
            EditKind::Delete => {
                opcodes.push(Opcode {
                    kind,
                    a_start: row.saturating_sub(1),
                    a_end: row,
                    b_start: column.saturating_sub(1),
                    b_end: column.saturating_sub(1),
                });
                row -= 1;
            }
        }
    }

    opcodes.reverse();
    Ok(opcodes)
}
