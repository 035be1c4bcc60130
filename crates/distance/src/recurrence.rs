//! crates/distance/src/recurrence.rs
//!
//! Rolling-row state shared by both engines.
//!
//! The recurrence tracks two quantities per cell: the edit cost and the
//! number of matched pairs accumulated along the path the policy selected.
//! Only the previous and current rows are live at any time, so memory stays
//! proportional to the target sequence length regardless of which engine
//! drives the sweep.

use std::mem;

use policy::{Candidates, EditKind};

/// The four rolling rows of the DP recurrence.
pub(crate) struct Rows {
    prev_cost: Vec<usize>,
    curr_cost: Vec<usize>,
    prev_matches: Vec<usize>,
    curr_matches: Vec<usize>,
}

impl Rows {
    /// Creates the row state for a sweep with `columns` cells per row.
    ///
    /// The previous cost row starts as `0..columns` (reaching cell `(0, j)`
    /// takes `j` insertions) and every match row starts at zero.
    pub(crate) fn new(columns: usize) -> Self {
        Self {
            prev_cost: (0..columns).collect(),
            curr_cost: vec![0; columns],
            prev_matches: vec![0; columns],
            curr_matches: vec![0; columns],
        }
    }

    /// Seeds column 0 of the current row: reaching cell `(i, 0)` takes `i`
    /// deletions and matches nothing.
    pub(crate) fn begin_row(&mut self, i: usize) {
        self.curr_cost[0] = i;
        self.curr_matches[0] = 0;
    }

    /// Assembles the three candidate transitions into cell `(i, j)`.
    pub(crate) fn candidates(&self, j: usize, tokens_equal: bool) -> Candidates {
        Candidates {
            insert_cost: self.curr_cost[j - 1] + 1,
            delete_cost: self.prev_cost[j] + 1,
            substitute_cost: self.prev_cost[j - 1] + usize::from(!tokens_equal),
            insert_matches: self.curr_matches[j - 1],
            delete_matches: self.prev_matches[j],
            substitute_matches: self.prev_matches[j - 1] + usize::from(tokens_equal),
            tokens_equal,
        }
    }

    /// Stores the cost and match count of the selected transition at column `j`.
    pub(crate) fn record(&mut self, j: usize, kind: EditKind, candidates: &Candidates) {
        let (cost, matches) = match kind {
            EditKind::Equal | EditKind::Replace => {
                (candidates.substitute_cost, candidates.substitute_matches)
            }
            EditKind::Insert => (candidates.insert_cost, candidates.insert_matches),
            EditKind::Delete => (candidates.delete_cost, candidates.delete_matches),
        };
        self.curr_cost[j] = cost;
        self.curr_matches[j] = matches;
    }

    /// Promotes the current row to previous, recycling the old buffers.
    pub(crate) fn advance(&mut self) {
        mem::swap(&mut self.prev_cost, &mut self.curr_cost);
        mem::swap(&mut self.prev_matches, &mut self.curr_matches);
    }

    /// Final edit cost after the sweep: the last promoted row's last cell.
    pub(crate) fn final_cost(&self) -> usize {
        self.prev_cost[self.prev_cost.len() - 1]
    }

    /// Final match count after the sweep.
    pub(crate) fn final_matches(&self) -> usize {
        self.prev_matches[self.prev_matches.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::Rows;
    use policy::EditKind;

    #[test]
    fn initial_cost_row_counts_insertions() {
        let rows = Rows::new(4);
        assert_eq!(rows.prev_cost, vec![0, 1, 2, 3]);
        assert_eq!(rows.prev_matches, vec![0, 0, 0, 0]);
    }

    #[test]
    fn final_values_without_any_sweep_cover_the_empty_source() {
        // With no rows processed the "previous" row is still the boundary
        // row, so an empty source reports one insertion per target token.
        let rows = Rows::new(5);
        assert_eq!(rows.final_cost(), 4);
        assert_eq!(rows.final_matches(), 0);
    }

    #[test]
    fn record_stores_the_selected_transition() {
        let mut rows = Rows::new(2);
        rows.begin_row(1);
        let candidates = rows.candidates(1, true);
        assert_eq!(candidates.substitute_cost, 0);
        assert_eq!(candidates.substitute_matches, 1);
        rows.record(1, EditKind::Equal, &candidates);
        rows.advance();
        assert_eq!(rows.final_cost(), 0);
        assert_eq!(rows.final_matches(), 1);
    }
}
