#![deny(unsafe_code)]

//! Memoizing sequence comparator over the edit-distance engines.
//!
//! [`SequenceMatcher`] holds a pair of token sequences together with a
//! tie-break policy and an equality oracle, and lazily computes the edit
//! cost, the match count, and the opcode script on first access. Results
//! are memoized per sequence pair; reassigning either sequence invalidates
//! all three. Similarity ratios and matching-block summaries are derived
//! views over the memoized values.
//!
//! The cost/match accessors run only the cheap two-row engine when the
//! opcode script was never requested; requesting opcodes runs the
//! backpointer engine once and cross-checks its cost and match count
//! against anything cached earlier.
//!
//! # Example
//!
//! ```
//! use matcher::SequenceMatcher;
//!
//! let a = ["a", "b"];
//! let b = ["a", "b", "d", "c"];
//! let mut matcher = SequenceMatcher::new(&a, &b);
//!
//! assert_eq!(matcher.distance()?, 2);
//! assert!((matcher.ratio()? - 2.0 / 3.0).abs() < 1e-9);
//! assert_eq!(matcher.opcodes()?.len(), 4);
//! # Ok::<(), matcher::MatcherError>(())
//! ```
//!
//! # See also
//!
//! - `distance` crate for the engines driving the computation
//! - `policy` crate for the standard tie-break policies

mod blocks;
mod error;

use distance::{Opcode, compute_alignment, compute_distance, value_equal};
use policy::{EditKind, LowestCost, TieBreak};

pub use blocks::MatchingBlock;
pub use error::MatcherError;

/// Stateful comparator caching distance, match count, and opcodes.
///
/// The matcher borrows both sequences for its own lifetime; they are
/// immutable while held. A single instance is not meant for concurrent
/// mutation (there is no interior locking), but a fully memoized instance
/// is safe to read from multiple threads since every recomputation requires
/// `&mut self`.
pub struct SequenceMatcher<'s, T, P = LowestCost, F = fn(&T, &T) -> bool> {
    seq_a: &'s [T],
    seq_b: &'s [T],
    policy: P,
    tokens_equal: F,
    cost: Option<usize>,
    matches: Option<usize>,
    opcodes: Option<Vec<Opcode>>,
}

impl<'s, T: PartialEq> SequenceMatcher<'s, T> {
    /// Creates a matcher with the default policy and value-equality oracle.
    pub fn new(seq_a: &'s [T], seq_b: &'s [T]) -> Self {
        Self::with_parts(seq_a, seq_b, LowestCost, value_equal::<T> as fn(&T, &T) -> bool)
    }
}

impl<'s, T, P, F> SequenceMatcher<'s, T, P, F>
where
    P: TieBreak,
    F: Fn(&T, &T) -> bool,
{
    /// Creates a matcher from explicit sequences, policy, and oracle.
    pub fn with_parts(seq_a: &'s [T], seq_b: &'s [T], policy: P, tokens_equal: F) -> Self {
        Self {
            seq_a,
            seq_b,
            policy,
            tokens_equal,
            cost: None,
            matches: None,
            opcodes: None,
        }
    }

    /// Replaces the tie-break policy, discarding memoized results.
    pub fn with_policy<Q: TieBreak>(self, policy: Q) -> SequenceMatcher<'s, T, Q, F> {
        SequenceMatcher::with_parts(self.seq_a, self.seq_b, policy, self.tokens_equal)
    }

    /// Replaces the equality oracle, discarding memoized results.
    pub fn with_tokens_equal<G>(self, tokens_equal: G) -> SequenceMatcher<'s, T, P, G>
    where
        G: Fn(&T, &T) -> bool,
    {
        SequenceMatcher::with_parts(self.seq_a, self.seq_b, self.policy, tokens_equal)
    }

    /// Returns the current source sequence.
    #[must_use]
    pub const fn seq_a(&self) -> &'s [T] {
        self.seq_a
    }

    /// Returns the current target sequence.
    #[must_use]
    pub const fn seq_b(&self) -> &'s [T] {
        self.seq_b
    }

    /// Reassigns the source sequence and invalidates memoized results.
    pub fn set_seq_a(&mut self, seq_a: &'s [T]) {
        self.seq_a = seq_a;
        self.invalidate();
    }

    /// Reassigns the target sequence and invalidates memoized results.
    pub fn set_seq_b(&mut self, seq_b: &'s [T]) {
        self.seq_b = seq_b;
        self.invalidate();
    }

    /// Reassigns both sequences and invalidates memoized results.
    pub fn set_seqs(&mut self, seq_a: &'s [T], seq_b: &'s [T]) {
        self.seq_a = seq_a;
        self.seq_b = seq_b;
        self.invalidate();
    }

    /// Returns the edit distance, computing it on first access.
    ///
    /// Uses the two-row engine when no opcode script has been requested yet.
    pub fn distance(&mut self) -> Result<usize, MatcherError> {
        if let Some(cost) = self.cost {
            return Ok(cost);
        }
        let report = compute_distance(self.seq_a, self.seq_b, &self.policy, &self.tokens_equal)?;
        self.store(report.cost, report.matches)?;
        Ok(report.cost)
    }

    /// Returns the match count, computing it on first access.
    pub fn matches(&mut self) -> Result<usize, MatcherError> {
        if let Some(matches) = self.matches {
            return Ok(matches);
        }
        let report = compute_distance(self.seq_a, self.seq_b, &self.policy, &self.tokens_equal)?;
        self.store(report.cost, report.matches)?;
        Ok(report.matches)
    }

    /// Returns the opcode script, computing it on first access.
    ///
    /// Runs the backpointer engine once and memoizes its output. Cost and
    /// match count derived from the script are cross-checked against any
    /// values cached by an earlier [`distance`](Self::distance) or
    /// [`matches`](Self::matches) call.
    pub fn opcodes(&mut self) -> Result<&[Opcode], MatcherError> {
        if self.opcodes.is_none() {
            let alignment =
                compute_alignment(self.seq_a, self.seq_b, &self.policy, &self.tokens_equal)?;
            self.store(alignment.cost, alignment.matches)?;
            self.opcodes = Some(alignment.opcodes);
        }
        Ok(self.opcodes.as_deref().unwrap_or_default())
    }

    /// Returns the runs of aligned equal tokens as `(a_start, b_start, len)`.
    pub fn matching_blocks(&mut self) -> Result<Vec<MatchingBlock>, MatcherError> {
        let opcodes = self.opcodes()?;
        Ok(opcodes
            .iter()
            .filter(|opcode| opcode.kind == EditKind::Equal)
            .map(|opcode| MatchingBlock {
                a_start: opcode.a_start,
                b_start: opcode.b_start,
                len: opcode.a_end - opcode.a_start,
            })
            .collect())
    }

    /// Similarity ratio `2·matches / (len(a) + len(b))` in `[0, 1]`.
    ///
    /// Yields NaN when both sequences are empty.
    pub fn ratio(&mut self) -> Result<f64, MatcherError> {
        let matches = self.matches()?;
        let total = self.seq_a.len() + self.seq_b.len();
        Ok(2.0 * matches as f64 / total as f64)
    }

    /// Upper-bound estimate of [`ratio`](Self::ratio).
    ///
    /// This design derives it from the exact match count, so it is an alias
    /// rather than an independent, cheaper estimator.
    pub fn quick_ratio(&mut self) -> Result<f64, MatcherError> {
        self.ratio()
    }

    /// Fastest upper-bound estimate of [`ratio`](Self::ratio); also an alias.
    pub fn real_quick_ratio(&mut self) -> Result<f64, MatcherError> {
        self.ratio()
    }

    fn invalidate(&mut self) {
        self.cost = None;
        self.matches = None;
        self.opcodes = None;
    }

    /// Memoizes cost and match count, cross-checking cached values.
    fn store(&mut self, cost: usize, matches: usize) -> Result<(), MatcherError> {
        if let Some(cached) = self.cost {
            if cached != cost {
                return Err(MatcherError::CostMismatch {
                    cached,
                    recomputed: cost,
                });
            }
        }
        if let Some(cached) = self.matches {
            if cached != matches {
                return Err(MatcherError::MatchesMismatch {
                    cached,
                    recomputed: matches,
                });
            }
        }
        self.cost = Some(cost);
        self.matches = Some(matches);
        Ok(())
    }
}
