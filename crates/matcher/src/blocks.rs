//! crates/matcher/src/blocks.rs
//!
//! Matching-block view derived from equal opcodes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A run of aligned, mutually equal tokens.
///
/// `len` tokens starting at `a_start` in the source equal the `len` tokens
/// starting at `b_start` in the target. Blocks derived from an unmerged
/// opcode script have length 1 each.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatchingBlock {
    /// Start of the run in the source sequence.
    pub a_start: usize,
    /// Start of the run in the target sequence.
    pub b_start: usize,
    /// Number of matched tokens in the run.
    pub len: usize,
}

#[cfg(test)]
mod tests {
    use super::MatchingBlock;

    #[test]
    fn block_is_plain_data() {
        let block = MatchingBlock {
            a_start: 2,
            b_start: 5,
            len: 1,
        };
        let copy = block;
        assert_eq!(block, copy);
    }
}
