//! crates/policy/src/kind.rs
//!
//! Edit operation tags shared by the policies, the engines, and the
//! reconstructed opcode scripts.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The four edit operations an alignment can be built from.
///
/// `Equal` and `Replace` both consume one token from each sequence (the
/// diagonal transition); they differ only in whether the consumed pair
/// compared equal under the oracle. `Insert` consumes a token from the
/// target sequence alone, `Delete` from the source sequence alone.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EditKind {
    /// Consume one target token without consuming a source token.
    Insert,
    /// Consume one source token without consuming a target token.
    Delete,
    /// Consume a source/target pair that compared equal.
    Equal,
    /// Consume a source/target pair that compared unequal.
    Replace,
}

impl EditKind {
    /// Returns the lowercase name used whenever a kind is rendered externally.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Insert => "insert",
            Self::Delete => "delete",
            Self::Equal => "equal",
            Self::Replace => "replace",
        }
    }

    /// Reports whether the kind is a diagonal transition (`Equal` or `Replace`).
    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        matches!(self, Self::Equal | Self::Replace)
    }
}

impl fmt::Display for EditKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
