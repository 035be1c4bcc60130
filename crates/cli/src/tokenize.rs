//! crates/cli/src/tokenize.rs
//!
//! Input splitting modes for the comparison.
//!
//! Splitting is input preparation, not matching policy: the engines only
//! ever see the resulting token slices.

use std::fmt;
use std::str::FromStr;

/// How file contents are split into comparable tokens.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TokenMode {
    /// One token per line (newline excluded).
    #[default]
    Lines,
    /// One token per whitespace-separated word.
    Words,
    /// One token per character.
    Chars,
}

impl TokenMode {
    /// The mode names accepted on the command line.
    pub const NAMES: [&'static str; 3] = ["lines", "words", "chars"];
}

impl fmt::Display for TokenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Lines => "lines",
            Self::Words => "words",
            Self::Chars => "chars",
        };
        f.write_str(name)
    }
}

impl FromStr for TokenMode {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "lines" => Ok(Self::Lines),
            "words" => Ok(Self::Words),
            "chars" => Ok(Self::Chars),
            other => Err(format!("unknown token mode '{other}'")),
        }
    }
}

/// Splits `content` into tokens borrowing from the input buffer.
#[must_use]
pub fn tokenize(content: &str, mode: TokenMode) -> Vec<&str> {
    match mode {
        TokenMode::Lines => content.lines().collect(),
        TokenMode::Words => content.split_whitespace().collect(),
        TokenMode::Chars => {
            let mut tokens = Vec::with_capacity(content.len());
            let mut indices = content.char_indices().peekable();
            while let Some((start, _)) = indices.next() {
                let end = indices
                    .peek()
                    .map_or(content.len(), |&(next_start, _)| next_start);
                tokens.push(&content[start..end]);
            }
            tokens
        }
    }
}
