// Copyright 2025 Cowboy AI, LLC.

//! Validated classification depth

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{LexiconError, LexiconResult};
use crate::taxonomy::MAX_DEPTH;

/// A positive taxonomy depth; the top-level keys sit at depth 1.
///
/// Depths above [`MAX_DEPTH`] are valid values; classifying at such a depth
/// simply yields no matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "usize")]
pub struct Depth(usize);

impl Depth {
    /// The top level of a taxonomy
    pub const TOP: Depth = Depth(1);

    /// Validate a depth, rejecting zero
    pub fn new(value: usize) -> LexiconResult<Self> {
        if value == 0 {
            return Err(LexiconError::InvalidDepth(
                "depth must be a positive integer, got 0".to_string(),
            ));
        }
        Ok(Self(value))
    }

    /// The raw depth value
    pub fn get(self) -> usize {
        self.0
    }

    /// Whether this depth lies beyond what a taxonomy may be queried at
    pub fn exceeds_max(self) -> bool {
        self.0 > MAX_DEPTH
    }
}

impl TryFrom<i64> for Depth {
    type Error = LexiconError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value <= 0 {
            return Err(LexiconError::InvalidDepth(format!(
                "depth must be a positive integer, got {value}"
            )));
        }
        usize::try_from(value)
            .map_err(|_| LexiconError::InvalidDepth(format!("depth out of range: {value}")))
            .and_then(Depth::new)
    }
}

impl From<Depth> for usize {
    fn from(depth: Depth) -> Self {
        depth.0
    }
}

impl FromStr for Depth {
    type Err = LexiconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| LexiconError::InvalidDepth(format!("not a number: {trimmed:?}")))?;
        Depth::try_from(value)
    }
}

impl Display for Depth {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
