//! Core domain types for match scoring.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the two competing sides in a match.
///
/// Player identity lives with the caller; the engine only knows
/// "the side whose games are listed first" and "the other one".
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Side {
    /// The side whose game counts are passed first.
    A,
    /// The side whose game counts are passed second.
    B,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// How a single set is scored.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum SetFormat {
    /// Advantage set to six games: 6-0..6-4, 7-5 or 7-6.
    #[default]
    #[display("standard")]
    Standard,
    /// Match tiebreak played first to ten, win by two.
    #[display("super-tiebreak")]
    SuperTiebreak,
}

impl SetFormat {
    /// Returns true for the first-to-ten format.
    pub fn is_super_tiebreak(self) -> bool {
        matches!(self, SetFormat::SuperTiebreak)
    }
}

impl From<bool> for SetFormat {
    fn from(is_super_tiebreak: bool) -> Self {
        if is_super_tiebreak {
            SetFormat::SuperTiebreak
        } else {
            SetFormat::Standard
        }
    }
}

/// Sets won by each side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct SetTally {
    /// Sets won by side A.
    pub sets_a: u32,
    /// Sets won by side B.
    pub sets_b: u32,
}

impl SetTally {
    /// Creates a tally from explicit counts.
    pub fn new(sets_a: u32, sets_b: u32) -> Self {
        Self { sets_a, sets_b }
    }

    /// Credits one set to `side`.
    #[instrument(level = "trace", skip(self))]
    pub fn record(&mut self, side: Side) {
        match side {
            Side::A => self.sets_a += 1,
            Side::B => self.sets_b += 1,
        }
    }

    /// Sets won by the given side.
    pub fn won_by(&self, side: Side) -> u32 {
        match side {
            Side::A => self.sets_a,
            Side::B => self.sets_b,
        }
    }

    /// Total decided sets.
    pub fn total(&self) -> u32 {
        self.sets_a + self.sets_b
    }

    /// The side with more sets, if either is ahead.
    pub fn leader(&self) -> Option<Side> {
        match self.sets_a.cmp(&self.sets_b) {
            std::cmp::Ordering::Greater => Some(Side::A),
            std::cmp::Ordering::Less => Some(Side::B),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// True when each side has taken exactly one set.
    pub fn is_level_at_one(&self) -> bool {
        self.sets_a == 1 && self.sets_b == 1
    }
}

impl std::fmt::Display for SetTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.sets_a, self.sets_b)
    }
}
