//! Tennis match scoring for club play.
//!
//! Pure, stateless rules for best-of-three singles:
//!
//! - [`is_valid_set`]: is a game score a completed, legal set?
//! - [`set_winner`]: who won that set?
//! - [`count_sets_won`] / [`needs_third_set`]: aggregate a list of sets
//! - [`match_winner`]: who won the match, including a 10-point super-tiebreak decider
//!
//! Scores are plain integers supplied by the caller. Every function is total:
//! incomplete or malformed scores come back as `false` or `None`.
//!
//! # Example
//!
//! ```
//! use courtside_scoring::{ScoreSheet, Side, match_winner, needs_third_set};
//!
//! assert!(needs_third_set(&[6, 4], &[4, 6]));
//! assert_eq!(match_winner(&[6, 4, 10], &[4, 6, 8]), Some(Side::A));
//!
//! let sheet: ScoreSheet = "6-3 2-6 7-10".parse().unwrap();
//! assert_eq!(sheet.winner(), Some(Side::B));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod invariants;
pub mod rules;
mod sheet;
mod types;

pub use invariants::{Invariant, InvariantSet, InvariantViolation, SheetInvariants};
pub use rules::{
    DECIDER_INDEX, FORCED_DECIDER_FORMAT, SETS_TO_WIN, count_sets_won, infer_super_tiebreak,
    is_valid_set, match_winner, needs_third_set, set_winner,
};
pub use sheet::{MatchSummary, ParseScoreError, ScoreSheet, SetOutcome};
pub use types::{SetFormat, SetTally, Side};
