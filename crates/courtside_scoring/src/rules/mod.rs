//! Scoring rules for best-of-three tennis.
//!
//! Pure functions over caller-supplied game counts. Every operation is
//! total: malformed or incomplete input yields `false` or `None`, never
//! an error. Set validity is decided in exactly one place ([`is_valid_set`])
//! and everything else routes through it.

pub mod decider;
pub mod match_winner;
pub mod set;
pub mod tally;

pub use decider::{
    DECIDER_INDEX, FORCED_DECIDER_FORMAT, SETS_TO_WIN, SUPER_TIEBREAK_MARGIN,
    SUPER_TIEBREAK_TARGET, infer_super_tiebreak,
};
pub use match_winner::match_winner;
pub use set::{is_valid_set, set_winner};
pub use tally::{count_sets_won, needs_third_set, sets_played};
