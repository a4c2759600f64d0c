//! Third-set format rules.
//!
//! A best-of-three match may be settled by a 10-point super-tiebreak in
//! place of a full third set. Two separate rules decide how that set is
//! read, and they intentionally disagree:
//!
//! - [`infer_super_tiebreak`] is used while counting sets. It treats the
//!   third set as a super-tiebreak only when a side has ten or more.
//! - [`FORCED_DECIDER_FORMAT`] is used by [`match_winner`](fn@super::match_winner)
//!   when the first two sets are split. It reads the third set as a
//!   super-tiebreak regardless of its numbers, so a full 6-3 third set does
//!   not resolve the match there.

use crate::SetFormat;
use tracing::instrument;

/// Zero-based position of the deciding set.
pub const DECIDER_INDEX: usize = 2;

/// Sets a side must win to take a best-of-three match.
pub const SETS_TO_WIN: u32 = 2;

/// Points needed to win a super-tiebreak.
pub const SUPER_TIEBREAK_TARGET: i32 = 10;

/// Winning margin required in a super-tiebreak.
pub const SUPER_TIEBREAK_MARGIN: u32 = 2;

/// Format applied to the deciding set when resolving the match winner.
pub const FORCED_DECIDER_FORMAT: SetFormat = SetFormat::SuperTiebreak;

/// Guesses a set's format from its position and size.
///
/// Only the deciding set can be a super-tiebreak, and only when either
/// count has reached the super-tiebreak target.
#[instrument(level = "trace")]
pub fn infer_super_tiebreak(index: usize, games_a: i32, games_b: i32) -> SetFormat {
    let looks_like_tiebreak =
        games_a >= SUPER_TIEBREAK_TARGET || games_b >= SUPER_TIEBREAK_TARGET;
    SetFormat::from(index == DECIDER_INDEX && looks_like_tiebreak)
}
