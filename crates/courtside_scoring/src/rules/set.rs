//! Single-set validity and winner.

use super::decider::{SUPER_TIEBREAK_MARGIN, SUPER_TIEBREAK_TARGET};
use crate::{SetFormat, Side};
use tracing::instrument;

/// Checks whether `games_a`-`games_b` is a completed, legal set.
///
/// Standard sets are valid at 6-0 through 6-4, 7-5 and 7-6. A super-tiebreak
/// is valid once either side reaches ten with a two point margin. Anything
/// else, including negative counts paired with a winning total, is judged
/// purely on those thresholds.
#[instrument(level = "trace")]
pub fn is_valid_set(games_a: i32, games_b: i32, format: SetFormat) -> bool {
    let high = games_a.max(games_b);
    let low = games_a.min(games_b);

    match format {
        SetFormat::SuperTiebreak => {
            high >= SUPER_TIEBREAK_TARGET && high.abs_diff(low) >= SUPER_TIEBREAK_MARGIN
        }
        SetFormat::Standard => matches!((high, low), (6, ..=4) | (7, 5) | (7, 6)),
    }
}

/// Returns the side that won a completed set.
///
/// `None` means the score is not a finished set under `format`.
#[instrument(level = "trace")]
pub fn set_winner(games_a: i32, games_b: i32, format: SetFormat) -> Option<Side> {
    if !is_valid_set(games_a, games_b, format) {
        return None;
    }

    match games_a.cmp(&games_b) {
        std::cmp::Ordering::Greater => Some(Side::A),
        std::cmp::Ordering::Less => Some(Side::B),
        std::cmp::Ordering::Equal => None,
    }
}
