//! Set counting across a match.

use super::decider::infer_super_tiebreak;
use super::set::set_winner;
use crate::SetTally;
use tracing::{debug, instrument};

/// Number of sets present in both score lists.
///
/// Trailing entries on the longer list are ignored.
pub fn sets_played(scores_a: &[i32], scores_b: &[i32]) -> usize {
    scores_a.len().min(scores_b.len())
}

/// Counts decided sets for each side.
///
/// Every overlapping set is scanned, even after the match is already
/// won. A set with no valid winner counts for neither side.
#[instrument(level = "debug")]
pub fn count_sets_won(scores_a: &[i32], scores_b: &[i32]) -> SetTally {
    let tally = scores_a
        .iter()
        .zip(scores_b)
        .enumerate()
        .filter_map(|(index, (&games_a, &games_b))| {
            let format = infer_super_tiebreak(index, games_a, games_b);
            set_winner(games_a, games_b, format)
        })
        .fold(SetTally::default(), |mut tally, side| {
            tally.record(side);
            tally
        });

    debug!(%tally, "Counted sets");
    tally
}

/// True when the first sets are split one apiece and a decider is due.
#[instrument(level = "debug")]
pub fn needs_third_set(scores_a: &[i32], scores_b: &[i32]) -> bool {
    count_sets_won(scores_a, scores_b).is_level_at_one()
}
