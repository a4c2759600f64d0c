//! Best-of-three match resolution.

use super::decider::{DECIDER_INDEX, FORCED_DECIDER_FORMAT, SETS_TO_WIN};
use super::set::set_winner;
use super::tally::{count_sets_won, sets_played};
use crate::Side;
use tracing::{debug, instrument};

/// Decides the winner of a best-of-three match.
///
/// The first side to two sets wins, which can happen after only two sets.
/// Otherwise, if a third set exists, it is re-read under
/// [`FORCED_DECIDER_FORMAT`] and its winner, if any, takes the match.
/// `None` means the match is not decided by the given scores.
#[instrument(level = "debug")]
pub fn match_winner(scores_a: &[i32], scores_b: &[i32]) -> Option<Side> {
    let tally = count_sets_won(scores_a, scores_b);

    if tally.sets_a >= SETS_TO_WIN {
        debug!(%tally, "Side A reached two sets");
        return Some(Side::A);
    }
    if tally.sets_b >= SETS_TO_WIN {
        debug!(%tally, "Side B reached two sets");
        return Some(Side::B);
    }

    if sets_played(scores_a, scores_b) > DECIDER_INDEX {
        let games_a = scores_a[DECIDER_INDEX];
        let games_b = scores_b[DECIDER_INDEX];
        let decider = set_winner(games_a, games_b, FORCED_DECIDER_FORMAT);
        debug!(games_a, games_b, ?decider, "Re-read deciding set");
        return decider;
    }

    debug!(%tally, "Match undecided");
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_straight_sets() {
        assert_eq!(match_winner(&[6, 6], &[0, 0]), Some(Side::A));
        assert_eq!(match_winner(&[3, 5], &[6, 7]), Some(Side::B));
    }

    #[test]
    fn test_single_set_undecided() {
        assert_eq!(match_winner(&[6], &[4]), None);
        assert_eq!(match_winner(&[], &[]), None);
    }

    #[test]
    fn test_super_tiebreak_decider() {
        assert_eq!(match_winner(&[6, 4, 10], &[4, 6, 8]), Some(Side::A));
        assert_eq!(match_winner(&[4, 6, 7], &[6, 4, 10]), Some(Side::B));
    }

    #[test]
    fn test_standard_decider_counts_when_magnitude_rule_scores_it() {
        // The 6-2 third set is counted as a standard set, giving A two sets.
        assert_eq!(match_winner(&[6, 4, 6], &[4, 6, 2]), Some(Side::A));
    }

    #[test]
    fn test_forced_decider_rejects_short_third_set() {
        // First set is incomplete, so the tally stops at 1-1 and the 6-2
        // third set is re-read as a super-tiebreak, where it is not valid.
        assert_eq!(match_winner(&[6, 4, 6], &[5, 6, 2]), None);
    }

    #[test]
    fn test_forced_decider_resolves_unusual_tiebreak() {
        // Incomplete first set leaves A on one set, yet the forced re-read
        // of the 13-11 decider hands A the match.
        assert_eq!(match_winner(&[5, 4, 13], &[3, 6, 11]), Some(Side::A));
    }

    #[test]
    fn test_split_without_third_set() {
        assert_eq!(match_winner(&[6, 4], &[4, 6]), None);
    }
}
