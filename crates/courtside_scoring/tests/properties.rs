//! Property-based tests for the scoring rules.

use courtside_scoring::{
    SetFormat, SetTally, Side, count_sets_won, is_valid_set, match_winner, needs_third_set,
    set_winner,
};
use proptest::prelude::*;

fn format() -> impl Strategy<Value = SetFormat> {
    any::<bool>().prop_map(SetFormat::from)
}

/// Game counts concentrated around real scores, with occasional outliers.
fn games() -> impl Strategy<Value = i32> {
    prop_oneof![
        8 => 0..=14i32,
        1 => -20..=40i32,
        1 => any::<i32>(),
    ]
}

fn scores() -> impl Strategy<Value = (Vec<i32>, Vec<i32>)> {
    (
        prop::collection::vec(games(), 0..=5),
        prop::collection::vec(games(), 0..=5),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Property: a level standard set is never complete.
    #[test]
    fn prop_tied_standard_set_invalid(g in any::<i32>()) {
        prop_assert!(!is_valid_set(g, g, SetFormat::Standard));
    }

    /// Property: a valid standard set has a two-game margin unless it is 7-6.
    #[test]
    fn prop_standard_margin(a in games(), b in games()) {
        if is_valid_set(a, b, SetFormat::Standard) {
            let (high, low) = (a.max(b), a.min(b));
            prop_assert!(a.abs_diff(b) >= 2 || (high == 7 && low == 6));
        }
    }

    /// Property: a set winner only exists for valid sets, and is the larger side.
    #[test]
    fn prop_winner_implies_valid(a in games(), b in games(), f in format()) {
        match set_winner(a, b, f) {
            Some(Side::A) => prop_assert!(is_valid_set(a, b, f) && a > b),
            Some(Side::B) => prop_assert!(is_valid_set(a, b, f) && b > a),
            None => prop_assert!(!is_valid_set(a, b, f) || a == b),
        }
    }

    /// Property: counted sets never exceed the overlapping length.
    #[test]
    fn prop_tally_bounded((a, b) in scores()) {
        let tally = count_sets_won(&a, &b);
        prop_assert!(tally.total() as usize <= a.len().min(b.len()));
    }

    /// Property: trailing unpaired sets are ignored.
    #[test]
    fn prop_tally_ignores_unpaired_tail(
        (a, b) in scores(),
        extra in prop::collection::vec(games(), 0..3),
    ) {
        let mut longer = a.clone();
        longer.extend(extra);
        let overlap = a.len().min(b.len());
        prop_assert_eq!(count_sets_won(&longer[..], &b[..overlap]), count_sets_won(&a, &b));
    }

    /// Property: the decider flag is exactly a one-all tally.
    #[test]
    fn prop_decider_iff_one_all((a, b) in scores()) {
        prop_assert_eq!(needs_third_set(&a, &b), count_sets_won(&a, &b) == SetTally::new(1, 1));
    }

    /// Property: a match winner has two sets unless the forced decider settled it.
    #[test]
    fn prop_match_winner_sets((a, b) in scores()) {
        if let Some(side) = match_winner(&a, &b) {
            let tally = count_sets_won(&a, &b);
            if tally.won_by(side) < 2 {
                prop_assert!(a.len().min(b.len()) >= 3);
                prop_assert_eq!(set_winner(a[2], b[2], SetFormat::SuperTiebreak), Some(side));
            }
        }
    }

    /// Property: every operation is deterministic.
    #[test]
    fn prop_deterministic((a, b) in scores()) {
        prop_assert_eq!(match_winner(&a, &b), match_winner(&a, &b));
        prop_assert_eq!(count_sets_won(&a, &b), count_sets_won(&a, &b));
    }
}
