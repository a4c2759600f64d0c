//! Invariants tying the sheet to how the rules read it.

use super::Invariant;
use crate::rules::{SETS_TO_WIN, infer_super_tiebreak, set_winner};
use crate::{ScoreSheet, SetTally};

/// Invariant: every scored set is complete under its inferred format.
pub struct EverySetDecided;

impl Invariant<ScoreSheet> for EverySetDecided {
    fn holds(sheet: &ScoreSheet) -> bool {
        sheet.pairs().enumerate().all(|(index, (games_a, games_b))| {
            let format = infer_super_tiebreak(index, games_a, games_b);
            set_winner(games_a, games_b, format).is_some()
        })
    }

    fn description() -> &'static str {
        "Every recorded set is a completed set"
    }
}

/// Invariant: no set is recorded after one side has won two.
pub struct NoSetsAfterDecision;

impl Invariant<ScoreSheet> for NoSetsAfterDecision {
    fn holds(sheet: &ScoreSheet) -> bool {
        let mut tally = SetTally::default();

        for (index, (games_a, games_b)) in sheet.pairs().enumerate() {
            if tally.sets_a >= SETS_TO_WIN || tally.sets_b >= SETS_TO_WIN {
                return false;
            }
            let format = infer_super_tiebreak(index, games_a, games_b);
            if let Some(side) = set_winner(games_a, games_b, format) {
                tally.record(side);
            }
        }

        true
    }

    fn description() -> &'static str {
        "No set is played after the match is won"
    }
}
