//! Structural invariants: sizes and signs of the entered numbers.

use super::Invariant;
use crate::ScoreSheet;
use crate::rules::DECIDER_INDEX;

/// Invariant: no side has a negative game count.
pub struct NonNegativeGames;

impl Invariant<ScoreSheet> for NonNegativeGames {
    fn holds(sheet: &ScoreSheet) -> bool {
        sheet
            .scores_a()
            .iter()
            .chain(sheet.scores_b())
            .all(|&games| games >= 0)
    }

    fn description() -> &'static str {
        "Game counts are never negative"
    }
}

/// Invariant: both sides list the same number of sets.
///
/// Unpaired trailing sets are silently ignored by the rules.
pub struct MatchedLengths;

impl Invariant<ScoreSheet> for MatchedLengths {
    fn holds(sheet: &ScoreSheet) -> bool {
        sheet.scores_a().len() == sheet.scores_b().len()
    }

    fn description() -> &'static str {
        "Both sides list the same number of sets"
    }
}

/// Invariant: a best-of-three sheet has at most three sets.
pub struct AtMostThreeSets;

impl Invariant<ScoreSheet> for AtMostThreeSets {
    fn holds(sheet: &ScoreSheet) -> bool {
        sheet.scores_a().len().max(sheet.scores_b().len()) <= DECIDER_INDEX + 1
    }

    fn description() -> &'static str {
        "A best-of-three match has at most three sets"
    }
}
