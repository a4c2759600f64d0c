//! Recorded per-set scores for one match.
//!
//! A [`ScoreSheet`] is what the booking screens hand over once a match is
//! finished: games won by each side, set by set. It owns its scores and
//! delegates every decision to [`crate::rules`].

use crate::invariants::{InvariantSet, InvariantViolation, SheetInvariants};
use crate::rules::{
    count_sets_won, infer_super_tiebreak, match_winner, needs_third_set, set_winner,
};
use crate::{SetFormat, SetTally, Side};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, instrument, warn};

/// Games per set for both sides of a match.
///
/// Index `i` holds set `i + 1`. Lists of different lengths are kept as
/// entered; only the overlapping prefix is scored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreSheet {
    /// Games won by side A in each set.
    scores_a: Vec<i32>,
    /// Games won by side B in each set.
    scores_b: Vec<i32>,
}

/// How one recorded set was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SetOutcome {
    /// One-based set number.
    pub number: usize,
    /// Games won by side A.
    pub games_a: i32,
    /// Games won by side B.
    pub games_b: i32,
    /// Format inferred from the set's position and size.
    pub format: SetFormat,
    /// Winner under that format, if the set is complete.
    pub winner: Option<Side>,
}

/// Everything the engine can say about a sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MatchSummary {
    /// Sets won per side.
    pub tally: SetTally,
    /// Match winner, if decided.
    pub winner: Option<Side>,
    /// True when the sets are split one apiece.
    pub needs_third_set: bool,
    /// Per-set breakdown.
    pub sets: Vec<SetOutcome>,
}

impl ScoreSheet {
    /// Creates a sheet from the two per-set game lists.
    #[instrument(level = "trace")]
    pub fn new(scores_a: Vec<i32>, scores_b: Vec<i32>) -> Self {
        Self { scores_a, scores_b }
    }

    /// Creates a sheet from `(games_a, games_b)` pairs.
    #[instrument(level = "trace")]
    pub fn from_sets(sets: &[(i32, i32)]) -> Self {
        let (scores_a, scores_b) = sets.iter().copied().unzip();
        Self { scores_a, scores_b }
    }

    /// Games won by side A, as entered.
    pub fn scores_a(&self) -> &[i32] {
        &self.scores_a
    }

    /// Games won by side B, as entered.
    pub fn scores_b(&self) -> &[i32] {
        &self.scores_b
    }

    /// Number of sets present for both sides.
    pub fn sets_played(&self) -> usize {
        crate::rules::sets_played(&self.scores_a, &self.scores_b)
    }

    /// True when no set is present for both sides.
    pub fn is_empty(&self) -> bool {
        self.sets_played() == 0
    }

    /// Iterates over `(games_a, games_b)` for every scored set.
    pub fn pairs(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.scores_a.iter().copied().zip(self.scores_b.iter().copied())
    }

    /// Appends one set.
    pub fn push(&mut self, games_a: i32, games_b: i32) {
        self.scores_a.push(games_a);
        self.scores_b.push(games_b);
    }

    /// Sets won per side.
    #[instrument(level = "debug", skip(self), fields(sheet = %self))]
    pub fn tally(&self) -> SetTally {
        count_sets_won(&self.scores_a, &self.scores_b)
    }

    /// True when a deciding set is due.
    #[instrument(level = "debug", skip(self), fields(sheet = %self))]
    pub fn needs_third_set(&self) -> bool {
        needs_third_set(&self.scores_a, &self.scores_b)
    }

    /// Match winner, if decided.
    #[instrument(level = "debug", skip(self), fields(sheet = %self))]
    pub fn winner(&self) -> Option<Side> {
        match_winner(&self.scores_a, &self.scores_b)
    }

    /// Reads every scored set with its inferred format.
    #[instrument(level = "debug", skip(self), fields(sheet = %self))]
    pub fn outcomes(&self) -> Vec<SetOutcome> {
        self.pairs()
            .enumerate()
            .map(|(index, (games_a, games_b))| {
                let format = infer_super_tiebreak(index, games_a, games_b);
                SetOutcome {
                    number: index + 1,
                    games_a,
                    games_b,
                    format,
                    winner: set_winner(games_a, games_b, format),
                }
            })
            .collect()
    }

    /// Collects tally, winner, decider flag and per-set outcomes.
    #[instrument(skip(self), fields(sheet = %self))]
    pub fn summary(&self) -> MatchSummary {
        let summary = MatchSummary {
            tally: self.tally(),
            winner: self.winner(),
            needs_third_set: self.needs_third_set(),
            sets: self.outcomes(),
        };
        debug!(tally = %summary.tally, winner = ?summary.winner, "Summarised sheet");
        summary
    }

    /// Checks the sheet against [`SheetInvariants`].
    ///
    /// Advisory only: a sheet with violations still scores exactly as the
    /// rules read it.
    #[instrument(skip(self), fields(sheet = %self))]
    pub fn audit(&self) -> Result<(), Vec<InvariantViolation>> {
        let result = SheetInvariants::check_all(self);
        if let Err(violations) = &result {
            warn!(count = violations.len(), "Score sheet failed audit");
        }
        result
    }
}

impl std::fmt::Display for ScoreSheet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, (games_a, games_b)) in self.pairs().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}-{}", games_a, games_b)?;
        }
        Ok(())
    }
}

/// A set token in score notation could not be read.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseScoreError {
    /// Token is not of the form `a-b`.
    #[display("Set {:?} is not in games-games form", _0)]
    MissingSeparator(#[error(not(source))] String),

    /// One side of the token is not an integer.
    #[display("Set {:?} has a non-numeric game count", _0)]
    InvalidGames(#[error(not(source))] String),
}

impl FromStr for ScoreSheet {
    type Err = ParseScoreError;

    /// Parses notation such as `6-4 4-6 10-8` or `6-4, 4-6, 10-8`.
    ///
    /// Empty input gives an empty sheet. A leading minus sign on a count
    /// is read as a negative number, so `-1-6` is `(-1, 6)`.
    #[instrument(level = "debug")]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut sheet = ScoreSheet::default();

        for token in s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
        {
            let (games_a, games_b) = parse_set(token)?;
            sheet.push(games_a, games_b);
        }

        debug!(sets = sheet.sets_played(), "Parsed score notation");
        Ok(sheet)
    }
}

/// Splits `a-b` on the first dash that is not a sign.
fn parse_set(token: &str) -> Result<(i32, i32), ParseScoreError> {
    let split_at = token
        .char_indices()
        .skip(1)
        .find(|&(_, c)| c == '-')
        .map(|(index, _)| index)
        .ok_or_else(|| ParseScoreError::MissingSeparator(token.to_string()))?;

    let (left, right) = (&token[..split_at], &token[split_at + 1..]);
    let parse = |games: &str| {
        games
            .parse::<i32>()
            .map_err(|_| ParseScoreError::InvalidGames(token.to_string()))
    };

    Ok((parse(left)?, parse(right)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_space_and_comma_separated() {
        let spaced: ScoreSheet = "6-4 4-6 10-8".parse().unwrap();
        let commas: ScoreSheet = "6-4,4-6, 10-8".parse().unwrap();
        assert_eq!(spaced, commas);
        assert_eq!(spaced.scores_a(), &[6, 4, 10]);
        assert_eq!(spaced.scores_b(), &[4, 6, 8]);
    }

    #[test]
    fn test_parse_negative_counts() {
        let sheet: ScoreSheet = "-1-6 6--2".parse().unwrap();
        assert_eq!(sheet.scores_a(), &[-1, 6]);
        assert_eq!(sheet.scores_b(), &[6, -2]);
    }

    #[test]
    fn test_parse_errors_name_token() {
        let err = "6-4 64".parse::<ScoreSheet>().unwrap_err();
        assert_eq!(err, ParseScoreError::MissingSeparator("64".to_string()));

        let err = "6-x".parse::<ScoreSheet>().unwrap_err();
        assert!(err.to_string().contains("6-x"));
    }

    #[test]
    fn test_display_round_trips_notation() {
        let sheet = ScoreSheet::from_sets(&[(7, 6), (3, 6), (10, 12)]);
        assert_eq!(sheet.to_string(), "7-6 3-6 10-12");
    }

    #[test]
    fn test_mismatched_lengths_keep_overlap() {
        let sheet = ScoreSheet::new(vec![6, 6, 6], vec![2]);
        assert_eq!(sheet.sets_played(), 1);
        assert_eq!(sheet.pairs().collect::<Vec<_>>(), vec![(6, 2)]);
        assert_eq!(sheet.to_string(), "6-2");
    }

    #[test]
    fn test_outcomes_infer_format() {
        let sheet = ScoreSheet::from_sets(&[(6, 4), (5, 7), (10, 7)]);
        let outcomes = sheet.outcomes();
        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].format, SetFormat::Standard);
        assert_eq!(outcomes[1].winner, Some(Side::B));
        assert_eq!(outcomes[2].number, 3);
        assert_eq!(outcomes[2].format, SetFormat::SuperTiebreak);
        assert_eq!(outcomes[2].winner, Some(Side::A));
    }

    #[test]
    fn test_summary_matches_rules() {
        let sheet = ScoreSheet::from_sets(&[(6, 4), (4, 6)]);
        let summary = sheet.summary();
        assert_eq!(summary.tally, SetTally::new(1, 1));
        assert!(summary.needs_third_set);
        assert_eq!(summary.winner, None);
        assert!(!sheet.is_empty());
    }

    #[test]
    fn test_audit_flags_sweep_with_extra_set() {
        let clean = ScoreSheet::from_sets(&[(6, 1), (6, 2)]);
        assert!(clean.audit().is_ok());

        let extra = ScoreSheet::from_sets(&[(6, 1), (6, 2), (2, 6)]);
        let violations = extra.audit().unwrap_err();
        assert_eq!(violations.len(), 1);
        // The rules still read the sheet.
        assert_eq!(extra.winner(), Some(Side::A));
    }
}
