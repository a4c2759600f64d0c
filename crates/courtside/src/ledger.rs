//! Ledger of recorded matches and its audit.
//!
//! A ledger is a TOML file of finished matches, typically entered after the
//! fact by a club administrator:
//!
//! ```toml
//! [[matches]]
//! id = "spring-ladder-r3-court2"
//! side_a = "Rivera"
//! side_b = "Okafor"
//! sets = "6-4 4-6 10-8"
//! recorded_winner = "A"
//! ```
//!
//! Auditing recomputes each winner with the scoring rules and reports
//! anything an operator should correct.

use crate::LedgerError;
use courtside_scoring::{InvariantViolation, MatchSummary, ScoreSheet, Side};
use derive_getters::Getters;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// A file of recorded matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize, JsonSchema)]
pub struct MatchLedger {
    /// Recorded matches, in file order.
    #[serde(default)]
    matches: Vec<RecordedMatch>,
}

/// One finished match as entered by an operator.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, JsonSchema)]
pub struct RecordedMatch {
    /// Identifier unique within the ledger.
    id: String,

    /// Display name for side A.
    #[serde(default)]
    side_a: Option<String>,

    /// Display name for side B.
    #[serde(default)]
    side_b: Option<String>,

    /// Set scores in `a-b` notation, e.g. `"6-4 4-6 10-8"`.
    sets: String,

    /// Winner the operator wrote down, if any.
    #[serde(default)]
    recorded_winner: Option<Side>,
}

impl RecordedMatch {
    /// Creates a recorded match without names or a recorded winner.
    pub fn new(id: impl Into<String>, sets: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            side_a: None,
            side_b: None,
            sets: sets.into(),
            recorded_winner: None,
        }
    }

    /// Sets the operator-recorded winner.
    pub fn with_recorded_winner(mut self, winner: Side) -> Self {
        self.recorded_winner = Some(winner);
        self
    }

    /// Display name for a side, falling back to its letter.
    pub fn name_of(&self, side: Side) -> String {
        let name = match side {
            Side::A => self.side_a.as_ref(),
            Side::B => self.side_b.as_ref(),
        };
        name.cloned().unwrap_or_else(|| side.to_string())
    }
}

/// Something an operator should look at for one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, derive_more::Display)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    /// The set notation could not be read.
    #[display("unreadable sets: {}", reason)]
    Unreadable {
        /// Parser message.
        reason: String,
    },

    /// A score-sheet invariant does not hold.
    #[display("{}", violation)]
    Invariant {
        /// The violated invariant.
        violation: InvariantViolation,
    },

    /// The operator's winner disagrees with the computed one.
    #[display(
        "recorded winner {} but scores give {}",
        recorded,
        describe_winner(computed)
    )]
    WinnerMismatch {
        /// Winner written in the ledger.
        recorded: Side,
        /// Winner according to the scoring rules.
        computed: Option<Side>,
    },
}

fn describe_winner(winner: &Option<Side>) -> String {
    match winner {
        Some(side) => side.to_string(),
        None => "no winner".to_string(),
    }
}

/// Audit result for one recorded match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, derive_new::new)]
pub struct EntryAudit {
    /// Entry identifier.
    pub id: String,
    /// Scoring summary, absent when the sets could not be read.
    pub summary: Option<MatchSummary>,
    /// Name of the computed winner.
    pub winner_name: Option<String>,
    /// Issues found.
    pub findings: Vec<Finding>,
}

impl EntryAudit {
    /// True when nothing needs correcting.
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Audit results for a whole ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LedgerAudit {
    /// Per-entry results, in ledger order.
    pub entries: Vec<EntryAudit>,
}

impl LedgerAudit {
    /// Entries with at least one finding.
    pub fn flagged(&self) -> impl Iterator<Item = &EntryAudit> {
        self.entries.iter().filter(|entry| !entry.is_clean())
    }

    /// Number of entries with at least one finding.
    pub fn flagged_count(&self) -> usize {
        self.flagged().count()
    }

    /// Applies the strictness policy to the audit result.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError`] when `strict` is set and any entry is flagged.
    #[instrument(skip(self), fields(entries = self.entries.len()))]
    pub fn check(&self, strict: bool) -> Result<(), LedgerError> {
        let flagged = self.flagged_count();
        if flagged == 0 {
            return Ok(());
        }
        if strict {
            return Err(LedgerError::new(format!(
                "{} ledger entries need attention",
                flagged
            )));
        }
        debug!(flagged, "Lenient audit, not failing");
        Ok(())
    }
}

impl MatchLedger {
    /// Creates a ledger from recorded matches.
    pub fn new(matches: Vec<RecordedMatch>) -> Self {
        Self { matches }
    }

    /// Parses a ledger from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError`] on malformed TOML or a repeated match id.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, LedgerError> {
        let ledger: Self = toml::from_str(content)?;
        ledger.check_unique_ids()?;
        debug!(count = ledger.matches.len(), "Parsed ledger");
        Ok(ledger)
    }

    /// Loads a ledger from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LedgerError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            LedgerError::new(format!("Failed to read ledger {}: {}", path.display(), e))
        })?;

        let ledger = Self::from_toml(&content)?;
        info!(count = ledger.matches.len(), "Ledger loaded");
        Ok(ledger)
    }

    fn check_unique_ids(&self) -> Result<(), LedgerError> {
        let mut seen = std::collections::HashSet::new();
        for entry in &self.matches {
            if !seen.insert(entry.id.as_str()) {
                return Err(LedgerError::new(format!(
                    "Duplicate match id: {}",
                    entry.id
                )));
            }
        }
        Ok(())
    }

    /// Recomputes and checks every recorded match.
    #[instrument(skip(self), fields(count = self.matches.len()))]
    pub fn audit(&self) -> LedgerAudit {
        let entries: Vec<_> = self.matches.iter().map(audit_entry).collect();
        let audit = LedgerAudit { entries };
        info!(flagged = audit.flagged_count(), "Ledger audited");
        audit
    }
}

/// Audits a single recorded match.
#[instrument(skip(entry), fields(id = %entry.id))]
pub fn audit_entry(entry: &RecordedMatch) -> EntryAudit {
    let sheet = match entry.sets.parse::<ScoreSheet>() {
        Ok(sheet) => sheet,
        Err(e) => {
            warn!(error = %e, "Unreadable set notation");
            let finding = Finding::Unreadable {
                reason: e.to_string(),
            };
            return EntryAudit::new(entry.id.clone(), None, None, vec![finding]);
        }
    };

    let summary = sheet.summary();
    let mut findings: Vec<Finding> = match sheet.audit() {
        Ok(()) => Vec::new(),
        Err(violations) => violations
            .into_iter()
            .map(|violation| Finding::Invariant { violation })
            .collect(),
    };

    if let Some(recorded) = entry.recorded_winner {
        if Some(recorded) != summary.winner {
            warn!(%recorded, computed = ?summary.winner, "Recorded winner disagrees");
            findings.push(Finding::WinnerMismatch {
                recorded,
                computed: summary.winner,
            });
        }
    }

    let winner_name = summary.winner.map(|side| entry.name_of(side));
    debug!(findings = findings.len(), ?winner_name, "Entry audited");
    EntryAudit::new(entry.id.clone(), Some(summary), winner_name, findings)
}
