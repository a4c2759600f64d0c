//! Rendering of scoring results for the terminal or for other tools.

use crate::ledger::LedgerAudit;
use courtside_scoring::{MatchSummary, SetFormat, Side, is_valid_set, set_winner};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// How reports are written to stdout.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Verdict on a single set score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct SetVerdict {
    /// Games won by side A.
    pub games_a: i32,
    /// Games won by side B.
    pub games_b: i32,
    /// Format the score was judged under.
    pub format: SetFormat,
    /// Whether the score is a completed set.
    pub valid: bool,
    /// Winner of the set, if completed.
    pub winner: Option<Side>,
}

impl SetVerdict {
    /// Judges one set score.
    #[instrument]
    pub fn judge(games_a: i32, games_b: i32, format: SetFormat) -> Self {
        Self::new(
            games_a,
            games_b,
            format,
            is_valid_set(games_a, games_b, format),
            set_winner(games_a, games_b, format),
        )
    }
}

fn side_label(side: Option<Side>) -> String {
    side.map(|s| s.to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Renders a set verdict.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
#[instrument(skip(verdict))]
pub fn render_set(verdict: &SetVerdict, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(verdict),
        OutputFormat::Text => Ok(format!(
            "{}-{} ({}): {}, winner {}",
            verdict.games_a,
            verdict.games_b,
            verdict.format,
            if verdict.valid {
                "complete"
            } else {
                "not a completed set"
            },
            side_label(verdict.winner),
        )),
    }
}

/// Renders a match summary.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
#[instrument(skip(summary))]
pub fn render_summary(summary: &MatchSummary, format: OutputFormat) -> serde_json::Result<String> {
    if format == OutputFormat::Json {
        return serde_json::to_string_pretty(summary);
    }

    let mut out = String::new();
    for set in &summary.sets {
        out.push_str(&format!(
            "set {}: {}-{} ({}) winner {}\n",
            set.number,
            set.games_a,
            set.games_b,
            set.format,
            side_label(set.winner),
        ));
    }
    out.push_str(&format!("sets: {}\n", summary.tally));
    if summary.needs_third_set {
        out.push_str("deciding set required\n");
    }
    out.push_str(&format!("match winner: {}", side_label(summary.winner)));
    Ok(out)
}

/// Renders a ledger audit.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
#[instrument(skip(audit), fields(entries = audit.entries.len()))]
pub fn render_audit(audit: &LedgerAudit, format: OutputFormat) -> serde_json::Result<String> {
    if format == OutputFormat::Json {
        return serde_json::to_string_pretty(audit);
    }

    let mut out = String::new();
    for entry in &audit.entries {
        let winner = entry.winner_name.as_deref().unwrap_or("undecided");
        let status = if entry.is_clean() { "ok" } else { "CHECK" };
        out.push_str(&format!("[{}] {}: {}\n", status, entry.id, winner));
        for finding in &entry.findings {
            out.push_str(&format!("    - {}\n", finding));
        }
    }
    out.push_str(&format!(
        "{} of {} entries need attention",
        audit.flagged_count(),
        audit.entries.len()
    ));
    Ok(out)
}
