//! Tests for ledger loading and auditing.

use courtside::{Finding, MatchLedger, OutputFormat, render_audit};
use courtside_scoring::Side;
use std::io::Write;
use tempfile::NamedTempFile;

const LEDGER: &str = r#"
[[matches]]
id = "ladder-r1-court1"
side_a = "Rivera"
side_b = "Okafor"
sets = "6-4 4-6 10-8"
recorded_winner = "A"

[[matches]]
id = "ladder-r1-court2"
side_a = "Lindqvist"
side_b = "Mensah"
sets = "6-2 6-3"
recorded_winner = "B"

[[matches]]
id = "ladder-r1-court3"
sets = "6-4 5-5"

[[matches]]
id = "ladder-r1-court4"
sets = "7-6 6-8"
"#;

fn ledger_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(LEDGER.as_bytes())
        .expect("Failed to write temp ledger");
    file
}

#[test]
fn test_load_from_file() {
    let file = ledger_file();
    let ledger = MatchLedger::from_file(file.path()).unwrap();
    assert_eq!(ledger.matches().len(), 4);
    assert_eq!(ledger.matches()[0].side_a().as_deref(), Some("Rivera"));
    assert_eq!(*ledger.matches()[1].recorded_winner(), Some(Side::B));
}

#[test]
fn test_audit_findings() {
    let file = ledger_file();
    let audit = MatchLedger::from_file(file.path()).unwrap().audit();

    assert!(audit.entries[0].is_clean());
    assert_eq!(audit.entries[0].winner_name.as_deref(), Some("Rivera"));

    // Recorded winner disagrees with a straight-sets win for A.
    assert_eq!(
        audit.entries[1].findings,
        vec![Finding::WinnerMismatch {
            recorded: Side::B,
            computed: Some(Side::A),
        }]
    );

    // Unfinished second set.
    assert!(matches!(
        audit.entries[2].findings.as_slice(),
        [Finding::Invariant { .. }]
    ));
    assert!(audit.entries[2].winner_name.is_none());

    // 6-8 is not a legal set.
    assert!(!audit.entries[3].is_clean());

    assert_eq!(audit.flagged_count(), 3);
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = MatchLedger::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read ledger"));
}

#[test]
fn test_malformed_toml_is_error() {
    let err = MatchLedger::from_toml("[[matches]]\nid = 3\n").unwrap_err();
    assert!(err.message.contains("Failed to parse ledger"));
}

#[test]
fn test_empty_ledger() {
    let ledger = MatchLedger::from_toml("").unwrap();
    let audit = ledger.audit();
    assert!(audit.entries.is_empty());
    assert_eq!(
        render_audit(&audit, OutputFormat::Text).unwrap(),
        "0 of 0 entries need attention"
    );
}

#[test]
fn test_audit_text_report() {
    let audit = MatchLedger::from_toml(LEDGER).unwrap().audit();
    let text = render_audit(&audit, OutputFormat::Text).unwrap();

    assert!(text.contains("[ok] ladder-r1-court1: Rivera"));
    assert!(text.contains("[CHECK] ladder-r1-court2: Lindqvist"));
    assert!(text.contains("recorded winner B but scores give A"));
    assert!(text.ends_with("3 of 4 entries need attention"));
}

#[test]
fn test_audit_json_report() {
    let audit = MatchLedger::from_toml(LEDGER).unwrap().audit();
    let json = render_audit(&audit, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["entries"][1]["findings"][0]["kind"], "winner_mismatch");
    assert_eq!(value["entries"][0]["summary"]["winner"], "A");
}
