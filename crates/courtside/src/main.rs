//! Courtside - command-line entry point.

use anyhow::Result;
use clap::Parser;
use courtside::cli::{Cli, Command};
use courtside::{
    CourtsideConfig, MatchLedger, SetVerdict, render_audit, render_set, render_summary,
};
use courtside_scoring::{ScoreSheet, SetFormat};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let lenient = matches!(cli.command, Command::Audit { lenient: true, .. });
    let config = CourtsideConfig::resolve(cli.config.as_deref())?
        .with_overrides(cli.format, lenient.then_some(false));

    initialize_tracing(&config);

    match cli.command {
        Command::Set {
            games_a,
            games_b,
            super_tiebreak,
        } => run_set(&config, games_a, games_b, SetFormat::from(super_tiebreak)),
        Command::Match { sets } => run_match(&config, &sets),
        Command::Audit { ledger, .. } => run_audit(&config, &ledger),
        Command::Schema => run_schema(),
    }
}

/// Judge one set.
#[instrument(skip(config))]
fn run_set(config: &CourtsideConfig, games_a: i32, games_b: i32, format: SetFormat) -> Result<()> {
    let verdict = SetVerdict::judge(games_a, games_b, format);
    println!("{}", render_set(&verdict, *config.output())?);
    Ok(())
}

/// Score a match given in notation.
#[instrument(skip(config))]
fn run_match(config: &CourtsideConfig, sets: &[String]) -> Result<()> {
    let sheet: ScoreSheet = sets.join(" ").parse()?;
    info!(%sheet, "Scoring match");

    if let Err(violations) = sheet.audit() {
        for violation in &violations {
            warn!(%violation, "Score sheet issue");
        }
    }

    println!("{}", render_summary(&sheet.summary(), *config.output())?);
    Ok(())
}

/// Audit a ledger file.
#[instrument(skip(config), fields(ledger = %path.display()))]
fn run_audit(config: &CourtsideConfig, path: &std::path::Path) -> Result<()> {
    let ledger = MatchLedger::from_file(path)?;
    let audit = ledger.audit();
    println!("{}", render_audit(&audit, *config.output())?);

    audit.check(*config.strict())?;
    Ok(())
}

/// Print the ledger JSON schema.
#[instrument]
fn run_schema() -> Result<()> {
    let schema = schemars::schema_for!(MatchLedger);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

/// Logs go to stderr so report output stays clean on stdout.
fn initialize_tracing(config: &CourtsideConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(output = %config.output(), "Tracing initialized");
}
