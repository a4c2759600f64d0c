//! Courtside - score checking for recorded club matches.
//!
//! Library half of the `courtside` tool: configuration, ledger loading and
//! auditing, and report rendering on top of [`courtside_scoring`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod error;
pub mod ledger;
pub mod report;

pub use config::{CONFIG_ENV, CourtsideConfig};
pub use error::{ConfigError, LedgerError};
pub use ledger::{EntryAudit, Finding, LedgerAudit, MatchLedger, RecordedMatch, audit_entry};
pub use report::{OutputFormat, SetVerdict, render_audit, render_set, render_summary};
