use anyhow::Result;
use std::fmt;
use std::path::{Path, PathBuf};
use stmtcsv_ingest::{StatementError, extract_text, grammar_for};
use stmtcsv_ledger::{build_ledger, write_ledger};

use crate::config::Config;
use crate::dirs::{archive_statements, ensure_dir, find_statement_files, require_dir};

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub statements: usize,
    pub csv_files: Vec<PathBuf>,
    pub archived: usize,
}

fn files(n: usize) -> &'static str {
    if n == 1 { "file" } else { "files" }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Processed {} PDF {} and produced {} CSV {}.",
            self.statements,
            files(self.statements),
            self.csv_files.len(),
            files(self.csv_files.len())
        )
    }
}

/// Convert every statement PDF in `config.input`.
pub fn run(config: &Config) -> Result<RunSummary> {
    run_with(config, extract_text)
}

/// Same as [`run`] with a caller-supplied text extractor.
///
/// Directories are checked before any statement is read. Nothing is written
/// until every statement has parsed, and nothing is archived until every CSV
/// has been written.
pub fn run_with<F>(config: &Config, extract: F) -> Result<RunSummary>
where
    F: FnMut(&Path) -> Result<String, StatementError>,
{
    require_dir(&config.input)?;
    ensure_dir(&config.output)?;
    if let Some(archive) = &config.archive {
        ensure_dir(archive)?;
    }

    let statements = find_statement_files(&config.input)?;
    log::info!(
        "Found {} statements in {} (format: {})",
        statements.len(),
        config.input.display(),
        config.format
    );

    let grammar = grammar_for(config.format)?;
    let ledger = build_ledger(&statements, grammar.as_ref(), extract)?;
    log::info!(
        "Accounts: {}",
        ledger.account_names().collect::<Vec<_>>().join(", ")
    );
    let csv_files = write_ledger(&ledger, &config.output, config.header)?;

    let archived = match &config.archive {
        Some(archive) => archive_statements(&statements, archive)?,
        None => 0,
    };

    Ok(RunSummary {
        statements: statements.len(),
        csv_files,
        archived,
    })
}
