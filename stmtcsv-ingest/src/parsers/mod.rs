//! Bank-specific statement grammars.

pub mod chase_uk;

use std::path::Path;

use crate::error::{DateError, StatementError};
use crate::types::{ParsedStatement, StatementFormat, Transaction};

pub use chase_uk::ChaseUkGrammar;

/// Recognises the account line and transaction rows of one statement layout.
pub trait StatementGrammar {
    /// Account name from the first matching account line, if any.
    fn account_name(&self, text: &str) -> Option<String>;

    /// All transaction rows in document order.
    fn transactions(&self, text: &str) -> Result<Vec<Transaction>, DateError>;
}

/// Build the grammar for `format`.
pub fn grammar_for(format: StatementFormat) -> Result<Box<dyn StatementGrammar>, StatementError> {
    match format {
        StatementFormat::ChaseUk => Ok(Box::new(ChaseUkGrammar::new()?)),
    }
}

/// Parse the extracted text of the statement at `path`.
///
/// A statement without an account line or without any transaction rows is
/// rejected rather than returned empty.
pub fn parse_statement(
    path: &Path,
    text: &str,
    grammar: &dyn StatementGrammar,
) -> Result<ParsedStatement, StatementError> {
    let account_name = grammar
        .account_name(text)
        .ok_or_else(|| StatementError::MissingAccount {
            path: path.to_path_buf(),
        })?;

    let transactions = grammar
        .transactions(text)
        .map_err(|e| e.in_statement(path))?;
    if transactions.is_empty() {
        return Err(StatementError::NoTransactions {
            path: path.to_path_buf(),
        });
    }

    log::info!(
        "{}: {} transactions for account \"{}\"",
        path.display(),
        transactions.len(),
        account_name
    );

    Ok(ParsedStatement {
        account_name,
        transactions,
    })
}
