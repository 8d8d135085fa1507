//! Per-account accumulation of statement transactions.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use stmtcsv_ingest::{ParsedStatement, StatementError, StatementGrammar, Transaction, parse_statement};

/// Transactions grouped by account name, in the order accounts were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountLedger {
    accounts: IndexMap<String, Vec<Transaction>>,
}

impl AccountLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a statement's transactions to its account, creating the account on first sight.
    pub fn add_statement(&mut self, statement: ParsedStatement) {
        self.accounts
            .entry(statement.account_name)
            .or_default()
            .extend(statement.transactions);
    }

    /// Sort every account by date. Equal dates keep their accumulated order.
    pub fn sort_by_date(&mut self) {
        for txns in self.accounts.values_mut() {
            txns.sort_by_key(|t| t.date);
        }
    }

    pub fn get(&self, account_name: &str) -> Option<&[Transaction]> {
        self.accounts.get(account_name).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Transaction])> {
        self.accounts
            .iter()
            .map(|(name, txns)| (name.as_str(), txns.as_slice()))
    }

    pub fn account_names(&self) -> impl Iterator<Item = &str> {
        self.accounts.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

/// Parse every statement in order and return the date-sorted ledger.
///
/// `extract` turns a statement path into its text; the first failing
/// statement aborts the whole batch.
pub fn build_ledger<F>(
    statements: &[PathBuf],
    grammar: &dyn StatementGrammar,
    mut extract: F,
) -> Result<AccountLedger, StatementError>
where
    F: FnMut(&Path) -> Result<String, StatementError>,
{
    let mut ledger = AccountLedger::new();

    for path in statements {
        let text = extract(path)?;
        let statement = parse_statement(path, &text, grammar)?;
        ledger.add_statement(statement);
    }

    ledger.sort_by_date();
    Ok(ledger)
}
