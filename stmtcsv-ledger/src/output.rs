//! CSV output: file naming and writing for each account ledger.

use std::path::{Path, PathBuf};

use stmtcsv_ingest::Transaction;

use crate::ledger::AccountLedger;

pub const HEADER: [&str; 3] = ["Date", "Transaction details", "Amount"];

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Could not write \"{}\".", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Account \"{0}\" has no transactions")]
    EmptyAccount(String),
}

/// `<account> - <first date> to <last date>.csv`, or `None` for an empty list.
///
/// Expects `transactions` already sorted by date.
pub fn output_filename(account_name: &str, transactions: &[Transaction]) -> Option<String> {
    let first = transactions.first()?;
    let last = transactions.last()?;
    Some(format!("{} - {} to {}.csv", account_name, first.date, last.date))
}

/// Write one row per transaction, optionally preceded by the header row.
pub fn write_csv(path: &Path, transactions: &[Transaction], header: bool) -> Result<(), OutputError> {
    let csv_error = |source: csv::Error| OutputError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut wtr = csv::Writer::from_path(path).map_err(csv_error)?;

    if header {
        wtr.write_record(HEADER).map_err(csv_error)?;
    }

    for t in transactions {
        let date = t.date.to_string();
        wtr.write_record([date.as_str(), t.description.as_str(), t.amount.as_str()])
            .map_err(csv_error)?;
    }

    wtr.flush().map_err(|e| csv_error(e.into()))?;

    log::info!("Wrote {} rows to {}", transactions.len(), path.display());
    Ok(())
}

/// Write a CSV per account into `output_dir` and return the written paths.
pub fn write_ledger(ledger: &AccountLedger, output_dir: &Path, header: bool) -> Result<Vec<PathBuf>, OutputError> {
    let mut written = Vec::with_capacity(ledger.len());

    for (account_name, transactions) in ledger.iter() {
        let file_name = output_filename(account_name, transactions)
            .ok_or_else(|| OutputError::EmptyAccount(account_name.to_string()))?;
        let path = output_dir.join(file_name);
        write_csv(&path, transactions, header)?;
        written.push(path);
    }

    Ok(written)
}
