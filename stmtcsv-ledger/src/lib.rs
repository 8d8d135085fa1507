//! stmtcsv-ledger: per-account aggregation of parsed statements and CSV output

pub mod ledger;
pub mod output;

pub use ledger::{AccountLedger, build_ledger};
pub use output::{OutputError, output_filename, write_csv, write_ledger};
