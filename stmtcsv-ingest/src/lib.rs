//! stmtcsv-ingest: PDF text extraction and bank-specific statement grammars.

pub mod error;
pub mod parsers;
pub mod pdf_text;
pub mod types;

pub use error::{DateError, StatementError};
pub use parsers::{StatementGrammar, grammar_for, parse_statement};
pub use pdf_text::extract_text;
pub use types::{ParsedStatement, StatementFormat, Transaction};
